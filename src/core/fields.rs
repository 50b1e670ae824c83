//! Tolerant typed getters over provider JSON objects.
//!
//! Results keep the provider payload verbatim as a [`FieldMap`] and read fields lazily,
//! so a result can always be flattened back to exactly what was received.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

use crate::core::FmpError;

/// A single provider record: field name to raw JSON value, in provider order.
pub type FieldMap = serde_json::Map<String, Value>;

fn missing(key: &str) -> FmpError {
    FmpError::Data(format!("missing field `{key}`"))
}

fn mistyped(key: &str, expected: &str, got: &Value) -> FmpError {
    FmpError::Data(format!("field `{key}` expected {expected}, got {got}"))
}

fn present<'a>(map: &'a FieldMap, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

pub(crate) fn string<'a>(map: &'a FieldMap, key: &str) -> Result<&'a str, FmpError> {
    string_opt(map, key)?.ok_or_else(|| missing(key))
}

pub(crate) fn string_opt<'a>(map: &'a FieldMap, key: &str) -> Result<Option<&'a str>, FmpError> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(mistyped(key, "string", other)),
    }
}

/// Numbers, or strings holding a number (the provider is not consistent).
pub(crate) fn floatish(map: &FieldMap, key: &str) -> Result<f64, FmpError> {
    floatish_opt(map, key)?.ok_or_else(|| missing(key))
}

pub(crate) fn floatish_opt(map: &FieldMap, key: &str) -> Result<Option<f64>, FmpError> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| mistyped(key, "float", &Value::Number(n.clone()))),
        Some(v @ Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| mistyped(key, "float", v)),
        Some(other) => Err(mistyped(key, "float", other)),
    }
}

pub(crate) fn int(map: &FieldMap, key: &str) -> Result<i64, FmpError> {
    int_opt(map, key)?.ok_or_else(|| missing(key))
}

pub(crate) fn int_opt(map: &FieldMap, key: &str) -> Result<Option<i64>, FmpError> {
    match present(map, key) {
        None => Ok(None),
        Some(v @ Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| mistyped(key, "int", v)),
        Some(other) => Err(mistyped(key, "int", other)),
    }
}

/// Provider timestamps come as `YYYY-MM-DD HH:MM:SS` or as plain `YYYY-MM-DD`.
pub(crate) fn parse_datetime(raw: &str) -> Result<NaiveDateTime, FmpError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|e| FmpError::Data(format!("invalid date `{raw}`: {e}")))
}

pub(crate) fn datetime(map: &FieldMap, key: &str) -> Result<NaiveDateTime, FmpError> {
    parse_datetime(string(map, key)?)
}

/// Interpret a JSON value as a record, failing with `Data` otherwise.
pub(crate) fn record(value: Value) -> Result<FieldMap, FmpError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(FmpError::Data(format!("expected a JSON object, got {other}"))),
    }
}

/// Interpret a JSON value as a list of records.
pub(crate) fn records(value: Value) -> Result<Vec<FieldMap>, FmpError> {
    match value {
        Value::Array(items) => items.into_iter().map(record).collect(),
        other => Err(FmpError::Data(format!("expected a JSON array, got {other}"))),
    }
}
