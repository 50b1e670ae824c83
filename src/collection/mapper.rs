//! Helpers turning decoded provider payloads into typed results.

use serde_json::Value;

use super::SymbolCollection;
use crate::core::{FieldMap, FieldMapped, FmpError, fields};

/// Maps every record of a JSON array with `T::from_field_map`.
pub(crate) fn map_to_objects<T: FieldMapped>(value: Value) -> Result<Vec<T>, FmpError> {
    fields::records(value)?
        .into_iter()
        .map(T::from_field_map)
        .collect()
}

/// Maps the first record of a JSON array, `NoData` when there is none.
pub(crate) fn map_to_object<T: FieldMapped>(value: Value, what: &str) -> Result<T, FmpError> {
    let first = match value {
        Value::Array(items) => items.into_iter().next(),
        _ => None,
    };
    let first = first.ok_or_else(|| FmpError::NoData(what.to_string()))?;
    T::from_field_map(fields::record(first)?)
}

/// Keys every record by its `symbol` field.
pub(crate) fn map_with_symbol_key<T, F>(
    records: impl IntoIterator<Item = FieldMap>,
    mut build: F,
) -> Result<SymbolCollection<T>, FmpError>
where
    F: FnMut(FieldMap) -> Result<T, FmpError>,
{
    let mut out = SymbolCollection::new();
    for record in records {
        let symbol = fields::string(&record, "symbol")?.to_string();
        out.insert(symbol, build(record)?);
    }
    Ok(out)
}

/// [`map_with_symbol_key`] over a JSON array with `T::from_field_map`.
pub(crate) fn map_to_collection<T: FieldMapped>(
    value: Value,
) -> Result<SymbolCollection<T>, FmpError> {
    map_with_symbol_key(fields::records(value)?, T::from_field_map)
}
