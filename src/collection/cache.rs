use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SymbolCollection;
use crate::core::{FieldMap, FieldMapped, FmpError, ResultKind};

/// Persisted form of a [`SymbolCollection`]:
/// `{"type": <tag or null>, "cache": {<symbol>: {<field>: <value>, ...}, ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheBlob {
    /// Registry tag of the stored values, `None` for an empty collection.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Flattened values keyed by symbol. Also read from `entries`.
    #[serde(alias = "entries")]
    pub cache: serde_json::Map<String, Value>,
}

impl<T: FieldMapped> SymbolCollection<T> {
    /// Flattens every value into a cache blob tagged with `T`'s registry kind.
    pub fn to_cache(&self) -> CacheBlob {
        if self.is_empty() {
            return CacheBlob {
                kind: None,
                cache: serde_json::Map::new(),
            };
        }

        let cache = self
            .iter()
            .map(|(symbol, value)| (symbol.to_string(), Value::Object(value.to_field_map())))
            .collect();

        CacheBlob {
            kind: Some(T::KIND.tag().to_string()),
            cache,
        }
    }

    /// Rebuilds a collection from a raw cache blob.
    ///
    /// # Errors
    ///
    /// `Logic` when the blob lacks its `type` or `cache` key, declares a type that is
    /// unknown or not compatible with `T`, or holds non-object entries. Errors from
    /// [`FieldMapped::from_field_map`] are passed through.
    pub fn from_cache(blob: &Value) -> Result<Self, FmpError> {
        let Value::Object(obj) = blob else {
            return Err(FmpError::Logic("Given cache is not an object.".into()));
        };

        let Some(kind) = obj.get("type") else {
            return Err(FmpError::Logic("Given cache does not have type key.".into()));
        };

        let entries = obj
            .get("cache")
            .or_else(|| obj.get("entries"))
            .filter(|v| !v.is_null())
            .ok_or_else(|| FmpError::Logic("Given cache does not have cache key.".into()))?;

        let kind = match kind {
            Value::Null => return Ok(Self::new()),
            Value::String(s) => s.as_str(),
            other => {
                return Err(FmpError::Logic(format!(
                    "Given cache type must be a string or null, {other} given."
                )));
            }
        };

        let Value::Object(entries) = entries else {
            return Err(FmpError::Logic("Given cache entries are not an object.".into()));
        };

        Self::rebuild(kind, entries.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// Rebuilds a collection from a decoded [`CacheBlob`].
    ///
    /// # Errors
    ///
    /// Same as [`SymbolCollection::from_cache`].
    pub fn from_cache_blob(blob: CacheBlob) -> Result<Self, FmpError> {
        match blob.kind {
            None => Ok(Self::new()),
            Some(kind) => Self::rebuild(&kind, blob.cache),
        }
    }

    fn rebuild(
        tag: &str,
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Self, FmpError> {
        let declared: ResultKind = tag.parse()?;
        if !declared.is_compatible_with(T::KIND) {
            return Err(FmpError::Logic(format!(
                "Given type {} is not instance of {}.",
                declared,
                T::KIND
            )));
        }

        let mut out = Self::new();
        for (symbol, value) in entries {
            let map: FieldMap = match value {
                Value::Object(map) => map,
                other => {
                    return Err(FmpError::Logic(format!(
                        "Cache entry {symbol} must be an object, {other} given."
                    )));
                }
            };
            out.insert(symbol, T::from_field_map(map)?);
        }
        Ok(out)
    }
}

impl CacheBlob {
    /// The blob as a JSON value.
    ///
    /// # Errors
    ///
    /// Never fails for blobs built by this crate; kept fallible to mirror `serde_json`.
    pub fn to_value(&self) -> Result<Value, FmpError> {
        Ok(serde_json::to_value(self)?)
    }
}
