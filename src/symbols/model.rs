use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::core::result::field_mapped;
use crate::core::{FieldMap, FmpError, fields};

/// Kind of tradable instrument behind a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickerKind {
    Etf,
    Stock,
    Crypto,
    Fund,
    Index,
    Commodity,
}

impl TickerKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TickerKind::Etf => "etf",
            TickerKind::Stock => "stock",
            TickerKind::Crypto => "crypto",
            TickerKind::Fund => "fund",
            TickerKind::Index => "index",
            TickerKind::Commodity => "commodity",
        }
    }
}

impl fmt::Display for TickerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TickerKind {
    type Err = FmpError;

    /// Case-insensitive; trusts are reported as stocks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "etf" => Ok(TickerKind::Etf),
            "stock" | "trust" => Ok(TickerKind::Stock),
            "fund" => Ok(TickerKind::Fund),
            "index" => Ok(TickerKind::Index),
            "crypto" => Ok(TickerKind::Crypto),
            "commodity" => Ok(TickerKind::Commodity),
            other => Err(FmpError::Data(format!("Unknown type of stock \"{other}\""))),
        }
    }
}

/// A listed symbol (`stock/list`, `etf/list`, `quotes/{kind}` endpoints).
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    data: FieldMap,
}

field_mapped!(Symbol, Symbol);

impl Symbol {
    /// Wraps a record whose listing endpoint implies the kind, overriding its `type`.
    #[must_use]
    pub fn with_kind(mut data: FieldMap, kind: TickerKind) -> Self {
        data.insert("type".into(), Value::String(kind.as_str().into()));
        Self { data }
    }

    pub fn symbol(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "symbol")
    }

    pub fn name(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "name")
    }

    pub fn exchange(&self) -> Result<Option<&str>, FmpError> {
        fields::string_opt(&self.data, "exchange")
    }

    pub fn exchange_short_name(&self) -> Result<Option<&str>, FmpError> {
        fields::string_opt(&self.data, "exchangeShortName")
    }

    /// # Errors
    ///
    /// `Data` when `type` is missing or not a known kind.
    pub fn kind(&self) -> Result<TickerKind, FmpError> {
        fields::string(&self.data, "type")?.parse()
    }
}
