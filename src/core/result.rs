//! Typed result capability and the registry of cacheable result kinds.

use std::fmt;
use std::str::FromStr;

use crate::core::{FieldMap, FmpError};

/// Closed registry of the result types that can be stored in a cache blob.
///
/// The tag is what gets persisted in the `type` slot of a cache blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Quote,
    RealtimePrice,
    Symbol,
    Rating,
    Financial,
    HistoricalPrice,
    HistoricalPriceWithSymbol,
    TimeSeries,
}

impl ResultKind {
    /// Every registered kind.
    pub const ALL: [ResultKind; 8] = [
        ResultKind::Quote,
        ResultKind::RealtimePrice,
        ResultKind::Symbol,
        ResultKind::Rating,
        ResultKind::Financial,
        ResultKind::HistoricalPrice,
        ResultKind::HistoricalPriceWithSymbol,
        ResultKind::TimeSeries,
    ];

    /// The persisted type tag.
    pub const fn tag(self) -> &'static str {
        match self {
            ResultKind::Quote => "fmp.quote",
            ResultKind::RealtimePrice => "fmp.realtime_price",
            ResultKind::Symbol => "fmp.symbol",
            ResultKind::Rating => "fmp.rating",
            ResultKind::Financial => "fmp.financial",
            ResultKind::HistoricalPrice => "fmp.historical_price",
            ResultKind::HistoricalPriceWithSymbol => "fmp.historical_price_with_symbol",
            ResultKind::TimeSeries => "fmp.time_series",
        }
    }

    /// Look a tag up in the registry.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Whether values stored under `self` may be rebuilt as `base`.
    ///
    /// A kind is compatible with itself; a historical price carrying a symbol is also
    /// a plain historical price.
    pub fn is_compatible_with(self, base: ResultKind) -> bool {
        self == base
            || matches!(
                (self, base),
                (ResultKind::HistoricalPriceWithSymbol, ResultKind::HistoricalPrice)
            )
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ResultKind {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| FmpError::Logic(format!("unknown result type {s}")))
    }
}

/// A typed result that can be rebuilt from, and flattened back to, its provider field map.
pub trait FieldMapped: Sized {
    /// Registry entry of this type.
    const KIND: ResultKind;

    /// Build the typed value from a provider record.
    fn from_field_map(map: FieldMap) -> Result<Self, FmpError>;

    /// The provider record this value was built from (after any normalisation).
    fn to_field_map(&self) -> FieldMap;
}

/// Implements [`FieldMapped`] plus the common constructors for a result that wraps a
/// `data: FieldMap`.
macro_rules! field_mapped {
    ($ty:ident, $kind:ident) => {
        impl $ty {
            /// Wraps a provider record.
            #[must_use]
            pub fn new(data: $crate::core::FieldMap) -> Self {
                Self { data }
            }

            /// Raw provider record.
            #[must_use]
            pub fn data(&self) -> &$crate::core::FieldMap {
                &self.data
            }
        }

        impl $crate::core::FieldMapped for $ty {
            const KIND: $crate::core::ResultKind = $crate::core::ResultKind::$kind;

            fn from_field_map(
                map: $crate::core::FieldMap,
            ) -> Result<Self, $crate::core::FmpError> {
                Ok(Self::new(map))
            }

            fn to_field_map(&self) -> $crate::core::FieldMap {
                self.data.clone()
            }
        }
    };
}

pub(crate) use field_mapped;
