use chrono::NaiveDateTime;

use crate::core::result::field_mapped;
use crate::core::{FieldMap, FmpError, fields};

/// One aggregated historical price bar (v4 `historical-price*` endpoints).
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalPrice {
    data: FieldMap,
}

field_mapped!(HistoricalPrice, HistoricalPrice);

impl HistoricalPrice {
    /// Close price of the bar.
    pub fn price(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "c")
    }

    pub fn date(&self) -> Result<NaiveDateTime, FmpError> {
        bar_date(&self.data)
    }
}

/// A historical price that also names its symbol, as found in bulk end-of-day rows.
///
/// Cache blobs of this type can be read back as plain [`HistoricalPrice`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalPriceWithSymbol {
    data: FieldMap,
}

field_mapped!(HistoricalPriceWithSymbol, HistoricalPriceWithSymbol);

impl HistoricalPriceWithSymbol {
    pub fn symbol(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "symbol")
    }

    pub fn price(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "c")
    }

    pub fn date(&self) -> Result<NaiveDateTime, FmpError> {
        bar_date(&self.data)
    }
}

fn bar_date(data: &FieldMap) -> Result<NaiveDateTime, FmpError> {
    // v4 spells it "formated" on some endpoints
    if data.get("formated").is_some_and(|v| !v.is_null()) {
        return fields::datetime(data, "formated");
    }
    fields::datetime(data, "formatted")
}
