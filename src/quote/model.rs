use crate::core::result::field_mapped;
use crate::core::{FieldMap, FmpError, fields};

/// A full company quote (`quote`, `quotes/{segment}` endpoints).
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    data: FieldMap,
}

field_mapped!(Quote, Quote);

impl Quote {
    pub fn symbol(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "symbol")
    }

    pub fn name(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "name")
    }

    pub fn exchange(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "exchange")
    }

    pub fn price(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "price")
    }

    pub fn change(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "change")
    }

    /// Percent change, e.g. `1.5` for +1.5%.
    pub fn change_percentage(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "changesPercentage")
    }

    pub fn open(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "open")
    }

    pub fn previous_close(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "previousClose")
    }

    pub fn market_cap(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "marketCap")
    }

    pub fn pe(&self) -> Result<Option<f64>, FmpError> {
        fields::floatish_opt(&self.data, "pe")
    }

    pub fn eps(&self) -> Result<Option<f64>, FmpError> {
        fields::floatish_opt(&self.data, "eps")
    }
}

/// A short realtime price (`quote-short` endpoint).
#[derive(Debug, Clone, PartialEq)]
pub struct RealtimePrice {
    data: FieldMap,
}

field_mapped!(RealtimePrice, RealtimePrice);

impl RealtimePrice {
    pub fn symbol(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "symbol")
    }

    pub fn price(&self) -> Result<f64, FmpError> {
        fields::floatish(&self.data, "price")
    }

    pub fn volume(&self) -> Result<i64, FmpError> {
        fields::int(&self.data, "volume")
    }
}
