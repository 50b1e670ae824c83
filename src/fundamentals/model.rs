use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::core::result::field_mapped;
use crate::core::{FieldMap, FmpError, fields};

/// Reporting period of a financial statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatementPeriod {
    #[default]
    Annual,
    Quarter,
}

impl StatementPeriod {
    pub const fn as_str(self) -> &'static str {
        match self {
            StatementPeriod::Annual => "annual",
            StatementPeriod::Quarter => "quarter",
        }
    }
}

impl fmt::Display for StatementPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementPeriod {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(StatementPeriod::Annual),
            "quarter" => Ok(StatementPeriod::Quarter),
            other => Err(FmpError::Data(format!("unknown statement period {other}"))),
        }
    }
}

/// One income statement row (`income-statement/{symbol}`).
#[derive(Debug, Clone, PartialEq)]
pub struct Financial {
    data: FieldMap,
}

field_mapped!(Financial, Financial);

impl Financial {
    pub fn symbol(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "symbol")
    }

    pub fn date(&self) -> Result<NaiveDate, FmpError> {
        Ok(fields::datetime(&self.data, "date")?.date())
    }

    pub fn ebitda(&self) -> Result<Option<i64>, FmpError> {
        fields::int_opt(&self.data, "ebitda")
    }

    pub fn revenue(&self) -> Result<Option<i64>, FmpError> {
        fields::int_opt(&self.data, "revenue")
    }

    pub fn net_income(&self) -> Result<Option<i64>, FmpError> {
        fields::int_opt(&self.data, "netIncome")
    }

    pub fn eps(&self) -> Result<Option<f64>, FmpError> {
        fields::floatish_opt(&self.data, "eps")
    }
}
