use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::core::result::field_mapped;
use crate::core::{FieldMap, FmpError, fields};

/// Chart span requested from [`time_series`](super::time_series).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSeriesKind {
    /// One trading day at 5-minute resolution.
    Day,
    /// Five trading days at 30-minute resolution.
    FiveDays,
    Month,
    SixMonths,
    /// One year of daily closes thinned to about one point per week.
    Year,
    /// Five years of daily closes thinned to about one point per week.
    FiveYears,
    /// The whole daily history.
    Max,
}

impl TimeSeriesKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeSeriesKind::Day => "day",
            TimeSeriesKind::FiveDays => "five_days",
            TimeSeriesKind::Month => "month",
            TimeSeriesKind::SixMonths => "six_months",
            TimeSeriesKind::Year => "year",
            TimeSeriesKind::FiveYears => "five_years",
            TimeSeriesKind::Max => "max",
        }
    }

    /// Months of daily history kept, `None` for no cutoff.
    pub(crate) const fn lookback_months(self) -> Option<u32> {
        match self {
            TimeSeriesKind::Month => Some(1),
            TimeSeriesKind::SixMonths => Some(6),
            TimeSeriesKind::Year => Some(12),
            TimeSeriesKind::FiveYears => Some(60),
            TimeSeriesKind::Day | TimeSeriesKind::FiveDays | TimeSeriesKind::Max => None,
        }
    }

    pub(crate) const fn thinned_weekly(self) -> bool {
        matches!(self, TimeSeriesKind::Year | TimeSeriesKind::FiveYears)
    }
}

impl fmt::Display for TimeSeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSeriesKind {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "day" => TimeSeriesKind::Day,
            "five_days" => TimeSeriesKind::FiveDays,
            "month" => TimeSeriesKind::Month,
            "six_months" => TimeSeriesKind::SixMonths,
            "year" => TimeSeriesKind::Year,
            "five_years" => TimeSeriesKind::FiveYears,
            "max" => TimeSeriesKind::Max,
            other => return Err(FmpError::Data(format!("unknown time series type {other}"))),
        })
    }
}

/// One chart point: a date and a close price.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    data: FieldMap,
}

field_mapped!(TimeSeries, TimeSeries);

impl TimeSeries {
    pub fn date(&self) -> Result<NaiveDateTime, FmpError> {
        fields::datetime(&self.data, "date")
    }

    /// `close` for chart endpoints, `price` for line series that only carry that.
    pub fn price(&self) -> Result<f64, FmpError> {
        if self.data.get("close").is_some_and(|v| !v.is_null()) {
            return fields::floatish(&self.data, "close");
        }
        fields::floatish(&self.data, "price")
    }
}
