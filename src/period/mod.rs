//! Interval descriptors such as `5minute`, `1 day` or `3 months`.

pub mod window;

use std::fmt;
use std::str::FromStr;

use crate::core::FmpError;

pub use window::DateWindow;

/// The closed set of period units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl PeriodUnit {
    /// Singular lower-case name, as used in provider URLs.
    pub const fn as_str(self) -> &'static str {
        match self {
            PeriodUnit::Minute => "minute",
            PeriodUnit::Hour => "hour",
            PeriodUnit::Day => "day",
            PeriodUnit::Week => "week",
            PeriodUnit::Month => "month",
            PeriodUnit::Year => "year",
        }
    }

    /// Plural lower-case name.
    pub const fn plural(self) -> &'static str {
        match self {
            PeriodUnit::Minute => "minutes",
            PeriodUnit::Hour => "hours",
            PeriodUnit::Day => "days",
            PeriodUnit::Week => "weeks",
            PeriodUnit::Month => "months",
            PeriodUnit::Year => "years",
        }
    }

    fn from_token(token: &str) -> Option<(Self, bool)> {
        let unit = match token {
            "minute" | "minutes" => PeriodUnit::Minute,
            "hour" | "hours" => PeriodUnit::Hour,
            "day" | "days" => PeriodUnit::Day,
            "week" | "weeks" => PeriodUnit::Week,
            "month" | "months" => PeriodUnit::Month,
            "year" | "years" => PeriodUnit::Year,
            _ => return None,
        };
        Some((unit, token.ends_with('s')))
    }
}

/// A magnitude + unit interval. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    magnitude: u32,
    unit: PeriodUnit,
    plural: bool,
}

impl Period {
    /// Parses a period string.
    ///
    /// Whitespace is removed and the rest lower-cased. A leading digit run is the
    /// magnitude (absent or zero means 1); the remainder must name a unit.
    ///
    /// # Errors
    ///
    /// `InvalidPeriod` for an unknown unit or a magnitude that does not fit in `u32`.
    pub fn parse(input: &str) -> Result<Self, FmpError> {
        let normalized: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        let split = normalized
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(normalized.len());
        let (digits, token) = normalized.split_at(split);

        let magnitude = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u32>()
                .map_err(|_| FmpError::InvalidPeriod(input.to_string()))?
                .max(1)
        };

        let (unit, plural) = PeriodUnit::from_token(token)
            .ok_or_else(|| FmpError::InvalidPeriod(token.to_string()))?;

        Ok(Self {
            magnitude,
            unit,
            plural,
        })
    }

    /// A period built from parts; `magnitude` 0 becomes 1.
    #[must_use]
    pub fn new(magnitude: u32, unit: PeriodUnit) -> Self {
        Self {
            magnitude: magnitude.max(1),
            unit,
            plural: magnitude > 1,
        }
    }

    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    pub fn unit(&self) -> PeriodUnit {
        self.unit
    }

    /// The unit as written (`preserve_plural`) or in singular form.
    pub fn unit_str(&self, preserve_plural: bool) -> &'static str {
        if preserve_plural && self.plural {
            self.unit.plural()
        } else {
            self.unit.as_str()
        }
    }

    pub fn is_minutely(&self) -> bool {
        self.unit == PeriodUnit::Minute
    }

    pub fn is_hourly(&self) -> bool {
        self.unit == PeriodUnit::Hour
    }

    pub fn is_daily(&self) -> bool {
        self.unit == PeriodUnit::Day
    }

    pub fn is_weekly(&self) -> bool {
        self.unit == PeriodUnit::Week
    }

    pub fn is_monthly(&self) -> bool {
        self.unit == PeriodUnit::Month
    }

    pub fn is_yearly(&self) -> bool {
        self.unit == PeriodUnit::Year
    }
}

impl FromStr for Period {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit_str(true))
    }
}
