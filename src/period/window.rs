use chrono::{Days, Duration, Local, Months, NaiveDate, NaiveDateTime};

use super::{Period, PeriodUnit};

/// A pair of calendar dates bounding a historical request.
///
/// `start` holds the later date ("now") and `end` the earlier one. Endpoints take the
/// earlier bound first, so [`DateWindow::end`] feeds the `from` URL segment and
/// [`DateWindow::start`] the `to` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// An explicit window; `start` is the later bound.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `repeat` periods back from the current local time.
    #[must_use]
    pub fn from_period(period: &Period, repeat: u32) -> Self {
        Self::from_period_at(period, repeat, Local::now().naive_local())
    }

    /// `repeat` periods back from `now`.
    ///
    /// When the earlier bound lands on the same calendar day as `now` (short sub-day
    /// periods), it is moved to `now - 1 day` so the window is never empty.
    #[must_use]
    pub fn from_period_at(period: &Period, repeat: u32, now: NaiveDateTime) -> Self {
        let amount = period.magnitude().saturating_mul(repeat);
        let earlier = subtract(now, period.unit(), amount);

        let end = if earlier.date() == now.date() {
            now.date() - Days::new(1)
        } else {
            earlier.date()
        };

        Self {
            start: now.date(),
            end,
        }
    }

    /// The later bound.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The earlier bound.
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

fn subtract(now: NaiveDateTime, unit: PeriodUnit, amount: u32) -> NaiveDateTime {
    let amount_i = i64::from(amount);
    let shifted = match unit {
        PeriodUnit::Minute => now.checked_sub_signed(Duration::minutes(amount_i)),
        PeriodUnit::Hour => now.checked_sub_signed(Duration::hours(amount_i)),
        PeriodUnit::Day => now.checked_sub_days(Days::new(u64::from(amount))),
        PeriodUnit::Week => now.checked_sub_days(Days::new(u64::from(amount) * 7)),
        PeriodUnit::Month => now.checked_sub_months(Months::new(amount)),
        PeriodUnit::Year => now.checked_sub_months(Months::new(amount.saturating_mul(12))),
    };
    shifted.unwrap_or(NaiveDateTime::MIN)
}
