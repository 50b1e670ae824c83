use chrono::{Days, Months, NaiveDate};

use super::model::{TimeSeries, TimeSeriesKind};
use crate::core::FmpError;

/// Points of a 5-minute chart covering one trading day.
pub const DAY_POINTS: usize = 79;
/// Points of a 30-minute chart covering five trading days.
pub const FIVE_DAYS_POINTS: usize = 70;
/// `Max` series this short are returned as they are.
pub const MAX_UNWINDOWED_POINTS: usize = 40;

/// Selects the points of `points` to chart for `kind`.
///
/// `points` must be sorted newest first; the output keeps that order. Daily kinds drop
/// everything older than the lookback cutoff, and `Year`/`FiveYears` keep at most one
/// point per week. The weekly cursor starts at tomorrow, so the newest point always
/// survives thinning.
///
/// # Errors
///
/// `Data` when a point inside the scanned range has no parseable `date`.
pub fn sample_series(
    points: Vec<TimeSeries>,
    kind: TimeSeriesKind,
    today: NaiveDate,
) -> Result<Vec<TimeSeries>, FmpError> {
    match kind {
        TimeSeriesKind::Day => return Ok(points.into_iter().take(DAY_POINTS).collect()),
        TimeSeriesKind::FiveDays => {
            return Ok(points.into_iter().take(FIVE_DAYS_POINTS).collect());
        }
        TimeSeriesKind::Max if points.len() <= MAX_UNWINDOWED_POINTS => return Ok(points),
        _ => {}
    }

    let cutoff = kind
        .lookback_months()
        .map(|months| today.checked_sub_months(Months::new(months)).unwrap_or(NaiveDate::MIN));
    let thin = kind.thinned_weekly();
    let mut cursor = today.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);

    let mut out = Vec::new();
    for point in points {
        let date = point.date()?.date();

        if cutoff.is_some_and(|c| date < c) {
            break;
        }

        if thin {
            if date > cursor {
                continue;
            }
            cursor = date.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN);
        }

        out.push(point);
    }
    Ok(out)
}
