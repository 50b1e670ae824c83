//! Chart-ready price series.

mod model;
mod sampler;

pub use model::{TimeSeries, TimeSeriesKind};
pub use sampler::{DAY_POINTS, FIVE_DAYS_POINTS, MAX_UNWINDOWED_POINTS, sample_series};

use chrono::Local;
use serde_json::Value;

use crate::collection::mapper::map_to_objects;
use crate::core::{ApiVersion, FmpClient, FmpError};

/// Fetches and samples the chart series of `symbol` for `kind`.
///
/// `Day` and `FiveDays` read the 5- and 30-minute charts; the other kinds read the daily
/// close line and are windowed by [`sample_series`] against today's local date.
///
/// # Errors
///
/// `NoData` when the daily payload has no `historical` array, `Data` for malformed
/// points, plus any request error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn time_series(
    client: &FmpClient,
    symbol: &str,
    kind: TimeSeriesKind,
) -> Result<Vec<TimeSeries>, FmpError> {
    let today = Local::now().date_naive();

    let points = match kind {
        TimeSeriesKind::Day | TimeSeriesKind::FiveDays => {
            let resolution = if kind == TimeSeriesKind::Day {
                "historical-chart/5min"
            } else {
                "historical-chart/30min"
            };
            let url = client.url(ApiVersion::V3, resolution, &[symbol])?;
            map_to_objects(client.get_json(url).await?)?
        }
        _ => {
            let mut url = client.url(ApiVersion::V3, "historical-price-full", &[symbol])?;
            url.query_pairs_mut().append_pair("serietype", "line");
            let mut data = client.get_json(url).await?;
            match data.get_mut("historical").map(Value::take) {
                Some(Value::Null) | None => {
                    return Err(FmpError::NoData(format!("daily series for {symbol}")));
                }
                Some(historical) => map_to_objects(historical)?,
            }
        }
    };

    sample_series(points, kind, today)
}
