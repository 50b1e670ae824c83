mod model;

pub use model::{Financial, StatementPeriod};

use crate::collection::mapper::map_to_objects;
use crate::core::{ApiVersion, FmpClient, FmpError};

/// Fetches income statements, newest first.
///
/// `limit` and `period` are only sent when given; the provider defaults to annual rows.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn financials(
    client: &FmpClient,
    symbol: &str,
    limit: Option<u32>,
    period: Option<StatementPeriod>,
) -> Result<Vec<Financial>, FmpError> {
    let mut url = client.url(ApiVersion::V3, "income-statement", &[symbol])?;
    {
        let mut qp = url.query_pairs_mut();
        if let Some(limit) = limit {
            qp.append_pair("limit", &limit.to_string());
        }
        if let Some(period) = period {
            qp.append_pair("period", period.as_str());
        }
    }
    map_to_objects(client.get_json(url).await?)
}

/// The most recent income statement, if any.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn financial(
    client: &FmpClient,
    symbol: &str,
    period: Option<StatementPeriod>,
) -> Result<Option<Financial>, FmpError> {
    Ok(financials(client, symbol, Some(1), period)
        .await?
        .into_iter()
        .next())
}
