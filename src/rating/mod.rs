//! Company ratings, one request per symbol committed as a keyed batch.

use crate::collection::SymbolCollection;
use crate::collection::mapper::map_to_object;
use crate::core::result::field_mapped;
use crate::core::{ApiVersion, FieldMap, FmpClient, FmpError, fields};

/// A provider rating snapshot (`rating/{symbol}`).
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    data: FieldMap,
}

field_mapped!(Rating, Rating);

impl Rating {
    pub fn symbol(&self) -> Result<&str, FmpError> {
        fields::string(&self.data, "symbol")
    }

    /// Letter grade such as `S+` or `B`.
    pub fn rating(&self) -> Result<Option<&str>, FmpError> {
        fields::string_opt(&self.data, "rating")
    }

    pub fn rating_score(&self) -> Result<i64, FmpError> {
        fields::int(&self.data, "ratingScore")
    }

    pub fn recommendation(&self) -> Result<Option<&str>, FmpError> {
        fields::string_opt(&self.data, "ratingRecommendation")
    }
}

/// Fetches the rating of every symbol, keyed by the requested symbol.
///
/// Requests go out together in one batch; a symbol requested twice is fetched once.
///
/// # Errors
///
/// `NoData` when a symbol has no rating, `RateLimited` when it stays throttled after the
/// retry rounds, plus any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn rating(
    client: &FmpClient,
    symbols: &[&str],
) -> Result<SymbolCollection<Rating>, FmpError> {
    let mut batch = client.batch();
    for symbol in symbols {
        batch.get(
            client.url(ApiVersion::V3, "rating", &[symbol])?,
            Some((*symbol).to_string()),
        );
    }
    batch.commit().await;

    let mut out = SymbolCollection::new();
    for (symbol, handle) in batch.into_keyed() {
        let value = handle.into_response().await?.json()?;
        let rating: Rating = map_to_object(value, &format!("rating for {symbol}"))?;
        out.insert(symbol, rating);
    }
    Ok(out)
}
