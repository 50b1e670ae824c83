use serde_json::Value;

use super::model::{Quote, RealtimePrice};
use crate::collection::SymbolCollection;
use crate::collection::mapper::{map_to_collection, map_to_object, map_with_symbol_key};
use crate::core::{ApiVersion, FieldMap, FieldMapped, FmpClient, FmpError, fields};

pub(super) async fn quote(client: &FmpClient, symbol: &str) -> Result<Quote, FmpError> {
    let url = client.url(ApiVersion::V3, "quote", &[symbol])?;
    let data = client.get_json(url).await?;
    map_to_object(data, &format!("quote for {symbol}"))
}

pub(super) async fn quotes(
    client: &FmpClient,
    symbols: &[&str],
) -> Result<SymbolCollection<Quote>, FmpError> {
    if symbols.is_empty() {
        return Ok(SymbolCollection::new());
    }
    let url = client.url(ApiVersion::V3, "quote", symbols)?;
    map_to_collection(client.get_json(url).await?)
}

/// Segment listings contain placeholder rows without prices; those are dropped.
fn is_complete(record: &FieldMap) -> bool {
    ["price", "name", "previousClose", "open"]
        .iter()
        .all(|key| record.get(*key).is_some_and(|v| !v.is_null()))
}

pub(super) async fn quotes_by_segments(
    client: &FmpClient,
    segments: &[&str],
) -> Result<SymbolCollection<Quote>, FmpError> {
    let mut batch = client.batch();
    for segment in segments {
        batch.get(client.url(ApiVersion::V3, "quotes", &[segment])?, None);
    }
    batch.commit().await;

    let mut out = SymbolCollection::new();
    for handle in batch.into_responses() {
        let value: Value = handle.into_response().await?.json()?;
        let records = fields::records(value)?.into_iter().filter(is_complete);
        out.extend_from(map_with_symbol_key(records, Quote::from_field_map)?);
    }
    Ok(out)
}

pub(super) async fn realtime_price(
    client: &FmpClient,
    symbol: &str,
) -> Result<RealtimePrice, FmpError> {
    let url = client.url(ApiVersion::V3, "quote-short", &[symbol])?;
    let data = client.get_json(url).await?;
    map_to_object(data, &format!("realtime price for {symbol}"))
}

pub(super) async fn realtime_prices(
    client: &FmpClient,
    symbols: &[&str],
) -> Result<SymbolCollection<RealtimePrice>, FmpError> {
    if symbols.is_empty() {
        return Ok(SymbolCollection::new());
    }
    let url = client.url(ApiVersion::V3, "quote-short", symbols)?;
    map_to_collection(client.get_json(url).await?)
}
