use super::model::{Symbol, TickerKind};
use crate::collection::SymbolCollection;
use crate::collection::mapper::map_with_symbol_key;
use crate::core::{ApiVersion, FieldMapped, FmpClient, FmpError, RepeatableResponse, fields};

const NO_SYMBOLS: &[&str] = &[];

async fn collect(
    handle: RepeatableResponse,
    kind: Option<TickerKind>,
) -> Result<SymbolCollection<Symbol>, FmpError> {
    let value = handle.into_response().await?.json()?;
    map_with_symbol_key(fields::records(value)?, |record| match kind {
        Some(kind) => Ok(Symbol::with_kind(record, kind)),
        None => Symbol::from_field_map(record),
    })
}

pub(super) async fn symbol_list(client: &FmpClient) -> Result<SymbolCollection<Symbol>, FmpError> {
    let mut batch = client.batch();
    for path in [
        "stock/list",
        "etf/list",
        "quotes/index",
        "quotes/crypto",
        "quotes/commodity",
    ] {
        batch.get(client.url(ApiVersion::V3, path, NO_SYMBOLS)?, None);
    }
    batch.commit().await;

    let [stocks, etfs, indexes, cryptos, commodities]: [RepeatableResponse; 5] = batch
        .into_responses()
        .try_into()
        .map_err(|_| FmpError::Logic("symbol list batch lost a request".into()))?;

    let mut out = collect(stocks, None).await?;
    out.extend_from(collect(indexes, Some(TickerKind::Index)).await?);
    out.extend_from(collect(cryptos, Some(TickerKind::Crypto)).await?);
    out.extend_from(collect(commodities, Some(TickerKind::Commodity)).await?);
    out.extend_from(collect(etfs, Some(TickerKind::Etf)).await?);
    Ok(out)
}

pub(super) async fn listing(
    client: &FmpClient,
    path: &str,
    kind: TickerKind,
) -> Result<SymbolCollection<Symbol>, FmpError> {
    let url = client.url(ApiVersion::V3, path, NO_SYMBOLS)?;
    let value = client.get_json(url).await?;
    map_with_symbol_key(fields::records(value)?, |record| {
        Ok(Symbol::with_kind(record, kind))
    })
}
