//! Symbol listings: the full universe and per-kind lists.

mod api;
mod exchange;
mod model;

pub use exchange::{EXCHANGES, exchange_name};
pub use model::{Symbol, TickerKind};

use crate::collection::SymbolCollection;
use crate::{FmpClient, FmpError};

/// Fetches stocks, ETFs, indexes, cryptos and commodities in one batch.
///
/// Entries are merged in the order stocks, indexes, cryptos, commodities, ETFs; a symbol
/// listed twice keeps the later listing.
///
/// # Errors
///
/// `RateLimited` when a listing stays throttled after the retry rounds, plus any request
/// or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn symbol_list(client: &FmpClient) -> Result<SymbolCollection<Symbol>, FmpError> {
    api::symbol_list(client).await
}

/// Index quotes listed as symbols.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn indexes(client: &FmpClient) -> Result<SymbolCollection<Symbol>, FmpError> {
    api::listing(client, "quotes/index", TickerKind::Index).await
}

/// ETFs listed as symbols.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn etfs(client: &FmpClient) -> Result<SymbolCollection<Symbol>, FmpError> {
    api::listing(client, "quotes/etf", TickerKind::Etf).await
}

/// Mutual funds listed as symbols.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn funds(client: &FmpClient) -> Result<SymbolCollection<Symbol>, FmpError> {
    api::listing(client, "quotes/mutual_fund", TickerKind::Fund).await
}

/// Cryptocurrencies listed as symbols.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn cryptos(client: &FmpClient) -> Result<SymbolCollection<Symbol>, FmpError> {
    api::listing(client, "quotes/crypto", TickerKind::Crypto).await
}

/// Commodities listed as symbols.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn commodities(client: &FmpClient) -> Result<SymbolCollection<Symbol>, FmpError> {
    api::listing(client, "quotes/commodity", TickerKind::Commodity).await
}
