//! Company quotes and short realtime prices.

mod api;
mod model;

pub use model::{Quote, RealtimePrice};

use crate::collection::SymbolCollection;
use crate::{FmpClient, FmpError};

/// Every exchange segment served by the `quotes/{segment}` endpoint.
pub const SEGMENTS: &[&str] = &[
    "amex",
    "nasdaq",
    "nyse",
    "etf",
    "mutual_fund",
    "euronext",
    "tsx",
    "mcx",
    "xetra",
    "nse",
    "lse",
    "six",
    "hkse",
    "ose",
    "ase",
    "bru",
    "jkt",
    "vie",
    "sgo",
    "shz",
    "shh",
    "ham",
    "cph",
    "ath",
    "mil",
    "jpx",
    "ksc",
    "koe",
    "sto",
    "ist",
    "tai",
    "mex",
    "jnb",
    "lis",
    "tlv",
    "mce",
    "wse",
    "hel",
    "sao",
    "set",
    "iob",
    "doh",
    "kls",
    "pra",
    "ams",
    "ber",
    "two",
    "sau",
    "ice",
    "commodity",
    "crypto",
    "index",
    "forex",
];

/// Fetches the quote of a single symbol.
///
/// # Errors
///
/// `NoData` when the provider returns no record, plus any request error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn quote(client: &FmpClient, symbol: &str) -> Result<Quote, FmpError> {
    api::quote(client, symbol).await
}

/// Fetches quotes for several symbols in one request. No request is made for an empty list.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn quotes(
    client: &FmpClient,
    symbols: &[&str],
) -> Result<SymbolCollection<Quote>, FmpError> {
    api::quotes(client, symbols).await
}

/// Fetches every quote of the given exchange segments (see [`SEGMENTS`]) in one batch.
///
/// Rows lacking a price, name, previous close or open are skipped.
///
/// # Errors
///
/// `RateLimited` when a segment stays throttled after the retry rounds, plus any request
/// or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn quotes_by_segments(
    client: &FmpClient,
    segments: &[&str],
) -> Result<SymbolCollection<Quote>, FmpError> {
    api::quotes_by_segments(client, segments).await
}

/// Fetches the short realtime price of a single symbol.
///
/// # Errors
///
/// `NoData` when the provider returns no record, plus any request error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn realtime_price(client: &FmpClient, symbol: &str) -> Result<RealtimePrice, FmpError> {
    api::realtime_price(client, symbol).await
}

/// Fetches short realtime prices for several symbols. No request is made for an empty list.
///
/// # Errors
///
/// Any request or decoding error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn realtime_prices(
    client: &FmpClient,
    symbols: &[&str],
) -> Result<SymbolCollection<RealtimePrice>, FmpError> {
    api::realtime_prices(client, symbols).await
}
