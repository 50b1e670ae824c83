//! fmp-rs: ergonomic Financial Modeling Prep client.
//!
//! Multi-request operations go through a [`RequestBatch`] that fires every request at
//! once and replays rate-limited (HTTP 429) ones a bounded number of times. Results are
//! typed wrappers over the provider records and can be cached through
//! [`SymbolCollection::to_cache`] / [`SymbolCollection::from_cache`].
//!
//! ```no_run
//! # async fn run() -> Result<(), fmp_rs::FmpError> {
//! let client = fmp_rs::FmpClient::new("my-api-key")?;
//! let quotes = fmp_rs::quote::quotes(&client, &["AAPL", "MSFT"]).await?;
//! println!("AAPL: {}", quotes.get("AAPL")?.price()?);
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod core;
pub mod fundamentals;
pub mod history;
pub mod period;
pub mod quote;
pub mod rating;
pub mod symbols;
pub mod ticker;
pub mod timeseries;

pub use collection::{CacheBlob, SymbolCollection};
pub use crate::core::{
    ApiVersion, FieldMap, FieldMapped, FmpClient, FmpClientBuilder, FmpError, HandleState,
    HttpResponse, RepeatableResponse, RequestBatch, RequestId, ResultKind, RetryConfig,
    Transport,
};
pub use fundamentals::{Financial, StatementPeriod};
pub use history::{HistoricalPrice, HistoricalPriceBuilder, HistoricalPriceWithSymbol};
pub use period::{DateWindow, Period, PeriodUnit};
pub use quote::{Quote, RealtimePrice};
pub use rating::Rating;
pub use symbols::{Symbol, TickerKind};
pub use timeseries::{TimeSeries, TimeSeriesKind};
