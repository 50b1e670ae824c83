//! Aggregated historical prices over a [`DateWindow`].

mod model;

pub use model::{HistoricalPrice, HistoricalPriceWithSymbol};

use serde_json::Value;

use crate::collection::mapper::map_to_objects;
use crate::core::{ApiVersion, FmpClient, FmpError};
use crate::period::{DateWindow, Period};

/// Number of periods covered when no explicit window is given.
const DEFAULT_REPEAT: u32 = 10;

/// Starts a historical price request for `symbol` sampled every `period`.
pub fn historical_price(
    client: &FmpClient,
    symbol: impl Into<String>,
    period: Period,
) -> HistoricalPriceBuilder<'_> {
    HistoricalPriceBuilder::new(client, symbol, period)
}

/// A builder for the v4 historical price endpoints.
///
/// Index symbols (leading `^`) are routed to the index endpoint with the caret
/// stripped; [`HistoricalPriceBuilder::crypto`] selects the crypto endpoint.
#[derive(Debug)]
pub struct HistoricalPriceBuilder<'a> {
    client: &'a FmpClient,
    symbol: String,
    period: Period,
    window: Option<DateWindow>,
    crypto: bool,
}

impl<'a> HistoricalPriceBuilder<'a> {
    pub fn new(client: &'a FmpClient, symbol: impl Into<String>, period: Period) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            period,
            window: None,
            crypto: false,
        }
    }

    /// Explicit window. Default: ten periods back from now.
    #[must_use]
    pub fn window(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Use the crypto interval endpoint.
    #[must_use]
    pub fn crypto(mut self, yes: bool) -> Self {
        self.crypto = yes;
        self
    }

    /// The endpoint path (without base or key) this request maps to.
    pub fn path(&self) -> String {
        let window = self
            .window
            .unwrap_or_else(|| DateWindow::from_period(&self.period, DEFAULT_REPEAT));

        let (endpoint, symbol) = match self.symbol.strip_prefix('^') {
            Some(stripped) => ("historical-price-index", stripped),
            None if self.crypto => ("historical-price-crypto-interval", self.symbol.as_str()),
            None => ("historical-price", self.symbol.as_str()),
        };

        format!(
            "{endpoint}/{symbol}/{}/{}/{}/{}",
            self.period.magnitude(),
            self.period.unit_str(false),
            window.end().format("%Y-%m-%d"),
            window.start().format("%Y-%m-%d"),
        )
    }

    /// # Errors
    ///
    /// `NoData` when the payload has no `results` array, plus any request or decoding error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<Vec<HistoricalPrice>, FmpError> {
        let no_symbols: &[&str] = &[];
        let url = self.client.url(ApiVersion::V4, &self.path(), no_symbols)?;
        let mut data = self.client.get_json(url).await?;

        let results = match data.get_mut("results").map(Value::take) {
            Some(results @ Value::Array(_)) => results,
            _ => {
                return Err(FmpError::NoData(format!(
                    "historical prices for {}",
                    self.symbol
                )));
            }
        };
        map_to_objects(results)
    }
}
