use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FmpError {
    /// A period string (e.g. `5minute`, `1 day`) could not be parsed.
    #[error("Period {0} is not valid.")]
    InvalidPeriod(String),

    /// A symbol was looked up in a collection that does not contain it.
    #[error("Symbol {symbol} not exists in collection.")]
    NotFound {
        /// The symbol that was requested.
        symbol: String,
    },

    /// The provider returned an empty or missing payload where a record was expected.
    #[error("no data returned: {0}")]
    NoData(String),

    /// A contract violation, such as a malformed cache blob.
    #[error("logic error: {0}")]
    Logic(String),

    /// The underlying HTTP transport failed before a response was received.
    #[error("transport failure while requesting {url}")]
    Transport {
        /// The URL that was being requested.
        url: String,
        /// The transport-level cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The request was still throttled (HTTP 429) after the retry budget was spent.
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that kept returning 429.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A response body could not be decoded as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FmpError {
    pub(crate) fn transport(
        url: &url::Url,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            url: url.to_string(),
            source: source.into(),
        }
    }
}
