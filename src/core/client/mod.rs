//! Public client surface + builder.
//! Internals are split into `retry` (batch replay policy) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::RetryConfig;

use std::sync::Arc;
use std::time::Duration;

use constants::{API_KEY_PARAM, DEFAULT_BASE_V3, DEFAULT_BASE_V4, USER_AGENT};
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::core::{FmpError, RequestBatch, Transport};

/// Which versioned API prefix a path lives under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiVersion {
    V3,
    V4,
}

/// Holds the shared transport, the API key and the base URLs.
#[derive(Clone)]
pub struct FmpClient {
    transport: Arc<dyn Transport>,
    api_key: String,
    base_v3: Url,
    base_v4: Url,
    retry: RetryConfig,
}

impl std::fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmpClient")
            .field("base_v3", &self.base_v3.as_str())
            .field("base_v4", &self.base_v4.as_str())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl FmpClient {
    /// Create a new builder.
    pub fn builder() -> FmpClientBuilder {
        FmpClientBuilder::default()
    }

    /// A client with default endpoints for the given API key.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, FmpError> {
        Self::builder().api_key(api_key).build()
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    fn base(&self, api: ApiVersion) -> &Url {
        match api {
            ApiVersion::V3 => &self.base_v3,
            ApiVersion::V4 => &self.base_v4,
        }
    }

    /// Builds an endpoint URL carrying the API key.
    ///
    /// Slashes around `path` are trimmed; `symbols`, when non-empty, are joined with `,`
    /// into a trailing path segment.
    ///
    /// # Errors
    ///
    /// Fails if the configured base URL cannot carry path segments.
    pub fn url<S: AsRef<str>>(
        &self,
        api: ApiVersion,
        path: &str,
        symbols: &[S],
    ) -> Result<Url, FmpError> {
        let mut url = self.unsigned_url(api, path, symbols)?;
        url.query_pairs_mut().append_pair(API_KEY_PARAM, &self.api_key);
        Ok(url)
    }

    /// Same as [`FmpClient::url`] without the API key.
    ///
    /// # Errors
    ///
    /// Fails if the configured base URL cannot carry path segments.
    pub fn unsigned_url<S: AsRef<str>>(
        &self,
        api: ApiVersion,
        path: &str,
        symbols: &[S],
    ) -> Result<Url, FmpError> {
        let mut url = self.base(api).clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| FmpError::Logic(format!("base url {} cannot be a base", self.base(api))))?;
            segments.pop_if_empty();
            for part in path.trim_matches('/').split('/').filter(|p| !p.is_empty()) {
                segments.push(part);
            }
            if !symbols.is_empty() {
                let joined = symbols.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
                segments.push(&joined);
            }
        }
        Ok(url)
    }

    /// The single request boundary: GET `url` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// `Transport` when the request itself fails, `RateLimited`/`Status` for non-2xx
    /// responses, `Json` for an undecodable body.
    pub async fn get_json(&self, url: Url) -> Result<Value, FmpError> {
        let resp = self
            .transport
            .execute(Method::GET, url.clone())
            .await
            .map_err(|e| match e {
                e @ FmpError::Transport { .. } => e,
                other => FmpError::transport(&url, other),
            })?;
        resp.json()
    }

    /// A new batch sharing this client's transport and retry policy.
    pub fn batch(&self) -> RequestBatch {
        RequestBatch::new(Arc::clone(&self.transport), self.retry.clone())
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FmpClientBuilder {
    api_key: Option<String>,
    base_v3: Option<Url>,
    base_v4: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    transport: Option<Arc<dyn Transport>>,
}

impl FmpClientBuilder {
    /// The key appended as `apikey` to every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the v3 API base (e.g., `https://financialmodelingprep.com/api/v3/`).
    pub fn base_v3(mut self, url: Url) -> Self {
        self.base_v3 = Some(url);
        self
    }

    /// Override the v4 API base (e.g., `https://financialmodelingprep.com/api/v4/`).
    pub fn base_v4(mut self, url: Url) -> Self {
        self.base_v4 = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replay policy for batched requests. Default: 2 rounds, 500µs apart.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Use a custom transport instead of a reqwest client.
    /// The UA and timeout settings are ignored in that case.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// # Errors
    ///
    /// Fails when no API key was set, a default base URL does not parse, or the HTTP
    /// client cannot be built.
    pub fn build(self) -> Result<FmpClient, FmpError> {
        let api_key = self
            .api_key
            .ok_or_else(|| FmpError::Logic("an API key is required".into()))?;
        let base_v3 = match self.base_v3 {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_V3)?,
        };
        let base_v4 = match self.base_v4 {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_V4)?,
        };

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                Arc::new(httpb.build()?)
            }
        };

        Ok(FmpClient {
            transport,
            api_key,
            base_v3,
            base_v4,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
