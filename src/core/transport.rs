//! The HTTP seam used by the client and by request batches.

use futures::future::BoxFuture;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::FmpError;

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    url: Url,
    body: String,
}

impl HttpResponse {
    /// Builds a response from its parts.
    pub fn new(status: u16, url: Url, body: impl Into<String>) -> Self {
        Self {
            status,
            url,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// The URL that produced this response.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The raw body.
    pub fn content(&self) -> &str {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_throttled(&self) -> bool {
        self.status == 429
    }

    /// Checks the status, then decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// `RateLimited` for 429, `Status` for any other non-2xx status, `Json` when the body
    /// is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FmpError> {
        if self.is_throttled() {
            return Err(FmpError::RateLimited {
                url: self.url.to_string(),
            });
        }
        if !self.is_success() {
            return Err(FmpError::Status {
                status: self.status,
                url: self.url.to_string(),
            });
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Issues a single HTTP request and reads the whole response.
///
/// Implemented for [`reqwest::Client`]. Tests and embedders can supply their own
/// transport through [`FmpClientBuilder::transport`](crate::core::FmpClientBuilder::transport).
pub trait Transport: Send + Sync {
    /// Sends `method url` and returns the response, whatever its status.
    ///
    /// Only transport-level failures (connection, timeout, body read) are errors.
    fn execute(&self, method: Method, url: Url) -> BoxFuture<'_, Result<HttpResponse, FmpError>>;
}

impl Transport for reqwest::Client {
    fn execute(&self, method: Method, url: Url) -> BoxFuture<'_, Result<HttpResponse, FmpError>> {
        Box::pin(async move {
            let resp = self
                .request(method, url.clone())
                .header("accept", "application/json")
                .send()
                .await
                .map_err(|e| FmpError::transport(&url, e))?;
            let status = resp.status().as_u16();
            let body = resp.text().await.map_err(|e| FmpError::transport(&url, e))?;
            Ok(HttpResponse::new(status, url, body))
        })
    }
}
