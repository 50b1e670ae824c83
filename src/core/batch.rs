//! Rate-limit aware multi-request transactions.
//!
//! A [`RequestBatch`] fires every request as soon as it is dispatched so network latency
//! overlaps across the whole batch. [`RequestBatch::commit`] then waits for the responses
//! and replays the throttled (HTTP 429) ones, up to [`RetryConfig::rounds`] times.

use std::sync::Arc;

use futures::future::{BoxFuture, join_all};
use reqwest::Method;
use tokio::task::JoinHandle;
use url::Url;

use crate::core::client::RetryConfig;
use crate::core::{FmpError, HttpResponse, Transport};

type Outcome = Result<HttpResponse, FmpError>;
type Reissue = Arc<dyn Fn() -> BoxFuture<'static, Outcome> + Send + Sync>;

/// Where a single request handle currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleState {
    /// Dispatched, response not awaited yet.
    Pending,
    /// A response other than 429 arrived.
    Succeeded,
    /// The server answered 429 Too Many Requests.
    Throttled,
    /// The transport failed before a response arrived.
    Failed,
}

enum Slot {
    InFlight(JoinHandle<Outcome>),
    Done(Outcome),
}

/// One in-flight request that can be replaced by reissuing the request that produced it.
pub struct RepeatableResponse {
    url: Url,
    slot: Slot,
    reissue: Reissue,
    attempts: u32,
}

impl RepeatableResponse {
    /// Issues the first attempt right away.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new<F>(url: Url, reissue: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Outcome> + Send + Sync + 'static,
    {
        let reissue: Reissue = Arc::new(reissue);
        let slot = Slot::InFlight(tokio::spawn(reissue()));
        Self {
            url,
            slot,
            reissue,
            attempts: 1,
        }
    }

    /// The requested URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Number of times the request was issued.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn state(&self) -> HandleState {
        match &self.slot {
            Slot::InFlight(_) => HandleState::Pending,
            Slot::Done(Ok(resp)) if resp.is_throttled() => HandleState::Throttled,
            Slot::Done(Ok(_)) => HandleState::Succeeded,
            Slot::Done(Err(_)) => HandleState::Failed,
        }
    }

    /// Status of the current response, once it has arrived.
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(HttpResponse::status_code)
    }

    /// The current response, once it has arrived.
    pub fn response(&self) -> Option<&HttpResponse> {
        match &self.slot {
            Slot::Done(Ok(resp)) => Some(resp),
            _ => None,
        }
    }

    /// The transport error of the current attempt, if it failed.
    pub fn error(&self) -> Option<&FmpError> {
        match &self.slot {
            Slot::Done(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// Discards the current response and issues the request again.
    pub fn replay(&mut self) {
        self.slot = Slot::InFlight(tokio::spawn((self.reissue)()));
        self.attempts += 1;
    }

    /// Waits for the current attempt to finish.
    pub async fn resolve(&mut self) {
        if let Slot::InFlight(task) = &mut self.slot {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(join) => Err(FmpError::transport(&self.url, join)),
            };
            self.slot = Slot::Done(outcome);
        }
    }

    /// Waits for the current attempt and hands over its outcome.
    ///
    /// # Errors
    ///
    /// The transport error of the last attempt.
    pub async fn into_response(self) -> Result<HttpResponse, FmpError> {
        match self.slot {
            Slot::Done(outcome) => outcome,
            Slot::InFlight(task) => task
                .await
                .unwrap_or_else(|join| Err(FmpError::transport(&self.url, join))),
        }
    }
}

impl std::fmt::Debug for RepeatableResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepeatableResponse")
            .field("url", &self.url.as_str())
            .field("state", &self.state())
            .field("attempts", &self.attempts)
            .finish()
    }
}

/// Position of a dispatched request inside its batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(usize);

struct Entry {
    key: Option<String>,
    response: RepeatableResponse,
}

/// A set of eagerly dispatched requests committed together.
pub struct RequestBatch {
    transport: Arc<dyn Transport>,
    config: RetryConfig,
    entries: Vec<Entry>,
}

impl RequestBatch {
    pub fn new(transport: Arc<dyn Transport>, config: RetryConfig) -> Self {
        Self {
            transport,
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Issues `method url` immediately and tracks it.
    ///
    /// With a `key`, an earlier request under the same key is replaced in place.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    pub fn dispatch(&mut self, method: Method, url: Url, key: Option<String>) -> RequestId {
        let response = RepeatableResponse::new(
            url.clone(),
            reissue_fn(Arc::clone(&self.transport), method, url),
        );

        if let Some(k) = key.as_deref()
            && let Some(pos) = self.entries.iter().position(|e| e.key.as_deref() == Some(k))
        {
            self.entries[pos].response = response;
            return RequestId(pos);
        }

        self.entries.push(Entry { key, response });
        RequestId(self.entries.len() - 1)
    }

    /// Shorthand for a GET dispatch.
    pub fn get(&mut self, url: Url, key: Option<String>) -> RequestId {
        self.dispatch(Method::GET, url, key)
    }

    /// Waits for every response and replays the throttled ones.
    ///
    /// Returns once no handle is throttled or the round budget is spent. Handles still
    /// answering 429 afterwards are left for the caller to inspect.
    pub async fn commit(&mut self) {
        let mut rounds_left = self.config.rounds;
        loop {
            join_all(self.entries.iter_mut().map(|e| e.response.resolve())).await;

            let throttled: Vec<usize> = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.response.state() == HandleState::Throttled)
                .map(|(i, _)| i)
                .collect();

            if throttled.is_empty() {
                return;
            }
            if rounds_left == 0 {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    throttled = throttled.len(),
                    "retry rounds exhausted with throttled requests left"
                );
                return;
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(
                throttled = throttled.len(),
                rounds_left,
                "replaying throttled requests"
            );

            tokio::time::sleep(self.config.delay).await;
            for i in throttled {
                self.entries[i].response.replay();
            }
            rounds_left -= 1;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn response(&self, id: RequestId) -> Option<&RepeatableResponse> {
        self.entries.get(id.0).map(|e| &e.response)
    }

    pub fn keyed(&self, key: &str) -> Option<&RepeatableResponse> {
        self.entries
            .iter()
            .find(|e| e.key.as_deref() == Some(key))
            .map(|e| &e.response)
    }

    /// All handles in dispatch order, with their key if they have one.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &RepeatableResponse)> {
        self.entries.iter().map(|e| (e.key.as_deref(), &e.response))
    }

    /// All handles in dispatch order.
    pub fn into_responses(self) -> Vec<RepeatableResponse> {
        self.entries.into_iter().map(|e| e.response).collect()
    }

    /// Keyed handles only, in dispatch order.
    pub fn into_keyed(self) -> Vec<(String, RepeatableResponse)> {
        self.entries
            .into_iter()
            .filter_map(|e| e.key.map(|k| (k, e.response)))
            .collect()
    }
}

impl std::fmt::Debug for RequestBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBatch")
            .field("config", &self.config)
            .field("entries", &self.entries.len())
            .finish()
    }
}

fn reissue_fn(
    transport: Arc<dyn Transport>,
    method: Method,
    url: Url,
) -> impl Fn() -> BoxFuture<'static, Outcome> + Send + Sync + 'static {
    move || -> BoxFuture<'static, Outcome> {
        let transport = Arc::clone(&transport);
        let method = method.clone();
        let url = url.clone();
        Box::pin(async move {
            transport
                .execute(method, url.clone())
                .await
                .map_err(|e| match e {
                    e @ FmpError::Transport { .. } => e,
                    other => FmpError::transport(&url, other),
                })
        })
    }
}
