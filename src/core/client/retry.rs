use std::time::Duration;

/// Configuration for replaying throttled (HTTP 429) requests inside a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of replay rounds. `0` disables replaying.
    pub rounds: u32,
    /// Fixed pause before each replay round.
    pub delay: Duration,
}

impl RetryConfig {
    /// A configuration that never replays.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            rounds: 0,
            delay: Duration::ZERO,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            rounds: 2,
            delay: Duration::from_micros(500),
        }
    }
}
