//! Runtime settings for an ordering session.

use std::time::Duration;

/// Upper bound on how long the session waits for order workers to finish.
pub const DEFAULT_JOIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for an [`OrderSystem`](crate::lifecycle::OrderSystem).
///
/// The shipped binary always uses [`Config::default`]. Tests build their own
/// to inject a short join bound.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long to wait for every dispatched worker before giving up.
    pub join_timeout: Duration,
    /// Capacity of the order list actor's request channel.
    pub actor_buffer: usize,
    /// Capacity of the confirmation message channel.
    pub message_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            join_timeout: DEFAULT_JOIN_TIMEOUT,
            actor_buffer: 32,
            message_buffer: 32,
        }
    }
}

impl Config {
    pub fn with_join_timeout(mut self, join_timeout: Duration) -> Self {
        self.join_timeout = join_timeout;
        self
    }
}
