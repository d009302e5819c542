//! Error types for the order list actor.

use thiserror::Error;

/// Errors that can occur while talking to the order list actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The actor's request channel is closed.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,

    /// The line breaks the order list invariant (e.g. zero quantity).
    #[error("Invalid order line: {0}")]
    InvalidLine(String),
}
