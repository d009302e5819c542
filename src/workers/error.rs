//! Error types for the worker pool.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    /// Not every worker finished inside the join bound.
    #[error("Pemrosesan pesanan terlalu lama.")]
    Timeout(Duration),

    /// Writing a confirmation message failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
