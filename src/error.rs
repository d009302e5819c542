//! Top-level error type for an ordering session.

use thiserror::Error;

use crate::order_actor::OrderError;
use crate::workers::PoolError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Order list error: {0}")]
    Order(#[from] OrderError),

    #[error("Worker pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
