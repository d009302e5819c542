//! Requests understood by the order list actor.

use tokio::sync::oneshot;

use crate::model::{OrderLine, OrderList};
use crate::order_actor::OrderError;

/// One-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, OrderError>>;

#[derive(Debug)]
pub enum OrderRequest {
    /// Append a line; answers with the list length after the append.
    Append {
        line: OrderLine,
        respond_to: Response<usize>,
    },
    /// Copy of the list as it stands.
    Snapshot { respond_to: Response<OrderList> },
}
