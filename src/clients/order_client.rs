use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::model::{OrderLine, OrderList};
use crate::order_actor::{OrderError, OrderRequest};

/// Somewhere an order worker can put its line.
///
/// [`OrderClient`] is the production implementation; tests substitute slow or
/// failing sinks to exercise the worker pool's join and timeout paths.
#[async_trait]
pub trait OrderSink: Clone + Send + Sync + 'static {
    /// Appends a line and returns the list length after the append.
    async fn append(&self, line: OrderLine) -> Result<usize, OrderError>;
}

/// Client for interacting with the order list actor.
///
/// Cheap to clone: it only holds the channel sender.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<OrderList, OrderError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(OrderRequest::Snapshot { respond_to })
            .await
            .map_err(|_| OrderError::ActorClosed)?;
        response.await.map_err(|_| OrderError::ActorDropped)?
    }
}

#[async_trait]
impl OrderSink for OrderClient {
    #[instrument(skip(self, line), fields(item = %line.name))]
    async fn append(&self, line: OrderLine) -> Result<usize, OrderError> {
        debug!(?line, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(OrderRequest::Append { line, respond_to })
            .await
            .map_err(|_| OrderError::ActorClosed)?;
        response.await.map_err(|_| OrderError::ActorDropped)?
    }
}
