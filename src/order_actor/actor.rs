//! # Order List Actor
//!
//! The actor owns the [`OrderList`] and the receiving end of its request channel.
//! Requests are processed one at a time, so any number of workers can append
//! concurrently without a lock and without losing or duplicating a line.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::clients::OrderClient;
use crate::model::{MenuCatalog, OrderLine, OrderList};
use crate::order_actor::{OrderError, OrderRequest};

pub struct OrderListActor {
    receiver: mpsc::Receiver<OrderRequest>,
    catalog: Arc<MenuCatalog>,
    list: OrderList,
}

impl OrderListActor {
    /// Creates the actor and a client connected to it.
    ///
    /// `buffer_size` bounds the request channel; senders wait while it is full.
    /// Only lines naming an item of `catalog` are accepted.
    pub fn new(buffer_size: usize, catalog: Arc<MenuCatalog>) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            catalog,
            list: OrderList::new(),
        };
        (actor, OrderClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    ///
    /// Returns the final list.
    pub async fn run(mut self) -> OrderList {
        info!("Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::Append { line, respond_to } => {
                    debug!(?line, "Append");
                    if let Err(e) = self.check(&line) {
                        warn!(item = %line.name, error = %e, "Rejected line");
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    let size = self.list.push(line);
                    info!(size, "Appended");
                    let _ = respond_to.send(Ok(size));
                }
                OrderRequest::Snapshot { respond_to } => {
                    debug!(size = self.list.len(), "Snapshot");
                    let _ = respond_to.send(Ok(self.list.clone()));
                }
            }
        }

        info!(size = self.list.len(), "Shutdown");
        self.list
    }

    // Every stored line has a positive quantity and a name from the menu.
    fn check(&self, line: &OrderLine) -> Result<(), OrderError> {
        if line.quantity == 0 {
            return Err(OrderError::InvalidLine(format!("{} has zero quantity", line.name)));
        }
        if !self.catalog.contains(&line.name) {
            return Err(OrderError::InvalidLine(format!("{} is not on the menu", line.name)));
        }
        Ok(())
    }
}
