//! The single task that owns the order list.

pub mod actor;
pub mod error;
pub mod message;

pub use actor::*;
pub use error::*;
pub use message::*;

use std::sync::Arc;

use crate::clients::OrderClient;
use crate::model::MenuCatalog;

/// Creates a new order list actor for `catalog` and its client.
pub fn new(buffer_size: usize, catalog: Arc<MenuCatalog>) -> (OrderListActor, OrderClient) {
    OrderListActor::new(buffer_size, catalog)
}
