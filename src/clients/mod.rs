//! Type-safe handles to the order list actor.

pub mod order_client;

pub use order_client::*;
