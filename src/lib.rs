//! # Warung Order
//!
//! > **An interactive food-ordering session built on a single-owner actor.**
//!
//! The customer picks items from a fixed menu in the terminal. Every accepted
//! line is handed to its own Tokio task, which appends it to the order list and
//! reports back. Once the customer is done, the session waits (bounded by a
//! timeout) for all of those tasks, then prints a receipt and a base64-encoded
//! summary of the order.
//!
//! ## Concurrency Model
//!
//! The order list is owned by one task, the [`OrderListActor`](order_actor::OrderListActor).
//! Workers never touch it directly: they send append requests through an
//! [`OrderClient`](clients::OrderClient) and wait for the acknowledgement. The actor
//! processes requests sequentially, so no lock is needed and no append is lost or
//! duplicated however many workers run at once.
//!
//! ## Module Tour
//!
//! - [`model`]: menu items, order lines, the order list.
//! - [`input`]: digit validation and the [`OrderCollector`](input::OrderCollector) prompt loop.
//! - [`order_actor`] / [`clients`]: the list owner and its handle.
//! - [`workers`]: the fan-out/fan-in [`OrderWorkerPool`](workers::OrderWorkerPool).
//! - [`receipt`]: totals and the encoded summary.
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem) and tracing setup.
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run 2> session.log
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod receipt;
pub mod terminal;
pub mod workers;
