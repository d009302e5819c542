//! Terminal input: validation and the interactive order-entry loop.

pub mod collector;
pub mod error;
pub mod validator;

pub use collector::*;
pub use error::*;
pub use validator::*;
