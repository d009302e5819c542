//! Plain data: the menu catalog and the order lines built from it.

pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
