//! Shopping cart module.
//!
//! Contains the cart snapshot and line item types.

mod cart;

pub use cart::{Cart, LineItem};
