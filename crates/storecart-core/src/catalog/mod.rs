//! Product catalog module.
//!
//! Contains product and stock types, the lookup capabilities the cart store
//! depends on, and an in-memory implementation of both.

mod inventory;
mod memory;
mod product;
mod service;

pub use inventory::Stock;
pub use memory::{CatalogFixture, InMemoryCatalog};
pub use product::{Product, ProductRecord};
pub use service::{ProductCatalog, StockService};
