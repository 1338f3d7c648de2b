//! Cart, catalog and stock domain types for storecart.
//!
//! This crate holds the pieces every other storecart crate builds on:
//!
//! - **Catalog**: products, stock levels and the async capabilities used to
//!   look them up (`StockService`, `ProductCatalog`)
//! - **Cart**: the ordered list of line items and the pure snapshot
//!   transitions the cart store commits
//! - **Money**: integer-cents prices
//!
//! # Example
//!
//! ```rust,ignore
//! use storecart_core::prelude::*;
//!
//! let product = Product::new(1, "Tênis de Caminhada", Money::new(17990, Currency::BRL), "");
//! let cart = Cart::new().with_product(product)?;
//! assert_eq!(cart.amount_of(ProductId::new(1)), 1);
//! println!("Subtotal: {}", cart.subtotal()?);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use cart::{Cart, LineItem};
pub use error::{CartError, ServiceError};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, ServiceError};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{CatalogFixture, InMemoryCatalog, Product, ProductCatalog, Stock, StockService};

    // Cart
    pub use crate::cart::{Cart, LineItem};
}
