//! Stock-validated, persisted shopping cart store.
//!
//! [`CartStore`] owns the session's cart. It is composed from a stock
//! service, a product catalog, a notification sink and a storage backend,
//! and exposes the whole consumer contract:
//!
//! - `cart()` - current snapshot
//! - `add_product(id)`
//! - `remove_product(id)`
//! - `update_product_amount(UpdateProductAmount { product_id, amount })`
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storecart_core::prelude::*;
//! use storecart_storage::Storage;
//! use storecart_store::prelude::*;
//!
//! let catalog = Arc::new(InMemoryCatalog::from_fixture(fixture, Currency::BRL));
//! let services = CartServices::from_source(catalog, Arc::new(LogNotifier));
//! let store = CartStore::new(services, Storage::in_memory(), StoreConfig::default());
//!
//! store.add_product(ProductId::new(1)).await;
//! ```

mod config;
mod notify;
mod store;

pub use config::{CartMessages, StoreConfig, DEFAULT_STORAGE_KEY};
pub use notify::{LogNotifier, MemoryNotifier, NotificationSink};
pub use store::{CartServices, CartStore, UpdateProductAmount};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartMessages, CartServices, CartStore, LogNotifier, MemoryNotifier, NotificationSink,
        StoreConfig, UpdateProductAmount,
    };
}
