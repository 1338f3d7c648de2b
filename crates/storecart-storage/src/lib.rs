//! Whole-value key-value persistence for storecart.
//!
//! Mirrors browser local storage: string keys, string values, no partial
//! updates. [`Storage`] adds JSON (de)serialization on top of any
//! [`KeyValueStore`], and [`Slot`] pins a single typed value to one key.
//!
//! # Example
//!
//! ```rust,ignore
//! use storecart_storage::{FileStore, Slot, Storage};
//!
//! let storage = Storage::new(FileStore::open("storecart.json")?);
//! let slot = Slot::<Cart>::new(storage, "@RocketShoes:cart");
//!
//! let cart = slot.load_or_default();
//! slot.save(&cart)?;
//! ```

mod error;
mod kv;
mod slot;

pub use error::StorageError;
pub use kv::{FileStore, KeyValueStore, MemoryStore, Storage};
pub use slot::Slot;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValueStore, MemoryStore, Slot, Storage, StorageError};
}
