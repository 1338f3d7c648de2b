//! Single-key typed persistence.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{Storage, StorageError};

/// One value of type `T` persisted under a fixed key.
///
/// Reads happen once at startup through [`Slot::load_or_default`]; every
/// successful mutation overwrites the whole value with [`Slot::save`].
///
/// # Example
///
/// ```rust,ignore
/// let slot = Slot::<Cart>::new(storage, "@RocketShoes:cart");
/// let cart = slot.load_or_default();
/// slot.save(&cart.with_product(product)?)?;
/// ```
pub struct Slot<T> {
    storage: Storage,
    key: String,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            key: self.key.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Slot<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Create a slot for `key`.
    pub fn new(storage: Storage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            _phantom: PhantomData,
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored value, if any.
    pub fn load(&self) -> Result<Option<T>, StorageError> {
        self.storage.get(&self.key)
    }

    /// Read the stored value, falling back to `T::default()` when the key is
    /// missing or the stored text does not parse.
    pub fn load_or_default(&self) -> T {
        self.load_or_default_if(|_| true)
    }

    /// Like [`Slot::load_or_default`], also falling back when `accept`
    /// rejects the parsed value.
    pub fn load_or_default_if(&self, accept: impl FnOnce(&T) -> bool) -> T {
        match self.load() {
            Ok(Some(value)) if accept(&value) => {
                debug!(key = %self.key, "loaded persisted value");
                value
            }
            Ok(Some(_)) => {
                warn!(key = %self.key, "persisted value failed validation, starting empty");
                T::default()
            }
            Ok(None) => T::default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "persisted value unreadable, starting empty");
                T::default()
            }
        }
    }

    /// Overwrite the stored value.
    pub fn save(&self, value: &T) -> Result<(), StorageError> {
        self.storage.set(&self.key, value)
    }

    /// Remove the stored value.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.delete(&self.key)
    }
}
