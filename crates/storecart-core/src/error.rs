//! Cart error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Failure reported by a remote capability (stock lookup, catalog lookup).
///
/// Adapters convert their transport errors into this type so the cart store
/// can treat every backend the same way.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service has no record for this product.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The request could not be completed.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with something we could not read.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Reasons a cart mutation is rejected.
#[derive(Error, Debug)]
pub enum CartError {
    /// Requested quantity is larger than what the stock service reports.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// The product is not in the cart.
    #[error("Item not in cart: {0}")]
    ItemNotFound(ProductId),

    /// Stock or catalog lookup failed.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Persisting the cart snapshot failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}

#[cfg(feature = "storage")]
impl From<storecart_storage::StorageError> for CartError {
    fn from(e: storecart_storage::StorageError) -> Self {
        CartError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Malformed(e.to_string())
    }
}
