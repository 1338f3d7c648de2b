//! Error type for fetch operations.

use storecart_core::{ProductId, ServiceError};

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// Convert into the capability error for a lookup of `product_id`.
    ///
    /// A 404 means the service has no such product; everything else is an
    /// availability or format problem.
    pub fn into_service_error(self, product_id: ProductId) -> ServiceError {
        match self {
            FetchError::Http { status: 404, .. } => ServiceError::NotFound(product_id),
            FetchError::Deserialization(msg) => ServiceError::Malformed(msg),
            other => ServiceError::Unavailable(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Deserialization(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}
