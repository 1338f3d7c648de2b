//! Lookup capabilities used by the cart store.

use async_trait::async_trait;

use crate::catalog::{Product, Stock};
use crate::error::ServiceError;
use crate::ids::ProductId;

/// Read-only source of truth for available quantity per product.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Current stock level for a product.
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError>;
}

/// Source of full product records.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Catalog record for a product.
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError>;
}
