//! In-memory catalog backend.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Product, ProductCatalog, ProductRecord, Stock, StockService};
use crate::error::ServiceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Catalog fixture in the json-server layout used by the storefront API:
/// `{ "products": [...], "stock": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFixture {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub stock: Vec<Stock>,
}

impl CatalogFixture {
    /// Parse a fixture from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Stock and catalog lookups served from memory.
///
/// Used for offline mode and tests. Stock levels can be changed after
/// construction to simulate the remote source moving underneath a cart.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
    stock: RwLock<HashMap<ProductId, i64>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a fixture, pricing products in `currency`.
    pub fn from_fixture(fixture: CatalogFixture, currency: Currency) -> Self {
        let products: HashMap<_, _> = fixture
            .products
            .into_iter()
            .map(|record| (record.id, record.into_product(currency)))
            .collect();
        let stock: HashMap<_, _> = fixture
            .stock
            .into_iter()
            .map(|level| (level.id, level.amount))
            .collect();
        debug!(products = products.len(), stock = stock.len(), "loaded catalog fixture");

        Self {
            products: RwLock::new(products),
            stock: RwLock::new(stock),
        }
    }

    /// Add a product with its stock level.
    pub fn with_product(mut self, product: Product, stock: i64) -> Self {
        if let Ok(levels) = self.stock.get_mut() {
            levels.insert(product.id, stock);
        }
        if let Ok(products) = self.products.get_mut() {
            products.insert(product.id, product);
        }
        self
    }

    /// Replace the stock level of a product.
    pub fn set_stock(&self, product_id: ProductId, amount: i64) -> Result<(), ServiceError> {
        self.stock
            .write()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?
            .insert(product_id, amount);
        Ok(())
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.read().map(|p| p.len()).unwrap_or(0)
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StockService for InMemoryCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        let levels = self
            .stock
            .read()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        levels
            .get(&product_id)
            .map(|amount| Stock::new(product_id, *amount))
            .ok_or(ServiceError::NotFound(product_id))
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError> {
        let products = self
            .products
            .read()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        products
            .get(&product_id)
            .cloned()
            .ok_or(ServiceError::NotFound(product_id))
    }
}
