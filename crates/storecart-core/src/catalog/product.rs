//! Product types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}

/// Product as served by the catalog API and fixture files.
///
/// Prices are decimals on the wire; [`ProductRecord::into_product`] converts
/// them to cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl ProductRecord {
    /// Convert to a domain product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: Money::from_decimal(self.price, currency),
            image: self.image,
        }
    }
}
