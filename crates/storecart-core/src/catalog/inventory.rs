//! Stock level types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Stock level for a product, as reported by the stock service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    /// Product the level belongs to.
    pub id: ProductId,
    /// Units available.
    pub amount: i64,
}

impl Stock {
    /// Create a new stock level.
    pub fn new(id: impl Into<ProductId>, amount: i64) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }

    /// Check if a specific quantity can be fulfilled.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_fulfill() {
        let stock = Stock::new(1, 5);
        assert!(stock.can_fulfill(5));
        assert!(!stock.can_fulfill(6));
    }

    #[test]
    fn test_stock_wire_format() {
        let stock: Stock = serde_json::from_str(r#"{"id": 3, "amount": 2}"#).unwrap();
        assert_eq!(stock, Stock::new(3, 2));
    }
}
