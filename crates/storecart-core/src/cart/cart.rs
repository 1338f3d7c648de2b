//! Cart and line item types.
//!
//! A [`Cart`] is an immutable-by-convention snapshot: every transition
//! returns a new cart and leaves the receiver untouched, so a rejected
//! mutation can never leave a half-applied state behind.

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// An ordered list of line items, one per product.
///
/// Items keep the order in which their products were first added. Persisted
/// as a bare JSON array of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Check if the product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Amount of a product in the cart, 0 if absent.
    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map(|i| i.amount).unwrap_or(0)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of amounts).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Sum of all line subtotals.
    ///
    /// Returns error on overflow or if items are priced in different
    /// currencies.
    pub fn subtotal(&self) -> Result<Money, CartError> {
        let currency = self
            .items
            .first()
            .map(|i| i.product.price.currency)
            .unwrap_or(Currency::default());
        let lines = self
            .items
            .iter()
            .map(LineItem::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(lines, currency).ok_or(CartError::Overflow)
    }

    /// Whether the cart holds at most one item per product and every amount
    /// is at least 1.
    pub fn is_valid(&self) -> bool {
        self.items.iter().enumerate().all(|(idx, item)| {
            item.amount >= 1
                && !self.items[..idx]
                    .iter()
                    .any(|earlier| earlier.product.id == item.product.id)
        })
    }

    /// Snapshot with one more unit of `product`.
    ///
    /// Increments the existing line if the product is already present,
    /// otherwise appends a new line with amount 1.
    pub fn with_product(&self, product: Product) -> Result<Cart, CartError> {
        let mut next = self.clone();
        match next.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => {
                existing.amount = existing.amount.checked_add(1).ok_or(CartError::Overflow)?;
            }
            None => next.items.push(LineItem::new(product, 1)),
        }
        Ok(next)
    }

    /// Snapshot with the product's amount replaced.
    pub fn with_amount(&self, product_id: ProductId, amount: i64) -> Result<Cart, CartError> {
        let mut next = self.clone();
        let item = next
            .items
            .iter_mut()
            .find(|i| i.product.id == product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        item.amount = amount;
        Ok(next)
    }

    /// Snapshot without the product's line. Remaining order is preserved.
    pub fn without(&self, product_id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(product_id) {
            return Err(CartError::ItemNotFound(product_id));
        }
        Ok(Cart {
            items: self
                .items
                .iter()
                .filter(|i| i.product.id != product_id)
                .cloned()
                .collect(),
        })
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self { items }
    }
}

/// A line item in the cart.
///
/// Catalog fields are copied in when the product is first added and are not
/// refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product snapshot taken when the item was created.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity.
    pub amount: i64,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(product: Product, amount: i64) -> Self {
        Self { product, amount }
    }

    /// Product ID of this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times amount.
    pub fn subtotal(&self) -> Result<Money, CartError> {
        self.product
            .price
            .try_multiply(self.amount)
            .ok_or(CartError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: u64, cents: i64) -> Product {
        Product::new(id, format!("Tênis {id}"), Money::new(cents, Currency::BRL), "")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.amount_of(ProductId::new(1)), 0);
    }

    #[test]
    fn test_add_new_product() {
        let cart = Cart::new().with_product(product(1, 1000)).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(ProductId::new(1)), 1);
    }

    #[test]
    fn test_add_same_product_increases_amount() {
        let cart = Cart::new()
            .with_product(product(1, 1000))
            .unwrap()
            .with_product(product(1, 1000))
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_transitions_leave_receiver_untouched() {
        let cart = Cart::new().with_product(product(1, 1000)).unwrap();
        let _ = cart.with_amount(ProductId::new(1), 4).unwrap();
        let _ = cart.without(ProductId::new(1)).unwrap();
        assert_eq!(cart.amount_of(ProductId::new(1)), 1);
    }

    #[test]
    fn test_with_amount_missing_item() {
        let cart = Cart::new();
        assert!(matches!(
            cart.with_amount(ProductId::new(3), 2),
            Err(CartError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_without_preserves_order() {
        let cart = Cart::new()
            .with_product(product(1, 100))
            .unwrap()
            .with_product(product(2, 200))
            .unwrap()
            .with_product(product(3, 300))
            .unwrap();

        let cart = cart.without(ProductId::new(2)).unwrap();
        let ids: Vec<u64> = cart.items().iter().map(|i| i.product_id().get()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(matches!(
            cart.without(ProductId::new(2)),
            Err(CartError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_subtotal() {
        let cart = Cart::new()
            .with_product(product(1, 1000))
            .unwrap()
            .with_product(product(2, 2000))
            .unwrap()
            .with_amount(ProductId::new(1), 2)
            .unwrap();

        let subtotal = cart.subtotal().unwrap();
        assert_eq!(subtotal.amount_cents, 4000); // 2*1000 + 1*2000
    }

    #[test]
    fn test_persisted_format() {
        let cart = Cart::new().with_product(product(7, 13990)).unwrap();
        let json = serde_json::to_value(&cart).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["id"], 7);
        assert_eq!(json[0]["amount"], 1);
        assert_eq!(json[0]["price"]["amount_cents"], 13990);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_is_valid() {
        let good = Cart::new().with_product(product(1, 1)).unwrap();
        assert!(good.is_valid());

        let duplicate = Cart::from(vec![
            LineItem::new(product(1, 1), 1),
            LineItem::new(product(1, 1), 2),
        ]);
        assert!(!duplicate.is_valid());

        let zero = Cart::from(vec![LineItem::new(product(1, 1), 0)]);
        assert!(!zero.is_valid());
    }

    proptest! {
        #[test]
        fn prop_new_product_lands_with_amount_one(
            existing in proptest::collection::btree_set(1u64..50, 0..8),
            id in 50u64..100,
        ) {
            let mut cart = Cart::new();
            for e in &existing {
                cart = cart.with_product(product(*e, 100)).unwrap();
            }

            let next = cart.with_product(product(id, 100)).unwrap();
            prop_assert_eq!(next.len(), cart.len() + 1);
            prop_assert_eq!(next.amount_of(ProductId::new(id)), 1);
            prop_assert_eq!(next.items().last().map(|i| i.product_id()), Some(ProductId::new(id)));
        }

        #[test]
        fn prop_existing_product_increments_without_duplicates(
            id in 1u64..100,
            amount in 1i64..1000,
        ) {
            let cart = Cart::new()
                .with_product(product(id, 100))
                .unwrap()
                .with_amount(ProductId::new(id), amount)
                .unwrap();

            let next = cart.with_product(product(id, 100)).unwrap();
            prop_assert_eq!(next.len(), 1);
            prop_assert_eq!(next.amount_of(ProductId::new(id)), amount + 1);
            prop_assert!(next.is_valid());
        }
    }
}
