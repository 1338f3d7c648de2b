//! The cart store.

use std::sync::Arc;

use storecart_core::catalog::{ProductCatalog, StockService};
use storecart_core::{Cart, CartError, ProductId};
use storecart_storage::{Slot, Storage};
use tokio::sync::RwLock;
use tracing::{debug, error, instrument, warn};

use crate::config::{CartMessages, StoreConfig};
use crate::notify::NotificationSink;

/// Capabilities the store is composed from.
#[derive(Clone)]
pub struct CartServices {
    /// Stock lookups guarding every quantity increase.
    pub stock: Arc<dyn StockService>,
    /// Product lookups for first-time adds.
    pub catalog: Arc<dyn ProductCatalog>,
    /// Where rejected mutations are reported.
    pub notifier: Arc<dyn NotificationSink>,
}

impl CartServices {
    /// Compose from separate capabilities.
    pub fn new(
        stock: Arc<dyn StockService>,
        catalog: Arc<dyn ProductCatalog>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            stock,
            catalog,
            notifier,
        }
    }

    /// Compose from one backend serving both stock and catalog lookups.
    pub fn from_source<S>(source: Arc<S>, notifier: Arc<dyn NotificationSink>) -> Self
    where
        S: StockService + ProductCatalog + 'static,
    {
        Self {
            stock: source.clone(),
            catalog: source,
            notifier,
        }
    }
}

/// Arguments of [`CartStore::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Shopping cart state with stock validation and persistence.
///
/// The handle is cheap to clone and all clones share one cart, so it can be
/// handed to every consumer at composition time. Mutations never return
/// errors: a rejected mutation leaves the cart untouched and reports one
/// message through the [`NotificationSink`].
///
/// No lock is held while a lookup is in flight. Overlapping mutations each
/// work from the snapshot they started with, and the last one to commit wins.
///
/// # Example
///
/// ```rust,ignore
/// let store = CartStore::new(services, storage, StoreConfig::default());
///
/// store.add_product(ProductId::new(1)).await;
/// store.update_product_amount(UpdateProductAmount { product_id: ProductId::new(1), amount: 3 }).await;
/// store.remove_product(ProductId::new(1)).await;
///
/// assert!(store.cart().await.is_empty());
/// ```
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    services: CartServices,
    slot: Slot<Cart>,
    messages: CartMessages,
    cart: RwLock<Cart>,
}

impl CartStore {
    /// Create a store, seeding the cart from `storage`.
    ///
    /// A missing, unparseable or inconsistent persisted cart starts the
    /// session empty.
    pub fn new(services: CartServices, storage: Storage, config: StoreConfig) -> Self {
        let slot = Slot::new(storage, config.storage_key);
        let cart = slot.load_or_default_if(Cart::is_valid);
        debug!(key = slot.key(), items = cart.len(), "cart store initialised");

        Self {
            inner: Arc::new(CartStoreInner {
                services,
                slot,
                messages: config.messages,
                cart: RwLock::new(cart),
            }),
        }
    }

    /// Current cart snapshot.
    pub async fn cart(&self) -> Cart {
        self.inner.cart.read().await.clone()
    }

    /// Add one unit of a product.
    ///
    /// New products are fetched from the catalog and appended with amount 1;
    /// products already in the cart have their amount incremented. Rejected
    /// if the resulting amount exceeds stock.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) {
        if let Err(e) = self.try_add_product(product_id).await {
            self.reject(&e, &self.inner.messages.add_failed);
        }
    }

    /// Remove a product's line from the cart.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) {
        if let Err(e) = self.try_remove_product(product_id).await {
            self.reject(&e, &self.inner.messages.remove_failed);
        }
    }

    /// Set a product's amount.
    ///
    /// Amounts below 1 are ignored without notification. The product must
    /// already be in the cart; this never creates a line.
    #[instrument(skip(self))]
    pub async fn update_product_amount(&self, update: UpdateProductAmount) {
        if update.amount <= 0 {
            debug!(product_id = %update.product_id, amount = update.amount, "ignoring non-positive amount");
            return;
        }
        if let Err(e) = self.try_update_product_amount(update).await {
            self.reject(&e, &self.inner.messages.update_failed);
        }
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let current = self.cart().await;
        let stock = self.inner.services.stock.stock(product_id).await?;

        let requested = current
            .amount_of(product_id)
            .checked_add(1)
            .ok_or(CartError::Overflow)?;
        if !stock.can_fulfill(requested) {
            return Err(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let product = match current.get(product_id) {
            Some(item) => item.product.clone(),
            None => self.inner.services.catalog.product(product_id).await?,
        };

        self.commit(current.with_product(product)?).await
    }

    async fn try_remove_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let current = self.cart().await;
        self.commit(current.without(product_id)?).await
    }

    async fn try_update_product_amount(&self, update: UpdateProductAmount) -> Result<(), CartError> {
        let UpdateProductAmount { product_id, amount } = update;
        let stock = self.inner.services.stock.stock(product_id).await?;
        if !stock.can_fulfill(amount) {
            return Err(CartError::StockExceeded {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let current = self.cart().await;
        self.commit(current.with_amount(product_id, amount)?).await
    }

    /// Persist `next`, then make it the current cart.
    ///
    /// Runs under the cart write lock: storage and memory always hold the
    /// same last commit.
    async fn commit(&self, next: Cart) -> Result<(), CartError> {
        let mut cart = self.inner.cart.write().await;
        self.inner.slot.save(&next)?;

        debug!(items = next.len(), count = next.item_count(), "cart committed");
        *cart = next;
        Ok(())
    }

    fn reject(&self, err: &CartError, fallback: &str) {
        let message: &str = match err {
            CartError::StockExceeded {
                product_id,
                requested,
                available,
            } => {
                warn!(%product_id, requested, available, "stock exceeded");
                self.inner.messages.stock_exceeded.as_str()
            }
            CartError::ItemNotFound(product_id) => {
                warn!(%product_id, "item not in cart");
                fallback
            }
            other => {
                error!(error = %other, "cart mutation failed");
                fallback
            }
        };
        self.inner.services.notifier.notify_error(message);
    }
}
