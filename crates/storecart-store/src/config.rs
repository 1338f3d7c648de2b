//! Cart store configuration.

use serde::{Deserialize, Serialize};

/// Storage key the cart is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Key holding the serialized cart.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// User-facing notification texts.
    #[serde(default)]
    pub messages: CartMessages,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            messages: CartMessages::default(),
        }
    }
}

/// Messages shown through the notification sink when a mutation is
/// rejected. Any field left out of a config file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartMessages {
    /// Requested amount is larger than the reported stock.
    pub stock_exceeded: String,
    /// `add_product` failed for any other reason.
    pub add_failed: String,
    /// `remove_product` failed.
    pub remove_failed: String,
    /// `update_product_amount` failed for any reason other than stock.
    pub update_failed: String,
}

impl Default for CartMessages {
    fn default() -> Self {
        Self {
            stock_exceeded: "Requested quantity is out of stock".to_string(),
            add_failed: "Error adding product".to_string(),
            remove_failed: "Error removing product".to_string(),
            update_failed: "Error updating product quantity".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_messages_keep_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"messages": {"add_failed": "Erro na adição do produto"}}"#)
                .unwrap();

        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.messages.add_failed, "Erro na adição do produto");
        assert_eq!(
            config.messages.stock_exceeded,
            CartMessages::default().stock_exceeded
        );
    }
}
