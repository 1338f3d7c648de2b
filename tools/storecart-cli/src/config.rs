//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storecart_api::ApiConfig;
use storecart_store::{CartMessages, StoreConfig, DEFAULT_STORAGE_KEY};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["storecart.toml", ".storecart.toml", "storecart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Offline catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Notification texts.
    #[serde(default)]
    pub messages: CartMessages,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Store configuration derived from this file.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            storage_key: self.storage.key.clone(),
            messages: self.messages.clone(),
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the key-value map, relative to the working directory.
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_path() -> String {
    ".storecart/storage.json".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

/// Offline catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// json-server style fixture (`{"products": [...], "stock": [...]}`).
    /// When set, the API is not contacted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<String>,
}

/// Generate a default storecart.toml config file.
pub fn generate_default_config() -> String {
    let messages = CartMessages::default();
    format!(
        r#"# storecart configuration

[api]
base_url = "http://localhost:3333"
# timeout_ms = 5000
currency = "BRL"

[storage]
path = "{path}"
key = "{key}"

[catalog]
# Serve stock and products from a local file instead of the API.
# fixture = "db.json"

[messages]
stock_exceeded = "{stock_exceeded}"
add_failed = "{add_failed}"
remove_failed = "{remove_failed}"
update_failed = "{update_failed}"
"#,
        path = default_storage_path(),
        key = DEFAULT_STORAGE_KEY,
        stock_exceeded = messages.stock_exceeded,
        add_failed = messages.add_failed,
        remove_failed = messages.remove_failed,
        update_failed = messages.update_failed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
        assert!(config.catalog.fixture.is_none());
        assert_eq!(config.messages, CartMessages::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.path, ".storecart/storage.json");
        assert_eq!(config.store_config().storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storecart.json");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.catalog.fixture = Some("db.json".to_string());
        config.save(path).unwrap();

        let loaded = CliConfig::load(path).unwrap();
        assert_eq!(loaded.catalog.fixture.as_deref(), Some("db.json"));
    }
}
