//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use storecart_api::ApiClient;
use storecart_core::catalog::{CatalogFixture, InMemoryCatalog};
use storecart_storage::{FileStore, Storage};
use storecart_store::{CartServices, CartStore};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Compose the cart store from the configured backends.
    pub fn cart_store(&self) -> Result<CartStore> {
        let storage_path = self.resolve_path(&self.config.storage.path);
        self.output
            .debug(&format!("storage: {}", storage_path.display()));
        let storage = Storage::new(
            FileStore::open(&storage_path)
                .with_context(|| format!("Failed to open storage: {}", storage_path.display()))?,
        );

        let notifier = Arc::new(self.output);
        let services = match &self.config.catalog.fixture {
            Some(fixture) => {
                let path = self.resolve_path(fixture);
                tracing::debug!(fixture = %path.display(), "serving catalog from fixture");
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog fixture: {}", path.display()))?;
                let fixture = CatalogFixture::from_json(&content)
                    .with_context(|| format!("Failed to parse catalog fixture: {}", path.display()))?;
                let catalog = InMemoryCatalog::from_fixture(fixture, self.config.api.currency);
                CartServices::from_source(Arc::new(catalog), notifier)
            }
            None => {
                tracing::debug!(base_url = %self.config.api.base_url, "serving catalog from api");
                let client = ApiClient::new(&self.config.api).context("Failed to build API client")?;
                CartServices::from_source(Arc::new(client), notifier)
            }
        };

        Ok(CartStore::new(services, storage, self.config.store_config()))
    }
}
