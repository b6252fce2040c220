use std::env;

use persistence::storage::StorageConfig;

/// Location of the durable local storage entries.
#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub dir: String,
}

impl StorageSettings {
    /// Environment variables:
    /// - STOREFRONT_STORAGE_DIR: Directory holding the storage entries (default: ".storefront")
    pub fn from_env() -> Self {
        let dir = env::var("STOREFRONT_STORAGE_DIR").unwrap_or_else(|_| ".storefront".to_string());
        Self { dir }
    }

    pub fn to_storage_config(&self) -> StorageConfig {
        StorageConfig::new(&self.dir)
    }
}
