use super::{
    catalog_config::CatalogConfig, cors_config, server_config::ServerConfig,
    storage_config::StorageSettings,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub storage: StorageSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env(),
            storage: StorageSettings::from_env(),
        }
    }
}
