use std::env;
use std::time::Duration;

use catalog::client::DEFAULT_BASE_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the product catalog is searched.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_BASE_URL: Catalog service root (default: "https://dummyjson.com")
    /// - CATALOG_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CATALOG_BASE_URL").ok(),
            env::var("CATALOG_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_defaults() {
        let config = CatalogConfig::from_values(None, None);

        assert_eq!(config.base_url, "https://dummyjson.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_ignore_unparsable_timeout() {
        let config = CatalogConfig::from_values(
            Some("http://localhost:4000".to_string()),
            Some("soon".to_string()),
        );

        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_use_configured_timeout() {
        let config = CatalogConfig::from_values(None, Some("5".to_string()));

        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
