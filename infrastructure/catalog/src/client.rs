use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Shared HTTP client configuration for the catalog service.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the product search endpoint URL.
    pub fn search_url(&self) -> String {
        format!("{}/products/search", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_search_url_without_double_slash() {
        let client = CatalogClient::new(
            "https://dummyjson.com/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(client.search_url(), "https://dummyjson.com/products/search");
    }

    #[test]
    fn should_build_client_with_configured_timeout() {
        let client =
            CatalogClient::new("http://localhost:9000".to_string(), Duration::from_millis(250));

        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url, "http://localhost:9000");
    }
}
