use async_trait::async_trait;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Product;
use business::domain::catalog::services::CatalogSearchService;

use crate::client::CatalogClient;

#[derive(Deserialize)]
struct SearchResponse {
    products: Vec<Product>,
}

/// Catalog search over `GET {base}/products/search?q=...`.
pub struct CatalogSearchHttp {
    client: CatalogClient,
}

impl CatalogSearchHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<Vec<Product>, CatalogError> {
        serde_json::from_str::<SearchResponse>(body)
            .map(|response| response.products)
            .map_err(|_| CatalogError::FetchFailed)
    }
}

#[async_trait]
impl CatalogSearchService for CatalogSearchHttp {
    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.search_url())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|_| CatalogError::FetchFailed)?;

        if !response.status().is_success() {
            return Err(CatalogError::FetchFailed);
        }

        let body = response
            .text()
            .await
            .map_err(|_| CatalogError::FetchFailed)?;

        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn should_parse_products_field() {
        let body = r#"{
            "products": [
                {"id": 1, "title": "iPhone 9", "description": "An apple mobile",
                 "price": 549, "thumbnail": "https://cdn.example/1.jpg", "stock": 94},
                {"id": 2, "title": "iPhone X", "description": "SIM-Free",
                 "price": 899.99, "thumbnail": "https://cdn.example/2.jpg"}
            ],
            "total": 2, "skip": 0, "limit": 30
        }"#;

        let products = CatalogSearchHttp::parse_response(body).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "iPhone 9");
        assert_eq!(products[1].price, 899.99);
        assert!(products[0].extra.contains_key("stock"));
    }

    #[test]
    fn should_fail_when_products_field_missing() {
        let result = CatalogSearchHttp::parse_response(r#"{"message": "not found"}"#);

        assert_eq!(result.unwrap_err(), CatalogError::FetchFailed);
    }

    #[test]
    fn should_fail_on_non_json_body() {
        let result = CatalogSearchHttp::parse_response("<html>502</html>");

        assert_eq!(result.unwrap_err(), CatalogError::FetchFailed);
    }

    #[tokio::test]
    async fn should_fail_when_service_is_unreachable() {
        // Port 9 on loopback has nothing listening.
        let search = CatalogSearchHttp::new(CatalogClient::new(
            "http://127.0.0.1:9".to_string(),
            Duration::from_secs(2),
        )
        .unwrap());

        let result = search.search("phone").await;

        assert_eq!(result.unwrap_err(), CatalogError::FetchFailed);
    }
}
