use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::Product;

/// Service port for the remote catalog search endpoint.
///
/// An empty query returns whatever default set the service chooses.
#[async_trait]
pub trait CatalogSearchService: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError>;
}
