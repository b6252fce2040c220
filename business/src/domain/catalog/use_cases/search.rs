use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::session::search::SearchSettlement;

pub struct SearchProductsParams {
    pub query: String,
}

/// Result of a search that was not rejected outright.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub settlement: SearchSettlement,
    /// Products displayed after the search settled (favorites filter applied).
    pub products: Vec<Product>,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<SearchOutcome, CatalogError>;
}
