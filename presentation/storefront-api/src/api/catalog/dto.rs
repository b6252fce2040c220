use poem_openapi::Object;
use serde_json::Value;

use business::domain::catalog::model::Product;
use business::domain::catalog::use_cases::search::SearchOutcome;
use business::domain::session::search::SearchSettlement;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog product identifier
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Remaining catalog fields, passed through untouched
    pub extra: Value,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            thumbnail: product.thumbnail,
            extra: Value::Object(product.extra),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SearchRequest {
    /// Free-text query; empty returns the default set
    #[oai(default)]
    pub query: String,
}

#[derive(Debug, Clone, Object)]
pub struct SearchResponse {
    /// "applied", or "superseded" when a newer search was issued meanwhile
    pub settlement: String,
    /// Products displayed after the search settled
    pub products: Vec<ProductResponse>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        let settlement = match outcome.settlement {
            SearchSettlement::Applied => "applied",
            SearchSettlement::Failed => "failed",
            SearchSettlement::Superseded => "superseded",
        };
        Self {
            settlement: settlement.to_string(),
            products: outcome.products.into_iter().map(Into::into).collect(),
        }
    }
}
