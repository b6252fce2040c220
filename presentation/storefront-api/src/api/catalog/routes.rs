use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::get_products::GetProductsUseCase;
use business::domain::catalog::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

use crate::api::catalog::dto::{ProductResponse, SearchRequest, SearchResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_products_use_case: Arc<dyn GetProductsUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_products_use_case: Arc<dyn GetProductsUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
    ) -> Self {
        Self {
            get_products_use_case,
            search_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl CatalogApi {
    /// List displayed products
    ///
    /// Returns the current product list, restricted to favorites when the
    /// favorites filter is on.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(&self) -> Json<Vec<ProductResponse>> {
        let products = self.get_products_use_case.execute().await;
        Json(products.into_iter().map(Into::into).collect())
    }

    /// Search the catalog
    ///
    /// Replaces the product list with the results for the query. On failure
    /// the previous list is kept and the session alert is raised.
    #[oai(path = "/products/search", method = "post", tag = "ApiTags::Products")]
    async fn search(&self, body: Json<SearchRequest>) -> SearchProductsResponse {
        let params = SearchProductsParams {
            query: body.0.query,
        };

        match self.search_use_case.execute(params).await {
            Ok(outcome) => SearchProductsResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchProductsResponse::BadGateway(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<SearchResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
