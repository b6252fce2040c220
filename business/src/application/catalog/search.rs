use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::services::CatalogSearchService;
use crate::domain::catalog::use_cases::search::{
    SearchOutcome, SearchProductsParams, SearchProductsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;
use crate::domain::session::search::SearchSettlement;

pub struct SearchProductsUseCaseImpl {
    pub session: SharedSession,
    pub catalog: Arc<dyn CatalogSearchService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<SearchOutcome, CatalogError> {
        self.logger
            .info(&format!("Searching catalog for: {:?}", params.query));

        // The lock is released while the request is in flight.
        let ticket = self.session.lock().await.begin_search(params.query.clone());

        let result = self.catalog.search(&params.query).await;
        if let Err(err) = &result {
            self.logger
                .error(&format!("Catalog search {:?} failed: {}", params.query, err));
        }

        let mut session = self.session.lock().await;
        let settlement = session.settle_search(ticket, result);
        match settlement {
            SearchSettlement::Applied => self.logger.info(&format!(
                "Catalog search {:?} returned {} products",
                params.query,
                session.products.len()
            )),
            SearchSettlement::Superseded => self.logger.debug(&format!(
                "Discarding outcome of superseded search {:?}",
                params.query
            )),
            SearchSettlement::Failed => return Err(CatalogError::FetchFailed),
        }

        Ok(SearchOutcome {
            settlement,
            products: session.displayed_products(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::session::model::SessionState;
    use crate::domain::session::search::FETCH_FAILED_ALERT;
    use crate::test_support::{MockCatalogSearch, mock_logger, phone_catalog, session_with_catalog};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn should_replace_products_when_search_succeeds() {
        let mut mock_catalog = MockCatalogSearch::new();
        mock_catalog
            .expect_search()
            .times(1)
            .returning(|_| Ok(phone_catalog()));
        let session = SessionState::new().into_shared();

        let use_case = SearchProductsUseCaseImpl {
            session: session.clone(),
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                query: "phone".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let outcome = result.unwrap();
        assert_eq!(outcome.settlement, SearchSettlement::Applied);
        assert_eq!(outcome.products.len(), 3);
        assert!(!session.lock().await.loading);
    }

    #[tokio::test]
    async fn should_keep_prior_list_and_alert_when_search_fails() {
        let mut mock_catalog = MockCatalogSearch::new();
        mock_catalog
            .expect_search()
            .returning(|_| Err(CatalogError::FetchFailed));
        let session = session_with_catalog();

        let use_case = SearchProductsUseCaseImpl {
            session: session.clone(),
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                query: "laptop".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::FetchFailed));
        let state = session.lock().await;
        assert_eq!(state.products, phone_catalog());
        assert_eq!(state.alert.as_deref(), Some(FETCH_FAILED_ALERT));
        assert!(!state.loading);
    }

    struct GatedCatalog {
        slow_release: tokio::sync::Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl CatalogSearchService for GatedCatalog {
        async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
            if query == "ph" {
                let gate = self.slow_release.lock().await.take();
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                return Ok(vec![Product::new(1, "Phone case", "", 5.0, "")]);
            }
            Ok(phone_catalog())
        }
    }

    #[tokio::test]
    async fn should_discard_stale_response_that_resolves_last() {
        let (release, gate) = oneshot::channel();
        let session = SessionState::new().into_shared();
        let use_case = Arc::new(SearchProductsUseCaseImpl {
            session: session.clone(),
            catalog: Arc::new(GatedCatalog {
                slow_release: tokio::sync::Mutex::new(Some(gate)),
            }),
            logger: mock_logger(),
        });

        let slow = {
            let use_case = use_case.clone();
            tokio::spawn(async move {
                use_case
                    .execute(SearchProductsParams {
                        query: "ph".to_string(),
                    })
                    .await
            })
        };
        // Let the slow request take its ticket before the newer one starts.
        while session.lock().await.query != "ph" {
            tokio::task::yield_now().await;
        }

        let fast = use_case
            .execute(SearchProductsParams {
                query: "phone".to_string(),
            })
            .await
            .unwrap();
        release.send(()).unwrap();
        let stale = slow.await.unwrap().unwrap();

        assert_eq!(fast.settlement, SearchSettlement::Applied);
        assert_eq!(stale.settlement, SearchSettlement::Superseded);
        let state = session.lock().await;
        assert_eq!(state.products, phone_catalog());
        assert_eq!(state.query, "phone");
        assert!(!state.loading);
    }
}
