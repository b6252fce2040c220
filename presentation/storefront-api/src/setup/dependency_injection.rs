use std::sync::Arc;

use business::domain::catalog::services::CatalogSearchService;
use business::domain::catalog::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::logger::Logger;
use business::domain::session::model::SessionState;
use business::domain::session::use_cases::load::LoadSessionUseCase;
use catalog::client::CatalogClient;
use catalog::search::CatalogSearchHttp;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryLocal;
use persistence::favorite::repository::FavoriteRepositoryLocal;
use persistence::storage::{KeyValueStorage, open_file_storage};

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::decrement::DecrementCartItemUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::increment::IncrementCartItemUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::catalog::get_products::GetProductsUseCaseImpl;
use business::application::catalog::search::SearchProductsUseCaseImpl;
use business::application::favorite::toggle::ToggleFavoriteUseCaseImpl;
use business::application::session::detail::DetailUseCaseImpl;
use business::application::session::dismiss_alert::DismissAlertUseCaseImpl;
use business::application::session::load::LoadSessionUseCaseImpl;
use business::application::session::snapshot::GetSessionSnapshotUseCaseImpl;
use business::application::session::toggle_overlay::ToggleOverlayUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::catalog::routes::CatalogApi;
use crate::api::favorite::routes::FavoriteApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::session::routes::SessionApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub favorite_api: FavoriteApi,
    pub cart_api: CartApi,
    pub session_api: SessionApi,
    load_session_use_case: Arc<dyn LoadSessionUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let storage = open_file_storage(&config.storage.to_storage_config()).await?;
        tracing::info!(dir = %config.storage.dir, "Durable storage opened");

        let catalog = CatalogSearchHttp::new(CatalogClient::new(
            config.catalog.base_url.clone(),
            config.catalog.timeout,
        )?);

        Ok(Self::with_adapters(Arc::new(catalog), Arc::new(storage)))
    }

    /// Wires every use case around one session from the given adapters.
    pub fn with_adapters(
        catalog: Arc<dyn CatalogSearchService>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let session = SessionState::new().into_shared();

        // Infrastructure adapters
        let favorite_repository = Arc::new(FavoriteRepositoryLocal::new(storage.clone()));
        let cart_repository = Arc::new(CartRepositoryLocal::new(storage));

        // Catalog use cases
        let get_products_use_case = Arc::new(GetProductsUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            session: session.clone(),
            catalog,
            logger: logger.clone(),
        });

        // Favorite use cases
        let toggle_favorite_use_case = Arc::new(ToggleFavoriteUseCaseImpl {
            session: session.clone(),
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            session: session.clone(),
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            session: session.clone(),
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let increment_use_case = Arc::new(IncrementCartItemUseCaseImpl {
            session: session.clone(),
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let decrement_use_case = Arc::new(DecrementCartItemUseCaseImpl {
            session: session.clone(),
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Session use cases
        let load_session_use_case = Arc::new(LoadSessionUseCaseImpl {
            session: session.clone(),
            favorite_repository,
            cart_repository,
            logger: logger.clone(),
        });
        let snapshot_use_case = Arc::new(GetSessionSnapshotUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let toggle_overlay_use_case = Arc::new(ToggleOverlayUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let detail_use_case = Arc::new(DetailUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let dismiss_alert_use_case = Arc::new(DismissAlertUseCaseImpl {
            session,
            logger: logger.clone(),
        });

        Self {
            health_api: HealthApi::new(),
            catalog_api: CatalogApi::new(get_products_use_case, search_use_case.clone()),
            favorite_api: FavoriteApi::new(toggle_favorite_use_case),
            cart_api: CartApi::new(
                get_cart_use_case,
                add_to_cart_use_case,
                remove_from_cart_use_case,
                increment_use_case,
                decrement_use_case,
            ),
            session_api: SessionApi::new(
                snapshot_use_case,
                toggle_overlay_use_case,
                detail_use_case,
                dismiss_alert_use_case,
            ),
            load_session_use_case,
            search_use_case,
            logger,
        }
    }

    /// Restores favorites and cart, then loads the default product list.
    ///
    /// A failing catalog leaves the session usable with an empty list and the alert raised.
    pub async fn bootstrap(&self) {
        self.load_session_use_case.execute().await;

        let initial = SearchProductsParams {
            query: String::new(),
        };
        if let Err(err) = self.search_use_case.execute(initial).await {
            self.logger
                .warn(&format!("Initial catalog load failed: {}", err));
        }
    }
}
