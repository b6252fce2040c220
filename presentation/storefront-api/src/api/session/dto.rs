use poem_openapi::Object;

use business::domain::session::detail::DetailView;
use business::domain::session::model::{SessionSnapshot, ViewMode};

use crate::api::cart::dto::CartResponse;
use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct DetailResponse {
    pub product: ProductResponse,
    /// Quantity counter of the detail page, at least 1
    pub count: u32,
    /// Unit price times the counter
    pub total: f64,
}

impl From<DetailView> for DetailResponse {
    fn from(detail: DetailView) -> Self {
        let count = detail.count();
        let total = detail.total();
        Self {
            product: detail.product.into(),
            count,
            total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OverlayResponse {
    pub overlay: String,
    pub shown: bool,
}

#[derive(Debug, Clone, Object)]
pub struct AlertResponse {
    /// The alert that was dismissed, if one was showing
    #[oai(skip_serializing_if_is_none)]
    pub dismissed: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub query: String,
    pub loading: bool,
    #[oai(skip_serializing_if_is_none)]
    pub alert: Option<String>,
    /// "home" or "detail"
    pub mode: String,
    pub show_favorites: bool,
    pub show_cart: bool,
    pub show_menu: bool,
    /// Displayed products, favorites filter applied
    pub products: Vec<ProductResponse>,
    pub favorites: Vec<u64>,
    pub cart: CartResponse,
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<DetailResponse>,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        let mode = match snapshot.mode {
            ViewMode::Home => "home",
            ViewMode::Detail => "detail",
        };
        Self {
            query: snapshot.query,
            loading: snapshot.loading,
            alert: snapshot.alert,
            mode: mode.to_string(),
            show_favorites: snapshot.show_favorites,
            show_cart: snapshot.show_cart,
            show_menu: snapshot.show_menu,
            products: snapshot.products.into_iter().map(Into::into).collect(),
            favorites: snapshot.favorites.ids().to_vec(),
            cart: snapshot.cart.into(),
            detail: snapshot.detail.map(Into::into),
        }
    }
}
