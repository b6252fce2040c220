use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::domain::cart::model::Cart;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{Product, ProductId};
use crate::domain::favorite::model::FavoriteSet;

use super::detail::DetailView;
use super::errors::SessionError;
use super::search::{FETCH_FAILED_ALERT, SearchSettlement, SearchTicket};

/// Session state shared between the use cases of one storefront.
pub type SharedSession = Arc<Mutex<SessionState>>;

/// Which page is displayed. Cart and menu are overlays on top of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Home,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    /// Restricts the product list to favorites.
    Favorites,
    Cart,
    Menu,
}

impl std::fmt::Display for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Overlay::Favorites => write!(f, "favorites"),
            Overlay::Cart => write!(f, "cart"),
            Overlay::Menu => write!(f, "menu"),
        }
    }
}

impl std::str::FromStr for Overlay {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favorites" => Ok(Overlay::Favorites),
            "cart" => Ok(Overlay::Cart),
            "menu" => Ok(Overlay::Menu),
            _ => Err(SessionError::UnknownOverlay),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub products: Vec<Product>,
    pub query: String,
    pub favorites: FavoriteSet,
    pub cart: Cart,
    pub detail: Option<DetailView>,
    pub show_favorites: bool,
    pub show_cart: bool,
    pub show_menu: bool,
    pub loading: bool,
    pub alert: Option<String>,
    latest_search: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn restore(&mut self, favorites: FavoriteSet, cart: Cart) {
        self.favorites = favorites;
        self.cart = cart;
    }

    pub fn mode(&self) -> ViewMode {
        if self.detail.is_some() {
            ViewMode::Detail
        } else {
            ViewMode::Home
        }
    }

    /// Records the new query and hands out the ticket the request must settle with.
    pub fn begin_search(&mut self, query: String) -> SearchTicket {
        self.query = query;
        self.latest_search += 1;
        self.loading = true;
        SearchTicket(self.latest_search)
    }

    /// Applies a search outcome unless a newer search was issued after it.
    pub fn settle_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<Product>, CatalogError>,
    ) -> SearchSettlement {
        if ticket.0 != self.latest_search {
            return SearchSettlement::Superseded;
        }

        self.loading = false;
        match outcome {
            Ok(products) => {
                self.products = products;
                SearchSettlement::Applied
            }
            Err(_) => {
                self.alert = Some(FETCH_FAILED_ALERT.to_string());
                SearchSettlement::Failed
            }
        }
    }

    /// The list the grid shows: the catalog list, or only favorites in catalog order.
    pub fn displayed_products(&self) -> Vec<Product> {
        if self.show_favorites {
            self.products
                .iter()
                .filter(|product| self.favorites.contains(product.id))
                .cloned()
                .collect()
        } else {
            self.products.clone()
        }
    }

    /// Looks a product up in the catalog list, then in the open detail page.
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .or_else(|| {
                self.detail
                    .as_ref()
                    .map(|detail| &detail.product)
                    .filter(|product| product.id == id)
            })
    }

    /// Flips an overlay flag and returns its new value.
    pub fn toggle_overlay(&mut self, overlay: Overlay) -> bool {
        let flag = match overlay {
            Overlay::Favorites => &mut self.show_favorites,
            Overlay::Cart => &mut self.show_cart,
            Overlay::Menu => &mut self.show_menu,
        };
        *flag = !*flag;
        *flag
    }

    pub fn open_detail(&mut self, id: ProductId) -> Result<&DetailView, SessionError> {
        let product = self
            .find_product(id)
            .cloned()
            .ok_or(SessionError::ProductNotFound)?;
        Ok(&*self.detail.insert(DetailView::new(product)))
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            query: self.query.clone(),
            loading: self.loading,
            alert: self.alert.clone(),
            mode: self.mode(),
            show_favorites: self.show_favorites,
            show_cart: self.show_cart,
            show_menu: self.show_menu,
            products: self.displayed_products(),
            favorites: self.favorites.clone(),
            cart: self.cart.clone(),
            cart_count: self.cart.item_count(),
            cart_total: self.cart.total(),
            detail: self.detail.clone(),
        }
    }
}

/// Everything a view binds to, with derived values computed at read time.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub query: String,
    pub loading: bool,
    pub alert: Option<String>,
    pub mode: ViewMode,
    pub show_favorites: bool,
    pub show_cart: bool,
    pub show_menu: bool,
    pub products: Vec<Product>,
    pub favorites: FavoriteSet,
    pub cart: Cart,
    pub cart_count: usize,
    pub cart_total: f64,
    pub detail: Option<DetailView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(5, "iPhone X", "", 899.0, ""),
            Product::new(7, "iPhone 9", "", 549.0, ""),
            Product::new(9, "Samsung Universe 9", "", 1249.0, ""),
        ]
    }

    fn loaded_state() -> SessionState {
        let mut state = SessionState::new();
        let ticket = state.begin_search("phone".to_string());
        state.settle_search(ticket, Ok(catalog()));
        state
    }

    #[test]
    fn should_replace_products_and_clear_loading_on_success() {
        let mut state = SessionState::new();
        let ticket = state.begin_search("phone".to_string());
        assert!(state.loading);

        let settlement = state.settle_search(ticket, Ok(catalog()));

        assert_eq!(settlement, SearchSettlement::Applied);
        assert!(!state.loading);
        assert_eq!(state.displayed_products().len(), 3);
        assert_eq!(state.query, "phone");
    }

    #[test]
    fn should_keep_prior_list_and_raise_alert_on_failure() {
        let mut state = loaded_state();
        let ticket = state.begin_search("laptop".to_string());

        let settlement = state.settle_search(ticket, Err(CatalogError::FetchFailed));

        assert_eq!(settlement, SearchSettlement::Failed);
        assert!(!state.loading);
        assert_eq!(state.products, catalog());
        assert_eq!(state.alert.as_deref(), Some(FETCH_FAILED_ALERT));
    }

    #[test]
    fn should_discard_outcome_of_superseded_search() {
        let mut state = SessionState::new();
        let first = state.begin_search("ph".to_string());
        let second = state.begin_search("phone".to_string());

        assert_eq!(
            state.settle_search(second, Ok(catalog())),
            SearchSettlement::Applied
        );
        assert_eq!(
            state.settle_search(first, Ok(vec![Product::new(1, "Old", "", 1.0, "")])),
            SearchSettlement::Superseded
        );
        assert_eq!(state.products, catalog());
    }

    #[test]
    fn should_stay_loading_while_newest_search_is_pending() {
        let mut state = SessionState::new();
        let first = state.begin_search("ph".to_string());
        let _second = state.begin_search("phone".to_string());

        state.settle_search(first, Err(CatalogError::FetchFailed));

        assert!(state.loading);
        assert!(state.alert.is_none());
    }

    #[test]
    fn should_filter_favorites_in_catalog_order() {
        let mut state = loaded_state();
        state.favorites.toggle(9);
        state.favorites.toggle(5);
        state.toggle_overlay(Overlay::Favorites);

        let ids: Vec<ProductId> = state.displayed_products().iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn should_show_everything_when_favorites_filter_is_off() {
        let mut state = loaded_state();
        state.favorites.toggle(7);

        assert_eq!(state.displayed_products(), catalog());
    }

    #[test]
    fn should_enter_and_leave_detail_mode() {
        let mut state = loaded_state();

        let detail = state.open_detail(7).unwrap();
        assert_eq!(detail.count(), 1);
        assert_eq!(state.mode(), ViewMode::Detail);

        state.close_detail();
        assert_eq!(state.mode(), ViewMode::Home);
        assert!(state.detail.is_none());
    }

    #[test]
    fn should_reject_detail_for_unknown_product() {
        let mut state = loaded_state();

        assert_eq!(
            state.open_detail(42).unwrap_err(),
            SessionError::ProductNotFound
        );
        assert_eq!(state.mode(), ViewMode::Home);
    }

    #[test]
    fn should_find_product_open_in_detail_after_list_changes() {
        let mut state = loaded_state();
        state.open_detail(7).unwrap();
        let ticket = state.begin_search("laptop".to_string());
        state.settle_search(ticket, Ok(Vec::new()));

        assert_eq!(state.find_product(7).map(|p| p.id), Some(7));
    }

    #[test]
    fn should_toggle_overlays_independently() {
        let mut state = SessionState::new();

        assert!(state.toggle_overlay(Overlay::Cart));
        assert!(state.toggle_overlay(Overlay::Menu));
        assert!(!state.toggle_overlay(Overlay::Cart));
        assert!(state.show_menu);
        assert!(!state.show_favorites);
    }

    #[test]
    fn should_parse_overlay_names() {
        assert_eq!("favorites".parse::<Overlay>(), Ok(Overlay::Favorites));
        assert_eq!(
            "sidebar".parse::<Overlay>(),
            Err(SessionError::UnknownOverlay)
        );
    }

    #[test]
    fn should_derive_cart_values_in_snapshot() {
        let mut state = loaded_state();
        state.cart.add(catalog()[1].clone());
        state.cart.add(catalog()[1].clone());

        let snapshot = state.snapshot();

        assert_eq!(snapshot.cart_count, 1);
        assert_eq!(snapshot.cart_total, 1098.0);
        assert_eq!(snapshot.mode, ViewMode::Home);
    }

    proptest! {
        #[test]
        fn favorites_filter_is_ordered_subset(
            ids in proptest::collection::vec(0u64..30, 0..15),
            liked in proptest::collection::vec(0u64..30, 0..15),
        ) {
            let mut state = SessionState::new();
            state.products = ids
                .iter()
                .map(|id| Product::new(*id, "item", "", 1.0, ""))
                .collect();
            state.favorites = FavoriteSet::from_repository(liked);
            state.show_favorites = true;

            let shown = state.displayed_products();

            let expected: Vec<ProductId> = ids
                .iter()
                .copied()
                .filter(|id| state.favorites.contains(*id))
                .collect();
            let shown_ids: Vec<ProductId> = shown.iter().map(|p| p.id).collect();
            prop_assert_eq!(shown_ids, expected);
        }
    }
}
