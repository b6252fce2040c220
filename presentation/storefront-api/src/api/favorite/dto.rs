use poem_openapi::Object;

use business::domain::favorite::use_cases::toggle::ToggleFavoriteResult;

#[derive(Debug, Clone, Object)]
pub struct ToggleFavoriteResponse {
    pub product_id: u64,
    /// Membership after the toggle
    pub is_favorite: bool,
    /// Every favorite id, in the order they were added
    pub favorites: Vec<u64>,
}

impl ToggleFavoriteResponse {
    pub fn new(product_id: u64, result: ToggleFavoriteResult) -> Self {
        Self {
            product_id,
            is_favorite: result.is_favorite,
            favorites: result.favorites.ids().to_vec(),
        }
    }
}
