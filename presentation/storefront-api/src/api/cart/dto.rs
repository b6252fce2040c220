use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Product from the current list or the open detail page
    pub product_id: u64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product: ProductResponse,
    /// Always at least 1
    pub quantity: u32,
    /// Unit price times quantity
    pub line_total: f64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        let line_total = line.line_total();
        Self {
            product: line.product.into(),
            quantity: line.quantity,
            line_total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    /// Number of lines, as shown on the cart badge
    pub count: u64,
    /// Sum of every line total
    pub total: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let count = cart.item_count() as u64;
        let total = cart.total();
        Self {
            lines: cart.lines().iter().cloned().map(Into::into).collect(),
            count,
            total,
        }
    }
}
