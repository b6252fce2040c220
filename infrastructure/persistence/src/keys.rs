//! Names of the durable storage entries.

pub const FAVORITES: &str = "favorites";
pub const CART_ITEMS: &str = "cartItems";
