use serde::Serialize;

use crate::domain::catalog::model::Product;

/// State of the product detail page.
///
/// The counter is independent from any cart quantity and never drops below 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub product: Product,
    count: u32,
}

impl DetailView {
    pub fn new(product: Product) -> Self {
        Self { product, count: 1 }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Returns whether the counter changed.
    pub fn decrement(&mut self) -> bool {
        if self.count > 1 {
            self.count -= 1;
            true
        } else {
            false
        }
    }

    /// Entry price rounded to a whole amount, plus one unit price per extra count.
    pub fn total(&self) -> f64 {
        self.product.price.round() + self.product.price * f64::from(self.count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> DetailView {
        DetailView::new(Product::new(3, "Perfume", "", 12.5, ""))
    }

    #[test]
    fn should_start_at_one() {
        let view = detail();

        assert_eq!(view.count(), 1);
        assert_eq!(view.total(), 13.0);
    }

    #[test]
    fn should_recompute_total_on_every_change() {
        let mut view = detail();
        view.increment();
        view.increment();

        assert_eq!(view.total(), 38.0);
        assert!(view.decrement());
        assert_eq!(view.total(), 25.5);
    }

    #[test]
    fn should_round_only_the_entry_price() {
        let mut view = detail();
        view.increment();

        assert_eq!(view.total(), 25.5);
        assert!(view.decrement());
        assert_eq!(view.total(), 13.0);
    }

    #[test]
    fn should_floor_counter_at_one() {
        let mut view = detail();

        assert!(!view.decrement());
        assert_eq!(view.count(), 1);
    }
}
