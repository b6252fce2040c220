use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::ProductId;

/// Product ids the user marked as liked, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<ProductId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted. Repeated ids keep their first position.
    pub fn from_repository(ids: Vec<ProductId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            self.ids.retain(|favorite| *favorite != id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_add_when_absent_and_remove_when_present() {
        let mut favorites = FavoriteSet::new();

        assert!(favorites.toggle(7));
        assert!(favorites.contains(7));
        assert!(!favorites.toggle(7));
        assert!(favorites.is_empty());
    }

    #[test]
    fn should_keep_insertion_order() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(3);
        favorites.toggle(1);
        favorites.toggle(2);
        favorites.toggle(1);

        assert_eq!(favorites.ids(), &[3, 2]);
    }

    #[test]
    fn should_drop_duplicates_from_repository() {
        let favorites = FavoriteSet::from_repository(vec![4, 2, 4, 9, 2]);

        assert_eq!(favorites.ids(), &[4, 2, 9]);
    }

    #[test]
    fn should_serialize_as_plain_array() {
        let favorites = FavoriteSet::from_repository(vec![1, 5]);

        assert_eq!(serde_json::to_string(&favorites).unwrap(), "[1,5]");
    }

    proptest! {
        #[test]
        fn membership_follows_toggle_parity(
            initial in proptest::collection::vec(0u64..20, 0..10),
            id in 0u64..20,
            times in 0usize..9,
        ) {
            let mut favorites = FavoriteSet::from_repository(initial);
            let before = favorites.contains(id);

            for _ in 0..times {
                favorites.toggle(id);
            }

            let expected = if times % 2 == 1 { !before } else { before };
            prop_assert_eq!(favorites.contains(id), expected);
        }
    }
}
