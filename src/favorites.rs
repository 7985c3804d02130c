//! Favorites Set
//!
//! Local membership of favorited character ids.

use std::collections::BTreeSet;

/// Ordered set of favorited character ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: BTreeSet<u32>,
}

impl FavoritesSet {
    /// Flip membership of `id`, returning whether it is now a favorite
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in ascending order
    pub fn ids(&self) -> Vec<u32> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Replace local membership with what the server reports
    pub fn reconcile(&mut self, server_ids: impl IntoIterator<Item = u32>) {
        self.ids = server_ids.into_iter().collect();
    }
}

impl FromIterator<u32> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let original: FavoritesSet = [1, 4, 10].into_iter().collect();

        for id in [1, 2, 4, 50] {
            let mut set = original.clone();
            let first = set.toggle(id);
            assert_eq!(first, !original.contains(id));
            let second = set.toggle(id);
            assert_eq!(second, original.contains(id));
            assert_eq!(set, original);
        }
    }

    #[test]
    fn test_ids_sorted() {
        let mut set = FavoritesSet::default();
        set.toggle(12);
        set.toggle(3);
        set.toggle(7);
        assert_eq!(set.ids(), vec![3, 7, 12]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_reconcile_replaces_local() {
        let mut set: FavoritesSet = [1, 2, 3].into_iter().collect();
        // 3 was toggled on locally but never reached the server; 9 was added elsewhere
        set.reconcile([1, 2, 9]);
        assert_eq!(set.ids(), vec![1, 2, 9]);
        assert!(!set.contains(3));

        set.reconcile(Vec::<u32>::new());
        assert!(set.is_empty());
    }
}
