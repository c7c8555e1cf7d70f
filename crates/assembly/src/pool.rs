//! Pool state: the three shuffled category pools being drained.
//!
//! Each pool is a `Vec` used as a stack. Draws come off the end, so removal
//! and remaining counts are O(1) and the draw order is fixed by the shuffle.

use types::{Categories, Category, Participant};

/// Remaining members of every category for one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolState {
    pools: [Vec<Participant>; 3],
}

impl PoolState {
    /// Build pool state by copying the caller's lists. Absent labels are empty.
    pub fn from_categories(categories: &Categories) -> Self {
        let mut pools: [Vec<Participant>; 3] = Default::default();
        for (category, members) in categories {
            pools[category.index()] = members.clone();
        }
        Self { pools }
    }

    /// Remove and return the last member of a pool.
    pub fn take(&mut self, category: Category) -> Option<Participant> {
        self.pools[category.index()].pop()
    }

    /// Take members until the pool is empty, in draw order.
    pub fn drain(&mut self, category: Category) -> Vec<Participant> {
        let pool = &mut self.pools[category.index()];
        let mut drained = Vec::with_capacity(pool.len());
        while let Some(member) = pool.pop() {
            drained.push(member);
        }
        drained
    }

    /// Members left in one pool.
    pub fn remaining(&self, category: Category) -> usize {
        self.pools[category.index()].len()
    }

    /// Members left across all pools.
    pub fn remaining_count(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.pools[category.index()].is_empty()
    }

    /// Labels with at least one member left, in order A, B, C.
    pub fn active_labels(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.is_empty(*c))
            .collect()
    }

    /// Mutable access to one pool, for in-place shuffling.
    pub(crate) fn pool_mut(&mut self, category: Category) -> &mut Vec<Participant> {
        &mut self.pools[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(prefix: &str, n: usize) -> Vec<Participant> {
        (1..=n).map(|i| format!("{prefix}{i}")).collect()
    }

    fn state(a: usize, b: usize, c: usize) -> PoolState {
        let mut cats = Categories::new();
        cats.insert(Category::A, names("a", a));
        cats.insert(Category::B, names("b", b));
        cats.insert(Category::C, names("c", c));
        PoolState::from_categories(&cats)
    }

    #[test]
    fn test_take_pops_from_end() {
        let mut pools = state(3, 0, 0);
        assert_eq!(pools.take(Category::A).as_deref(), Some("a3"));
        assert_eq!(pools.take(Category::A).as_deref(), Some("a2"));
        assert_eq!(pools.remaining(Category::A), 1);
    }

    #[test]
    fn test_take_empty_returns_none() {
        let mut pools = state(0, 0, 0);
        assert_eq!(pools.take(Category::B), None);
    }

    #[test]
    fn test_remaining_count_and_active_labels() {
        let pools = state(2, 0, 1);
        assert_eq!(pools.remaining_count(), 3);
        assert_eq!(pools.active_labels(), vec![Category::A, Category::C]);
    }

    #[test]
    fn test_drain_empties_pool_in_draw_order() {
        let mut pools = state(0, 3, 0);
        assert_eq!(pools.drain(Category::B), vec!["b3", "b2", "b1"]);
        assert!(pools.is_empty(Category::B));
        assert!(pools.active_labels().is_empty());
    }

    #[test]
    fn test_missing_label_is_empty_pool() {
        let mut cats = Categories::new();
        cats.insert(Category::C, names("c", 2));
        let pools = PoolState::from_categories(&cats);
        assert_eq!(pools.remaining(Category::A), 0);
        assert_eq!(pools.active_labels(), vec![Category::C]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let mut cats = Categories::new();
        cats.insert(Category::A, vec!["sam".into(), "sam".into()]);
        cats.insert(Category::B, vec!["sam".into()]);
        let pools = PoolState::from_categories(&cats);
        assert_eq!(pools.remaining_count(), 3);
    }
}
