//! Union-find over indices, for merging items into clusters.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use petgraph::unionfind::UnionFind;

/// A fixed number of elements `0..len`, each starting in its own set.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    sets: UnionFind<usize>,
    len: usize,
    set_count: usize,
}

impl DisjointSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            sets: UnionFind::new(len),
            len,
            set_count: len,
        }
    }

    /// Union every pair of items for which `same_cluster` holds.
    pub fn find_clusters<T>(data: &[T], mut same_cluster: impl FnMut(&T, &T) -> bool) -> Self {
        let mut set = Self::new(data.len());
        for (i, a) in data.iter().enumerate() {
            for (j, b) in data.iter().enumerate().skip(i + 1) {
                if same_cluster(a, b) {
                    set.union(i, j);
                }
            }
        }
        log::debug!("clustered {} items into {} sets", data.len(), set.set_count);
        set
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of disjoint sets remaining.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// The representative of the set containing `element`.
    ///
    /// # Panics
    ///
    /// Panics if `element` is out of bounds.
    pub fn find(&mut self, element: usize) -> usize {
        self.sets.find_mut(element)
    }

    /// Whether two elements are in the same set.
    #[must_use]
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.sets.equiv(a, b)
    }

    /// Merge the sets containing `a` and `b`. Returns `false` if they were already one set.
    ///
    /// # Panics
    ///
    /// Panics if either element is out of bounds.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let merged = self.sets.union(a, b);
        if merged {
            self.set_count -= 1;
        }
        merged
    }

    /// Collect `data` into its sets, where `data[i]` belongs to element `i`.
    ///
    /// Sets are ordered by their lowest element.
    ///
    /// # Panics
    ///
    /// Panics if `data` does not hold one item per element.
    pub fn resolve<T: Clone + Eq + Hash>(&mut self, data: &[T]) -> Vec<HashSet<T>> {
        assert_eq!(data.len(), self.len, "resolved data must match the set size");

        let mut index_of_root = HashMap::with_capacity(self.set_count);
        let mut sets: Vec<HashSet<T>> = Vec::with_capacity(self.set_count);
        for (element, item) in data.iter().enumerate() {
            let root = self.find(element);
            let index = *index_of_root.entry(root).or_insert_with(|| {
                sets.push(HashSet::new());
                sets.len() - 1
            });
            sets[index].insert(item.clone());
        }
        sets
    }

    /// The size of every set, keyed by its representative.
    pub fn resolve_sizes(&mut self) -> HashMap<usize, usize> {
        let mut sizes = HashMap::with_capacity(self.set_count);
        for element in 0..self.len {
            *sizes.entry(self.find(element)).or_insert(0) += 1;
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions_reduce_set_count() {
        let mut set = DisjointSet::new(5);
        assert_eq!(set.set_count(), 5);
        assert!(set.union(0, 1));
        assert!(set.union(3, 4));
        assert!(set.union(1, 4));
        assert!(!set.union(0, 3));
        assert!(!set.union(2, 2));
        assert_eq!(set.set_count(), 2);
        assert_eq!(set.find(0), set.find(4));
        assert!(!set.same_set(0, 2));
    }

    #[test]
    fn clusters_nearby_points() {
        let points = [1, 2, 4, 10, 11, 20];
        let mut set = DisjointSet::find_clusters(&points, |a: &i32, b: &i32| (a - b).abs() <= 2);
        assert_eq!(set.set_count(), 3);

        let clusters = set.resolve(&points);
        assert_eq!(
            clusters,
            vec![
                HashSet::from([1, 2, 4]),
                HashSet::from([10, 11]),
                HashSet::from([20]),
            ]
        );

        let mut sizes: Vec<_> = set.resolve_sizes().into_values().collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2, 3]);
    }

    #[test]
    fn empty_set() {
        let mut set = DisjointSet::new(0);
        assert!(set.is_empty());
        assert!(set.resolve::<u8>(&[]).is_empty());
        assert!(set.resolve_sizes().is_empty());
    }
}
