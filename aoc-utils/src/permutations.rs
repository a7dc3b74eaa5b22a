//! Permutations by plain changes (Steinhaus-Johnson-Trotter).

/// Iterator over all `n!` orderings of a sequence, consecutive orderings differing by one swap of
/// adjacent elements.
///
/// Elements are permuted by position, so equal elements still produce `n!` results. An empty
/// sequence has exactly one permutation, the empty one.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Permutations<T> {
    items: Vec<T>,
    /// Current arrangement, as indices into `items`.
    keys: Vec<usize>,
    /// Whether the key at each position is moving right.
    moving_right: Vec<bool>,
    next: Option<Vec<T>>,
}

pub fn permutations<T: Clone>(items: impl IntoIterator<Item = T>) -> Permutations<T> {
    let items: Vec<T> = items.into_iter().collect();
    Permutations {
        keys: (0..items.len()).collect(),
        moving_right: vec![false; items.len()],
        next: Some(items.clone()),
        items,
    }
}

impl<T: Clone> Permutations<T> {
    /// The position of the largest key that can move in its direction.
    fn largest_mobile(&self) -> Option<usize> {
        let keys = &self.keys;
        (0..keys.len())
            .filter(|&i| {
                let neighbor = if self.moving_right[i] {
                    keys.get(i + 1)
                } else {
                    i.checked_sub(1).map(|left| &keys[left])
                };
                neighbor.is_some_and(|&neighbor| keys[i] > neighbor)
            })
            .max_by_key(|&i| keys[i])
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        if let Some(position) = self.largest_mobile() {
            let key = self.keys[position];
            let target = if self.moving_right[position] {
                position + 1
            } else {
                position - 1
            };
            self.keys.swap(position, target);
            self.moving_right.swap(position, target);

            for (i, &other) in self.keys.iter().enumerate() {
                if other > key {
                    self.moving_right[i] = !self.moving_right[i];
                }
            }
            self.next = Some(self.keys.iter().map(|&k| self.items[k].clone()).collect());
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn plain_changes_order() {
        let orders: Vec<String> = permutations("abc".chars())
            .map(|order| order.into_iter().collect())
            .collect();
        assert_eq!(orders, vec!["abc", "acb", "cab", "cba", "bca", "bac"]);
    }

    #[test]
    fn yields_factorial_many_distinct_orders() {
        let orders: Vec<_> = permutations(1..=5).collect();
        assert_eq!(orders.len(), 120);
        assert_eq!(orders.iter().collect::<HashSet<_>>().len(), 120);

        for pair in orders.windows(2) {
            let changed: Vec<_> = (0..5).filter(|&i| pair[0][i] != pair[1][i]).collect();
            assert_eq!(changed.len(), 2);
            assert_eq!(changed[0] + 1, changed[1]);
        }
    }

    #[test]
    fn equal_elements_are_distinct() {
        assert_eq!(permutations([7, 7]).count(), 2);
    }

    #[test]
    fn empty_input_has_one_permutation() {
        let orders: Vec<Vec<u8>> = permutations([]).collect();
        assert_eq!(orders, vec![Vec::<u8>::new()]);
    }
}
