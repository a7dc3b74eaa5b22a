//! Small helpers for splitting and inspecting sequences.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected exactly 2 elements, found {found}")]
pub struct ToPairError {
    /// Number of elements seen, capped at 3.
    pub found: usize,
}

pub trait IteratorUtils: Iterator + Sized {
    /// Split into groups at every item matching `separator`, dropping the separators.
    ///
    /// Always yields at least one group, and adjacent separators yield an empty group between
    /// them.
    fn split_on(self, mut separator: impl FnMut(&Self::Item) -> bool) -> Vec<Vec<Self::Item>> {
        let mut groups = vec![Vec::new()];
        for item in self {
            if separator(&item) {
                groups.push(Vec::new());
            } else if let Some(group) = groups.last_mut() {
                group.push(item);
            }
        }
        groups
    }

    /// Split into groups at every item equal to `separator`.
    #[must_use]
    fn split_on_element(self, separator: &Self::Item) -> Vec<Vec<Self::Item>>
    where
        Self::Item: PartialEq,
    {
        self.split_on(|item| item == separator)
    }

    /// Take exactly two items.
    ///
    /// # Errors
    ///
    /// Returns a [`ToPairError`] if there are fewer or more than two items.
    fn to_pair(mut self) -> Result<(Self::Item, Self::Item), ToPairError> {
        let first = self.next();
        let second = self.next();
        let extra = self.next();
        match (first, second, extra) {
            (Some(first), Some(second), None) => Ok((first, second)),
            (first, second, extra) => Err(ToPairError {
                found: [first.is_some(), second.is_some(), extra.is_some()]
                    .into_iter()
                    .filter(|&present| present)
                    .count(),
            }),
        }
    }

    /// Whether `predicate` holds for every item and its index. True for an empty iterator.
    fn all_indexed(self, mut predicate: impl FnMut(usize, Self::Item) -> bool) -> bool {
        self.enumerate().all(|(index, item)| predicate(index, item))
    }
}

impl<I: Iterator> IteratorUtils for I {}

/// Group the lines of `input` into paragraphs separated by blank lines.
#[must_use]
pub fn split_on_blank_lines(input: &str) -> Vec<Vec<&str>> {
    input.lines().split_on(|line| line.trim().is_empty())
}

/// The whole sequence repeated `times` times, `[a, b]` becoming `[a, b, a, b, ...]`.
#[must_use]
pub fn repeat_elements<T: Clone>(items: &[T], times: usize) -> Vec<T> {
    items
        .iter()
        .cycle()
        .take(items.len() * times)
        .cloned()
        .collect()
}
