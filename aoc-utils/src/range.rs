//! Helpers for inclusive integer ranges.

use std::ops::RangeInclusive;

use num_traits::PrimInt;

/// Set operations on inclusive ranges.
pub trait InclusiveRange<T>: Sized {
    /// Number of values in the range, zero if it is empty.
    fn size(&self) -> T;

    /// The overlap of two ranges, or `None` if they do not overlap.
    fn intersect(&self, other: &Self) -> Option<Self>;

    /// The values covered by exactly one of the two ranges.
    ///
    /// Ranges that do not overlap are returned unchanged. Otherwise the result holds the part of
    /// the union before the intersection and the part after it, omitting either if it is empty.
    fn disjoint_parts(&self, other: &Self) -> Vec<Self>;
}

impl<T: PrimInt> InclusiveRange<T> for RangeInclusive<T> {
    fn size(&self) -> T {
        if self.start() > self.end() {
            T::zero()
        } else {
            *self.end() - *self.start() + T::one()
        }
    }

    fn intersect(&self, other: &Self) -> Option<Self> {
        let start = *self.start().max(other.start());
        let end = *self.end().min(other.end());
        (start <= end).then_some(start..=end)
    }

    fn disjoint_parts(&self, other: &Self) -> Vec<Self> {
        let Some(overlap) = self.intersect(other) else {
            return vec![self.clone(), other.clone()];
        };
        let start = *self.start().min(other.start());
        let end = *self.end().max(other.end());

        let mut parts = Vec::with_capacity(2);
        if start < *overlap.start() {
            parts.push(start..=*overlap.start() - T::one());
        }
        if *overlap.end() < end {
            parts.push(*overlap.end() + T::one()..=end);
        }
        parts
    }
}

/// Merge ranges that overlap or touch, returning the union as sorted, separated ranges.
///
/// Empty ranges are dropped.
pub fn merge_overlapping<T, I>(ranges: I) -> Vec<RangeInclusive<T>>
where
    T: PrimInt,
    I: IntoIterator<Item = RangeInclusive<T>>,
{
    let mut ranges: Vec<_> = ranges.into_iter().filter(|range| !range.is_empty()).collect();
    ranges.sort_unstable_by_key(|range| *range.start());

    let mut merged: Vec<RangeInclusive<T>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut()
            && *range.start() <= last.end().saturating_add(T::one())
        {
            if range.end() > last.end() {
                *last = *last.start()..=*range.end();
            }
        } else {
            merged.push(range);
        }
    }
    merged
}
