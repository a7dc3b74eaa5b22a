//! Greatest common divisors, least common multiples, and overflow-checked folds over iterators.

use num_integer::Integer;
use num_traits::{CheckedMul, CheckedSub};

/// Greatest common divisor, always non-negative.
#[must_use]
pub fn gcd<T: Integer + Copy>(a: T, b: T) -> T {
    a.gcd(&b)
}

/// Least common multiple, always non-negative. Zero if either argument is zero.
#[must_use]
pub fn lcm<T: Integer + Copy>(a: T, b: T) -> T {
    a.lcm(&b)
}

/// Least common multiple, or `None` if it overflows `T`.
#[must_use]
pub fn checked_lcm<T>(a: T, b: T) -> Option<T>
where
    T: Integer + CheckedMul + CheckedSub + Copy,
{
    if a.is_zero() || b.is_zero() {
        return Some(T::zero());
    }
    let lcm = (a / a.gcd(&b)).checked_mul(&b)?;
    if lcm < T::zero() {
        T::zero().checked_sub(&lcm)
    } else {
        Some(lcm)
    }
}

/// Iterator extension for folding integers.
pub trait IntegerIterator<T>: Iterator<Item = T> + Sized {
    /// Greatest common divisor of every item. `None` for an empty iterator.
    fn gcd_all(self) -> Option<T>;

    /// Least common multiple of every item. `None` for an empty iterator.
    fn lcm_all(self) -> Option<T>;

    /// Least common multiple of every item, or `None` on overflow. An empty iterator yields `1`.
    fn checked_lcm_all(self) -> Option<T>;

    /// Multiply every item, or `None` on overflow. An empty iterator yields `1`.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> IntegerIterator<T> for I
where
    T: Integer + CheckedMul + CheckedSub + Copy,
    I: Iterator<Item = T>,
{
    fn gcd_all(self) -> Option<T> {
        self.reduce(|acc, value| acc.gcd(&value))
    }

    fn lcm_all(self) -> Option<T> {
        self.reduce(|acc, value| acc.lcm(&value))
    }

    fn checked_lcm_all(mut self) -> Option<T> {
        self.try_fold(T::one(), checked_lcm)
    }

    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |acc, value| acc.checked_mul(&value))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn gcd_and_lcm_of_pairs() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(lcm(4_i64, 6), 12);
        assert_eq!(lcm(0, 6), 0);
    }

    #[test]
    fn folds_over_iterators() {
        assert_eq!([12, 18, 30].into_iter().gcd_all(), Some(6));
        assert_eq!([2_u64, 3, 4, 5].into_iter().lcm_all(), Some(60));
        assert_eq!(Vec::<i32>::new().into_iter().gcd_all(), None);
        assert_eq!(
            [4_u64, 6, 10, 1_000_000_007].into_iter().checked_lcm_all(),
            Some(60_000_000_420)
        );
    }

    #[test]
    fn checked_lcm_detects_overflow() {
        assert_eq!(checked_lcm(200_u8, 3), None);
        assert_eq!(checked_lcm(-4_i8, 6), Some(12));
        assert_eq!([250_u8, 7].into_iter().checked_lcm_all(), None);
    }

    #[test]
    fn checked_product_stops_at_overflow() {
        assert_eq!([3_u16, 7, 11].into_iter().checked_product(), Some(231));
        assert_eq!(std::iter::empty::<i32>().checked_product(), Some(1));
        assert_eq!([16_u8, 16, 0].into_iter().checked_product(), None);
        assert_eq!([-2_i8, 64].into_iter().checked_product(), Some(i8::MIN));
        assert_eq!([-2_i8, -64].into_iter().checked_product(), None);
        assert_eq!([i64::MIN, -1].into_iter().checked_product(), None);
    }

    proptest! {
        #[test]
        fn gcd_times_lcm_is_product(a in 1_i64..10_000, b in 1_i64..10_000) {
            prop_assert_eq!(gcd(a, b) * lcm(a, b), a * b);
        }

        #[test]
        fn gcd_divides_every_item(values in prop::collection::vec(1_u32..1_000_000, 1..8)) {
            let divisor = values.iter().copied().gcd_all().unwrap_or(0);
            prop_assert!(values.iter().all(|value| value % divisor == 0));
        }
    }
}
