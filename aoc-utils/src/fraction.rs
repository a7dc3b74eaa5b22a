//! Exact rational numbers.

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_integer::Integer;
use num_traits::{One, Zero};
use thiserror::Error;

/// A rational number over `i64`.
///
/// Fractions are always kept in lowest terms with a positive denominator, so the derived equality
/// and hashing compare values. Arithmetic is computed with 128-bit intermediates and panics if the
/// reduced result does not fit in `i64`, like integer overflow in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    #[error("invalid fraction component: {0:?}")]
    InvalidComponent(String),

    #[error("fraction has a zero denominator")]
    ZeroDenominator,
}

impl Fraction {
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Create a fraction in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::checked_new(numerator, denominator).expect("fraction denominator must not be zero")
    }

    /// Create a fraction in lowest terms, or `None` if `denominator` is zero.
    #[must_use]
    pub fn checked_new(numerator: i64, denominator: i64) -> Option<Self> {
        (denominator != 0).then(|| Self::reduced(i128::from(numerator), i128::from(denominator)))
    }

    /// Reduce a wide numerator and non-zero denominator.
    fn reduced(numerator: i128, denominator: i128) -> Self {
        let divisor = numerator.gcd(&denominator) * denominator.signum();
        let narrow = |value: i128| i64::try_from(value / divisor).expect("fraction overflowed i64");
        Self {
            numerator: narrow(numerator),
            denominator: narrow(denominator),
        }
    }

    #[must_use]
    pub fn numerator(self) -> i64 {
        self.numerator
    }

    /// The denominator, always positive.
    #[must_use]
    pub fn denominator(self) -> i64 {
        self.denominator
    }

    #[must_use]
    pub fn is_integer(self) -> bool {
        self.denominator == 1
    }

    /// The multiplicative inverse, or `None` for zero.
    #[must_use]
    pub fn reciprocal(self) -> Option<Self> {
        Self::checked_new(self.denominator, self.numerator)
    }

    /// # Panics
    ///
    /// Panics for a numerator of `i64::MIN`, whose absolute value does not fit.
    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            numerator: self
                .numerator
                .checked_abs()
                .expect("fraction overflowed i64"),
            denominator: self.denominator,
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "approximation is the purpose of this conversion"
    )]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    fn wide(self) -> (i128, i128) {
        (i128::from(self.numerator), i128::from(self.denominator))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let ((a, b), (c, d)) = (self.wide(), rhs.wide());
        let denominator = b.lcm(&d);
        Self::reduced(a * (denominator / b) + c * (denominator / d), denominator)
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let ((a, b), (c, d)) = (self.wide(), rhs.wide());
        let denominator = b.lcm(&d);
        Self::reduced(a * (denominator / b) - c * (denominator / d), denominator)
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let ((a, b), (c, d)) = (self.wide(), rhs.wide());
        Self::reduced(a * c, b * d)
    }
}

/// # Panics
///
/// Panics when dividing by zero.
impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "attempt to divide a fraction by zero");
        let ((a, b), (c, d)) = (self.wide(), rhs.wide());
        Self::reduced(a * d, b * c)
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: self
                .numerator
                .checked_neg()
                .expect("fraction overflowed i64"),
            denominator: self.denominator,
        }
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross multiplying keeps the order
        let ((a, b), (c, d)) = (self.wide(), other.wide());
        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parses `n/d` or a plain integer `n`.
impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |component: &str| {
            let component = component.trim();
            component
                .parse::<i64>()
                .map_err(|_| ParseFractionError::InvalidComponent(component.to_string()))
        };

        let Some((numerator, denominator)) = s.split_once('/') else {
            return parse(s).map(Self::from);
        };
        Self::checked_new(parse(numerator)?, parse(denominator)?)
            .ok_or(ParseFractionError::ZeroDenominator)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn normalizes_sign_and_terms() {
        let fraction = Fraction::new(6, -8);
        assert_eq!(fraction.numerator(), -3);
        assert_eq!(fraction.denominator(), 4);
        assert_eq!(Fraction::new(0, -5), Fraction::ZERO);
        assert_eq!(Fraction::checked_new(1, 0), None);
    }

    #[test]
    fn arithmetic() {
        let half = Fraction::new(1, 2);
        let third = Fraction::new(1, 3);
        assert_eq!(half + third, Fraction::new(5, 6));
        assert_eq!(half - third, Fraction::new(1, 6));
        assert_eq!(half * third, Fraction::new(1, 6));
        assert_eq!(half / third, Fraction::new(3, 2));
        assert_eq!(-half, Fraction::new(-1, 2));
        assert_eq!(third.reciprocal(), Some(Fraction::from(3)));
        assert_eq!(Fraction::ZERO.reciprocal(), None);
        assert!((Fraction::new(-3, 4).to_f64() + 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn arithmetic_near_i64_bounds() {
        assert_eq!(
            Fraction::from(-1) - Fraction::from(i64::MIN),
            Fraction::from(i64::MAX)
        );
        assert_eq!(
            Fraction::new(1, 2) - Fraction::new(i64::MIN + 1, 2),
            Fraction::new(i64::MAX, 2) + Fraction::new(1, 2)
        );
        assert_eq!(
            Fraction::from(i64::MIN) / Fraction::from(-2),
            Fraction::from(1 << 62)
        );
        assert_eq!(Fraction::new(i64::MIN + 1, 3).abs(), Fraction::new(i64::MAX, 3));
    }

    #[test]
    #[should_panic(expected = "fraction overflowed i64")]
    fn negating_minimum_panics() {
        let _ = -Fraction::from(i64::MIN);
    }

    #[test]
    #[should_panic(expected = "divide a fraction by zero")]
    fn division_by_zero_panics() {
        let _ = Fraction::ONE / Fraction::ZERO;
    }

    #[test]
    fn orders_by_value() {
        let mut values = vec![
            Fraction::new(1, 2),
            Fraction::new(-1, 3),
            Fraction::new(2, 3),
            Fraction::from(0),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Fraction::new(-1, 3),
                Fraction::ZERO,
                Fraction::new(1, 2),
                Fraction::new(2, 3),
            ]
        );
    }

    #[test]
    fn parses_and_displays() -> Result<(), ParseFractionError> {
        assert_eq!("4/6".parse::<Fraction>()?, Fraction::new(2, 3));
        assert_eq!(" -7 ".parse::<Fraction>()?, Fraction::from(-7));
        assert_eq!(
            "1/0".parse::<Fraction>(),
            Err(ParseFractionError::ZeroDenominator)
        );
        assert!("x/2".parse::<Fraction>().is_err());
        assert_eq!(Fraction::new(10, 4).to_string(), "5/2");
        assert_eq!(Fraction::from(3).to_string(), "3/1");
        Ok(())
    }

    proptest! {
        #[test]
        fn always_in_lowest_terms(
            a in -1_000_i64..1_000,
            b in 1_i64..1_000,
            c in -1_000_i64..1_000,
            d in 1_i64..1_000,
        ) {
            let sum = Fraction::new(a, b) + Fraction::new(c, d);
            prop_assert!(sum.denominator() > 0);
            prop_assert_eq!(sum.numerator().gcd(&sum.denominator()), 1);
            prop_assert_eq!(sum - Fraction::new(c, d), Fraction::new(a, b));
        }
    }
}
