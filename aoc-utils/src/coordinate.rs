//! Integer coordinates on a 2D plane.
//!
//! A [`Coordinate`] uses screen orientation, matching [`Direction`]: `x` grows to the east and `y`
//! grows to the south. Grids index rows by `y` and columns by `x`.

use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{PrimInt, Signed};
use thiserror::Error;

use crate::direction::{Axis, Direction};

/// A 2D integer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate<T = i32> {
    pub x: T,
    pub y: T,
}

/// A [`Coordinate`] with 64-bit components, for puzzles whose values overflow `i32`.
pub type LongCoordinate = Coordinate<i64>;

/// Rotating a coordinate was requested with degrees that are not a multiple of 90.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("degrees {0} is not a multiple of 90")]
pub struct RotationError(pub i32);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordinateError {
    #[error("expected {expected} comma separated components, but found {found}")]
    ComponentCount { expected: usize, found: usize },

    #[error("invalid coordinate component: {0:?}")]
    InvalidComponent(String),
}

/// Convert a unit offset (`-1`, `0` or `1`) into the component type.
fn unit<T: PrimInt + Signed>(offset: i32) -> T {
    match offset.signum() {
        1 => T::one(),
        -1 => -T::one(),
        _ => T::zero(),
    }
}

impl<T> Coordinate<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: PrimInt + Signed> Coordinate<T> {
    #[must_use]
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Move one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        self + direction
    }

    /// Move `count` steps in `direction`.
    #[must_use]
    pub fn step_by(self, direction: Direction, count: T) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + unit::<T>(dx) * count, self.y + unit::<T>(dy) * count)
    }

    /// The coordinate at `(x, y - 1)`.
    #[must_use]
    pub fn up(self) -> Self {
        self.step(Direction::North)
    }

    /// The coordinate at `(x, y + 1)`.
    #[must_use]
    pub fn down(self) -> Self {
        self.step(Direction::South)
    }

    /// The coordinate at `(x - 1, y)`.
    #[must_use]
    pub fn left(self) -> Self {
        self.step(Direction::West)
    }

    /// The coordinate at `(x + 1, y)`.
    #[must_use]
    pub fn right(self) -> Self {
        self.step(Direction::East)
    }

    #[must_use]
    pub fn swap_xy(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Rotate around the origin, clockwise on screen, by a multiple of 90 degrees. Negative values
    /// rotate counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns a [`RotationError`] if `degrees` is not a multiple of 90.
    pub fn rotate90(self, degrees: i32) -> Result<Self, RotationError> {
        match degrees.rem_euclid(360) {
            0 => Ok(self),
            90 => Ok(Self::new(-self.y, self.x)),
            180 => Ok(Self::new(-self.x, -self.y)),
            270 => Ok(Self::new(self.y, -self.x)),
            _ => Err(RotationError(degrees)),
        }
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Manhattan distance to the origin.
    #[must_use]
    pub fn distance_to_origin(self) -> T {
        self.x.abs() + self.y.abs()
    }

    /// Find the direction that steps from this coordinate to `other`, if they are adjacent
    /// (including diagonally).
    #[must_use]
    pub fn relative(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == other)
    }

    /// The component along `axis`.
    #[must_use]
    pub fn axis(self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Component-wise Euclidean modulo, so every component ends up non-negative.
    #[must_use]
    pub fn rem_euclid(self, modulus: Self) -> Self {
        let rem = |value: T, m: T| {
            let r = value % m;
            if r < T::zero() { r + m.abs() } else { r }
        };
        Self::new(rem(self.x, modulus.x), rem(self.y, modulus.y))
    }

    /// Iterate every coordinate in the rectangle spanned by this coordinate and `other`,
    /// inclusive, row by row.
    pub fn between_inclusive(self, other: Self) -> impl Iterator<Item = Self> {
        let (min_x, max_x) = (self.x.min(other.x), self.x.max(other.x));
        let (min_y, max_y) = (self.y.min(other.y), self.y.max(other.y));

        let mut next = Some(Self::new(min_x, min_y));
        std::iter::from_fn(move || {
            let current = next?;
            next = if current.x < max_x {
                Some(Self::new(current.x + T::one(), current.y))
            } else if current.y < max_y {
                Some(Self::new(min_x, current.y + T::one()))
            } else {
                None
            };
            Some(current)
        })
    }
}

impl<T: PrimInt + Signed> Add for Coordinate<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: PrimInt + Signed> Sub for Coordinate<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise product.
impl<T: PrimInt + Signed> Mul for Coordinate<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Component-wise truncating division.
impl<T: PrimInt + Signed> Div for Coordinate<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Component-wise remainder, keeping the sign of the dividend. See [`Coordinate::rem_euclid`].
impl<T: PrimInt + Signed> Rem for Coordinate<T> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Self::new(self.x % rhs.x, self.y % rhs.y)
    }
}

impl<T: PrimInt + Signed> Neg for Coordinate<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<T: PrimInt + Signed> Add<Direction> for Coordinate<T> {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self::Output {
        let (dx, dy) = rhs.offset();
        Self::new(self.x + unit(dx), self.y + unit(dy))
    }
}

impl<T: PrimInt + Signed> Sub<Direction> for Coordinate<T> {
    type Output = Self;

    fn sub(self, rhs: Direction) -> Self::Output {
        let (dx, dy) = rhs.offset();
        Self::new(self.x - unit(dx), self.y - unit(dy))
    }
}

impl<T: PrimInt + Signed> AddAssign for Coordinate<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: PrimInt + Signed> SubAssign for Coordinate<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: PrimInt + Signed> AddAssign<Direction> for Coordinate<T> {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}

/// Scalar operators are implemented per component type, since a blanket `impl<T> Add<T>` would
/// overlap with `Add<Coordinate<T>>`.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for Coordinate<$t> {
                type Output = Self;

                fn add(self, rhs: $t) -> Self::Output {
                    Self::new(self.x + rhs, self.y + rhs)
                }
            }

            impl Sub<$t> for Coordinate<$t> {
                type Output = Self;

                fn sub(self, rhs: $t) -> Self::Output {
                    Self::new(self.x - rhs, self.y - rhs)
                }
            }

            impl Mul<$t> for Coordinate<$t> {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self::Output {
                    Self::new(self.x * rhs, self.y * rhs)
                }
            }

            impl Div<$t> for Coordinate<$t> {
                type Output = Self;

                fn div(self, rhs: $t) -> Self::Output {
                    Self::new(self.x / rhs, self.y / rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize);

impl<T> From<(T, T)> for Coordinate<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Coordinate<T>> for (T, T) {
    fn from(coordinate: Coordinate<T>) -> Self {
        (coordinate.x, coordinate.y)
    }
}

impl From<Coordinate<i32>> for LongCoordinate {
    fn from(coordinate: Coordinate<i32>) -> Self {
        Self::new(coordinate.x.into(), coordinate.y.into())
    }
}

impl<T: Copy> TryFrom<&[T]> for Coordinate<T> {
    type Error = ParseCoordinateError;

    fn try_from(components: &[T]) -> Result<Self, Self::Error> {
        match *components {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(ParseCoordinateError::ComponentCount {
                expected: 2,
                found: components.len(),
            }),
        }
    }
}

/// Parses the `x,y` format, allowing whitespace around each component.
impl<T: PrimInt + Signed> FromStr for Coordinate<T> {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s.split(',').collect::<Vec<_>>();
        let &[x_str, y_str] = components.as_slice() else {
            return Err(ParseCoordinateError::ComponentCount {
                expected: 2,
                found: components.len(),
            });
        };

        let parse = |component: &str| {
            let component = component.trim();
            T::from_str_radix(component, 10)
                .map_err(|_| ParseCoordinateError::InvalidComponent(component.to_string()))
        };
        Ok(Self::new(parse(x_str)?, parse(y_str)?))
    }
}

impl<T: Display> Display for Coordinate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
