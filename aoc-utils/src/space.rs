//! Integer points in 3D and 4D space, built on [`nalgebra`] points.

use nalgebra::{Point, Point3, Scalar};
use num_traits::{PrimInt, Signed};

use crate::coordinate::ParseCoordinateError;
use crate::direction::Direction3;

/// Distance measures for points with signed integer components.
pub trait IntegerPoint {
    type Component;

    /// Sum of absolute component differences.
    fn manhattan_distance(&self, other: &Self) -> Self::Component;

    /// Manhattan distance to the origin.
    fn manhattan_norm(&self) -> Self::Component;

    /// Exact squared Euclidean distance.
    fn distance_squared(&self, other: &Self) -> Self::Component;
}

impl<T, const D: usize> IntegerPoint for Point<T, D>
where
    T: Scalar + PrimInt + Signed,
{
    type Component = T;

    fn manhattan_distance(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |sum, (&a, &b)| sum + (a - b).abs())
    }

    fn manhattan_norm(&self) -> T {
        self.coords
            .iter()
            .fold(T::zero(), |sum, &component| sum + component.abs())
    }

    fn distance_squared(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |sum, (&a, &b)| sum + (a - b) * (a - b))
    }
}

/// Move a 3D point one step in `direction`.
#[must_use]
pub fn step3<T>(point: Point3<T>, direction: Direction3) -> Point3<T>
where
    T: Scalar + PrimInt + Signed,
{
    let unit = |offset: i32| match offset.signum() {
        1 => T::one(),
        -1 => -T::one(),
        _ => T::zero(),
    };
    let (dx, dy, dz) = direction.offset();
    Point3::new(point.x + unit(dx), point.y + unit(dy), point.z + unit(dz))
}

/// Parse comma separated integer components, like `1,-2,3`, into a point of dimension `D`.
///
/// # Errors
///
/// Returns a [`ParseCoordinateError`] if the component count is not `D` or a component is not an
/// integer.
pub fn parse_point<T, const D: usize>(s: &str) -> Result<Point<T, D>, ParseCoordinateError>
where
    T: Scalar + PrimInt + Signed,
{
    let components = s
        .split(',')
        .map(|component| {
            let component = component.trim();
            T::from_str_radix(component, 10)
                .map_err(|_| ParseCoordinateError::InvalidComponent(component.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if components.len() != D {
        return Err(ParseCoordinateError::ComponentCount {
            expected: D,
            found: components.len(),
        });
    }
    Ok(Point::from_slice(&components))
}

#[cfg(test)]
mod tests {
    use nalgebra::Point4;

    use super::*;

    #[test]
    fn distances_in_three_dimensions() {
        let a = Point3::new(1, -2, 3);
        let b = Point3::new(-1, 2, 3);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(a.manhattan_norm(), 6);
        assert_eq!(a.distance_squared(&b), 4 + 16);
    }

    #[test]
    fn distances_in_four_dimensions() {
        let a = Point4::new(0_i64, 0, 0, 0);
        let b = Point4::new(3_i64, -3, 1, -1);
        assert_eq!(a.manhattan_distance(&b), 8);
        assert_eq!(b.distance_squared(&a), 20);
    }

    #[test]
    fn steps_along_axes() {
        let origin = Point3::new(0, 0, 0);
        assert_eq!(step3(origin, Direction3::Up), Point3::new(0, 0, 1));
        assert_eq!(step3(origin, Direction3::North), Point3::new(0, -1, 0));
        let round_trip = Direction3::ALL
            .into_iter()
            .fold(origin, |point, direction| step3(point, direction));
        assert_eq!(round_trip, origin);
    }

    #[test]
    fn parses_points() -> Result<(), ParseCoordinateError> {
        let point: Point3<i32> = parse_point("162,817, -812")?;
        assert_eq!(point, Point3::new(162, 817, -812));

        assert_eq!(
            parse_point::<i32, 3>("1,2"),
            Err(ParseCoordinateError::ComponentCount {
                expected: 3,
                found: 2
            })
        );
        assert!(parse_point::<i64, 4>("1,2,3,four").is_err());
        Ok(())
    }
}
