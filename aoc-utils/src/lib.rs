//! Shared helpers for Advent of Code solutions.
//!
//! - [`search`]: breadth/depth first search with dominance pruning, flood fill and memoized
//!   recursion over arbitrary states.
//! - [`grid`], [`coordinate`], [`direction`]: rectangular character grids addressed by 2D
//!   coordinates, with compass directions.
//! - [`space`]: integer distances on 3D/4D [`nalgebra`] points.
//! - [`math`], [`fraction`], [`linear_algebra`]: gcd/lcm, exact rationals and Gauss-Jordan
//!   elimination.
//! - [`range`], [`collections`], [`disjoint_set`], [`permutations`]: small containers and
//!   iterators.
#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

pub mod collections;
pub mod coordinate;
pub mod direction;
pub mod disjoint_set;
pub mod fraction;
pub mod grid;
pub mod linear_algebra;
pub mod math;
pub mod permutations;
pub mod range;
pub mod search;
pub mod space;

pub use coordinate::{Coordinate, LongCoordinate};
pub use direction::{Axis, Direction, Direction3};
pub use fraction::Fraction;
pub use grid::Grid;
pub use search::Traversal;
