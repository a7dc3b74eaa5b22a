//! Traits for writing Advent of Code solutions and a runner to execute them.
//!
//! A solution implements [`Solution<PartOne>`] and optionally [`Solution<PartTwo>`]. Each part
//! either solves the raw input string or a value parsed once through [`ParseData`] and shared by
//! both parts. The [`runner`] module drives the parse and solve steps and reports each step to an
//! [`OutputHandler`](runner::OutputHandler).
//!
//! # Example
//!
//! ```
//! use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//!
//! struct Ranges(Vec<(u64, u64)>);
//!
//! impl ParseData for Ranges {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         input
//!             .trim()
//!             .split(',')
//!             .map(|range| -> DynamicResult<(u64, u64)> {
//!                 let (start, end) = range.split_once('-').ok_or("range without '-'")?;
//!                 Ok((start.parse()?, end.parse()?))
//!             })
//!             .collect::<DynamicResult<Vec<_>>>()
//!             .map(Ranges)
//!     }
//! }
//!
//! struct Day02;
//!
//! impl Solution<PartOne> for Day02 {
//!     type Input = Ranges;
//!     type Output = u64;
//!
//!     fn solve(input: &Ranges) -> DynamicResult<u64> {
//!         Ok(input.0.iter().map(|(start, end)| end - start + 1).sum())
//!     }
//! }
//!
//! impl Solution<PartTwo> for Day02 {
//!     type Input = Ranges;
//!     type Output = usize;
//!
//!     fn solve(input: &Ranges) -> DynamicResult<usize> {
//!         Ok(input.0.len())
//!     }
//! }
//! ```
//!
//! A part that needs no parsing sets `Input = str`:
//!
//! ```
//! use aoc_framework::{DynamicResult, PartOne, Solution};
//!
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().filter(|line| line.starts_with('L')).count())
//!     }
//! }
//! ```

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
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

// `#[solution_runner]` expands to `aoc_framework::` paths, including in this crate's tests
extern crate self as aoc_framework;

use std::error::Error;
use std::fmt::Display;

pub mod runner;

mod private {
    /// Seals [`Part`](super::Part) so the only parts are [`PartOne`](super::PartOne) and
    /// [`PartTwo`](super::PartTwo).
    pub trait Sealed {}
}

/// A boxed error from any source.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result carrying a [`DynamicError`].
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies one of the two parts of a puzzle at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    One,
    Two,
}

impl PartKind {
    /// The part number, `1` or `2`.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part {}", self.number())
    }
}

/// A type level marker for a puzzle part, used as the parameter of [`Solution<P>`].
pub trait Part: private::Sealed {
    /// The runtime identity of this part.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for the first part.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for the second part.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// Solves one [`Part`] of a puzzle.
pub trait Solution<P: Part> {
    /// What the part solves: `str` for the raw input, otherwise a [`ParseData`] type.
    ///
    /// Both parts of a solution run through the same runner share one parsed value, so they must
    /// agree on this type.
    type Input: ?Sized;

    /// The answer, printed with [`Display`].
    type Output: Display;

    /// Solve the part.
    ///
    /// # Errors
    ///
    /// Any error the solution hits, such as input it cannot handle.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Input that is parsed from the puzzle text before solving.
pub trait ParseData {
    /// Parse the puzzle text.
    ///
    /// # Errors
    ///
    /// Malformed input, as a boxed error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
