//! Solutions registered for Advent of Code 2025.
//!
//! To add a day:
//! 1. Add a `dayNN` submodule implementing [`AdventOfCode2025<NN>`] as a
//!    [`SolutionRunner`](aoc_framework::runner::SolutionRunner),
//!    usually with [`#[solution_runner]`][aoc_framework::runner::solution_runner]:
//!
//! ```ignore
//! // in "day01.rs"
//! use aoc_framework::runner::solution_runner;
//!
//! #[solution_runner(day = 1, part_one = Day01, part_two = Day01)]
//! impl super::AdventOfCode2025<1> {}
//! ```
//!
//! 2. Declare the module and add its runner to [`SOLUTIONS`]:
//!
//! ```ignore
//! (1, AdventOfCode2025::<1>::run),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::OutputHandler;
use thiserror::Error;

/// The first and last day of the event.
pub const DAYS: std::ops::RangeInclusive<u8> = 1..=12;

/// The solutions, keyed by day.
///
/// Each day module implements [`SolutionRunner`](aoc_framework::runner::SolutionRunner) for this
/// type at its day.
#[expect(dead_code, reason = "days implement runners on it as they are added")]
pub struct AdventOfCode2025<const DAY: u8>;

type RunFn = fn(&str, &mut dyn OutputHandler, bool) -> DynamicResult<()>;

/// Runners by day, in any order.
const SOLUTIONS: &[(u8, RunFn)] = &[];

/// A solution for a day is not available.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(pub u8);

fn find_solution(day: u8) -> Option<RunFn> {
    SOLUTIONS
        .iter()
        .find(|&&(solution_day, _)| solution_day == day)
        .map(|&(_, run)| run)
}

/// Run the solution for a day.
///
/// # Errors
///
/// Returns [`DayNotAvailable`] if no solution is registered for `day`, otherwise any error from
/// running the solution.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    let run = find_solution(day).ok_or(DayNotAvailable(day))?;
    log::debug!("running day {day} on {} lines of input", input.lines().count());
    run(input, handler, timed)
}
