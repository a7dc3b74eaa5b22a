//! Running solutions and reporting their progress.
//!
//! A runner names the solution, parses the input if the solution asks for it, then solves each
//! part in order. Every step is reported to an [`OutputHandler`], optionally with its duration.
//! The first error aborts the run.
//!
//! Runners are usually generated with the [`#[solution_runner]`][solution_runner] attribute:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! #[solution_runner(day = 1, part_one = Day01)]
//! struct Day01Runner;
//!
//! // or on an impl block, with an explicit name
//!
//! #[solution_runner(name = "Secret Entrance", part_one = Day01)]
//! impl Day01 {}
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

pub use aoc_framework_macros::solution_runner;

/// Receives the events of a run, in order:
///
/// 1. [`solution_name`](Self::solution_name)
/// 2. [`parse_start`](Self::parse_start) and [`parse_end`](Self::parse_end), only for solutions
///    with a [`ParseData`] input
/// 3. [`part_start`](Self::part_start) and [`part_output`](Self::part_output) for part one, then
///    for part two if the solution has one
///
/// Durations are `Some` only for timed runs.
pub trait OutputHandler {
    fn solution_name(&mut self, name: &str);

    fn parse_start(&mut self) {}

    fn parse_end(&mut self, duration: Option<Duration>);

    fn part_start(&mut self, part: PartKind);

    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration: Option<Duration>);
}

/// Times steps of a run when enabled.
#[derive(Debug, Clone, Copy)]
struct Stopwatch {
    enabled: bool,
}

impl Stopwatch {
    fn measure<T>(self, step: impl FnOnce() -> T) -> (T, Option<Duration>) {
        if !self.enabled {
            return (step(), None);
        }
        let start = Instant::now();
        let result = step();
        (result, Some(start.elapsed()))
    }
}

/// One run of a solution, reporting to a handler.
struct Session<'h> {
    handler: &'h mut dyn OutputHandler,
    stopwatch: Stopwatch,
}

impl<'h> Session<'h> {
    fn start(name: &str, handler: &'h mut dyn OutputHandler, timed: bool) -> Self {
        log::trace!("running {name} (timed: {timed})");
        handler.solution_name(name);
        Self {
            handler,
            stopwatch: Stopwatch { enabled: timed },
        }
    }

    fn parse<D: ParseData>(&mut self, input: &str) -> DynamicResult<D> {
        self.handler.parse_start();
        let (parsed, duration) = self.stopwatch.measure(|| D::parse(input));
        let parsed = parsed?;
        log::trace!("parsed {} bytes of input", input.len());
        self.handler.parse_end(duration);
        Ok(parsed)
    }

    fn part<P, S>(&mut self, input: &S::Input) -> DynamicResult<()>
    where
        P: Part,
        S: Solution<P>,
    {
        let part = P::kind();
        self.handler.part_start(part);
        let (output, duration) = self.stopwatch.measure(|| S::solve(input));
        let output = output?;
        log::trace!("{part} solved in {duration:?}");
        self.handler.part_output(part, &output, duration);
        Ok(())
    }
}

/// Run part one of a solution on the raw input.
///
/// # Errors
///
/// The error of the part, if it fails.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    Session::start(name, handler, timed).part::<PartOne, S1>(input)
}

/// Run both parts of a solution on the raw input.
///
/// # Errors
///
/// The error of the first failing part. Part two does not run if part one fails.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    let mut session = Session::start(name, handler, timed);
    session.part::<PartOne, S1>(input)?;
    session.part::<PartTwo, S2>(input)
}

/// Parse the input, then run part one on the parsed value.
///
/// # Errors
///
/// The parse error, or the error of the part.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    let mut session = Session::start(name, handler, timed);
    let parsed = session.parse::<D>(input)?;
    session.part::<PartOne, S1>(&parsed)
}

/// Parse the input once, then run both parts on the parsed value.
///
/// # Errors
///
/// The parse error, or the error of the first failing part.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    let mut session = Session::start(name, handler, timed);
    let parsed = session.parse::<D>(input)?;
    session.part::<PartOne, S1>(&parsed)?;
    session.part::<PartTwo, S2>(&parsed)
}

/// A solution that can be run end to end, usually implemented with [`solution_runner`].
pub trait SolutionRunner {
    /// Run the solution on `input`, reporting to `handler` and timing each step if `timed`.
    ///
    /// # Errors
    ///
    /// The first error from parsing or solving.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use std::num::ParseIntError;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        timed_steps: usize,
    }

    impl Recorder {
        fn record_duration(&mut self, duration: Option<Duration>) {
            if duration.is_some() {
                self.timed_steps += 1;
            }
        }
    }

    impl OutputHandler for Recorder {
        fn solution_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse start".to_string());
        }

        fn parse_end(&mut self, duration: Option<Duration>) {
            self.record_duration(duration);
            self.events.push("parse end".to_string());
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("{part} start"));
        }

        fn part_output(&mut self, part: PartKind, output: &dyn Display, duration: Option<Duration>) {
            self.record_duration(duration);
            self.events.push(format!("{part} = {output}"));
        }
    }

    struct Numbers(Vec<i64>);

    impl ParseData for Numbers {
        fn parse(input: &str) -> DynamicResult<Self> {
            let numbers = input
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<_, ParseIntError>>()?;
            Ok(Self(numbers))
        }
    }

    struct Sum;

    impl Solution<PartOne> for Sum {
        type Input = Numbers;
        type Output = i64;

        fn solve(input: &Numbers) -> DynamicResult<i64> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for Sum {
        type Input = Numbers;
        type Output = i64;

        fn solve(input: &Numbers) -> DynamicResult<i64> {
            input
                .0
                .iter()
                .max()
                .copied()
                .ok_or_else(|| "no numbers".into())
        }
    }

    struct LineCount;

    impl Solution<PartOne> for LineCount {
        type Input = str;
        type Output = usize;

        fn solve(input: &str) -> DynamicResult<usize> {
            Ok(input.lines().count())
        }
    }

    impl Solution<PartTwo> for LineCount {
        type Input = str;
        type Output = String;

        fn solve(_input: &str) -> DynamicResult<String> {
            Err("part two is unsolved".into())
        }
    }

    #[solution_runner(day = 4, parsed = Numbers, part_one = Sum, part_two = Sum)]
    struct ParsedRunner;

    const LINES: &str = "Lines";

    #[solution_runner(name = LINES, part_one = LineCount)]
    struct HalfRunner;

    #[solution_runner(name = "Failing", part_one = LineCount, part_two = LineCount)]
    impl LineCount {}

    #[test]
    fn parsed_solution_events() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        ParsedRunner::run("3 -1 4", &mut recorder, false)?;
        assert_eq!(
            recorder.events,
            [
                "name Day 4",
                "parse start",
                "parse end",
                "Part 1 start",
                "Part 1 = 6",
                "Part 2 start",
                "Part 2 = 4",
            ]
        );
        assert_eq!(recorder.timed_steps, 0);
        Ok(())
    }

    #[test]
    fn timed_run_reports_durations() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        ParsedRunner::run("1 2", &mut recorder, true)?;
        assert_eq!(recorder.timed_steps, 3);
        Ok(())
    }

    #[test]
    fn unparsed_half_solution_events() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        HalfRunner::run("a\nb\nc", &mut recorder, false)?;
        assert_eq!(recorder.events, ["name Lines", "Part 1 start", "Part 1 = 3"]);
        Ok(())
    }

    #[test]
    fn parse_error_stops_run() {
        let mut recorder = Recorder::default();
        let result = ParsedRunner::run("1 two", &mut recorder, false);
        assert!(result.is_err());
        assert_eq!(recorder.events, ["name Day 4", "parse start"]);
    }

    #[test]
    fn part_error_is_propagated() {
        let mut recorder = Recorder::default();
        let error = LineCount::run("x", &mut recorder, false).err();
        assert_eq!(
            error.map(|error| error.to_string()).as_deref(),
            Some("part two is unsolved")
        );
        assert_eq!(
            recorder.events,
            ["name Failing", "Part 1 start", "Part 1 = 1", "Part 2 start"]
        );
    }
}
