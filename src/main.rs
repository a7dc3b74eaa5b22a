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
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::PartKind;
use aoc_framework::runner::OutputHandler;
use clap::{ArgAction, Parser, value_parser};

mod solutions;

/// Directory holding the default input files, one `dayNN.txt` per day.
const INPUT_DIR: &str = "aoc_input";

/// Advent of Code 2025 puzzle solver.
///
/// Set `RUST_LOG=debug` (or `trace`) to log what the runner and searches are doing.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// The day's solution to run, 1 through 12.
    #[arg(value_parser = value_parser!(u8).range(
        i64::from(*solutions::DAYS.start())..=i64::from(*solutions::DAYS.end())
    ))]
    day: u8,

    /// Sets an alternative input file to use over default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,
}

/// Read the input for a day: the given file, or `aoc_input/dayNN.txt` by default.
fn read_input(day: u8, input_file: Option<&Path>) -> Result<String> {
    if let Some(path) = input_file {
        return fs::read_to_string(path)
            .with_context(|| format!("could not read input file at: {}", path.display()));
    }

    let path = Path::new(INPUT_DIR).join(format!("day{day:02}.txt"));
    fs::read_to_string(&path).with_context(|| {
        format!(
            "default input file missing: {}\n\n\
            save the puzzle input there or pass --input <FILE>",
            path.display()
        )
    })
}

/// Format a duration with three decimals in the largest unit that keeps it at or above one.
fn format_duration(duration: Duration) -> String {
    const UNITS: [(Duration, f64, &str); 3] = [
        (Duration::from_secs(1), 1.0, "seconds"),
        (Duration::from_millis(1), 1e3, "milliseconds"),
        (Duration::from_micros(1), 1e6, "microseconds"),
    ];

    UNITS
        .iter()
        .find(|(unit, _, _)| duration >= *unit)
        .map_or_else(
            || format!("{} nanoseconds", duration.subsec_nanos()),
            |(_, scale, name)| format!("{:.3} {name}", duration.as_secs_f64() * scale),
        )
}

/// Prints run events to stdout.
struct ConsoleHandler {
    /// Durations shorter than this are not printed.
    min_duration: Duration,
}

impl ConsoleHandler {
    fn shown_duration(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|duration| *duration >= self.min_duration)
            .map(format_duration)
    }
}

impl OutputHandler for ConsoleHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_end(&mut self, duration: Option<Duration>) {
        if let Some(duration) = self.shown_duration(duration) {
            println!("Input parsed in {duration}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(&mut self, _part: PartKind, output: &dyn Display, duration: Option<Duration>) {
        match self.shown_duration(duration) {
            Some(duration) => println!("{output} ({duration})"),
            None => println!("{output}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    log::debug!("{args:?}");
    let input = read_input(args.day, args.input.as_deref())?;
    let mut handler = ConsoleHandler {
        min_duration: Duration::from_millis(args.min_timing_ms),
    };
    solutions::run_day(args.day, &input, &mut handler, args.timed)
        .map_err(|error| Error::from_boxed(error).context("failed to run solution"))
}
