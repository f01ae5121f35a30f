#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate glob;
#[macro_use]
extern crate log;
extern crate thiserror;

mod config;
mod cost;
mod error;
mod input;
mod samples;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use crate::config::{Config, Mode};
use crate::error::InputError;

/// Builds CLI app metadata, especially command line arguments format.
fn app<'a, 'b>() -> clap::App<'a, 'b> {
    let settings = {
        use clap::AppSettings::*;
        [GlobalVersion]
    };
    clap::App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .settings(&settings)
        .arg(
            clap::Arg::with_name("input")
                .long("input")
                .takes_value(true)
                .number_of_values(1)
                .global(true)
                .help("Path to the problem input (defaults to stdin)"),
        )
        .subcommand(
            clap::SubCommand::with_name("check")
                .about("Solves X.in sample files and compares with X.out")
                .arg(
                    clap::Arg::with_name("pattern")
                        .takes_value(true)
                        .multiple(true)
                        .help("Glob patterns of sample inputs (defaults to samples/*.in)"),
                ),
        )
}

fn solve(config: &Config) -> Result<u64, InputError> {
    let checkpoints = match &config.input_path {
        Some(path) => input::read_file(Path::new(path))?,
        None => input::read_from(io::stdin())?,
    };
    cost::total_cost(&checkpoints)
}

fn write_total<W: Write>(out: &mut W, total: u64) -> io::Result<()> {
    writeln!(out, "{}", total)?;
    out.flush()
}

/// Writes the total on success. On failure only logs, leaving `out` untouched.
/// Returns the exit status.
fn emit_total<W: Write>(result: Result<u64, InputError>, out: &mut W) -> i32 {
    let total = match result {
        Ok(total) => total,
        Err(err) => {
            error!("{}", err);
            return 1;
        }
    };

    if let Err(err) = write_total(out, total) {
        error!("failed to write output: {}", err);
        return 1;
    }
    0
}

fn write_report<W: Write>(
    out: &mut W,
    results: &[samples::CaseResult],
) -> io::Result<samples::Report> {
    for result in results {
        writeln!(out, "{}: {}", result.input_path.display(), result.outcome)?;
    }

    let report = samples::Report::from_results(results);
    writeln!(out, "{} passed, {} failed", report.passed, report.failed)?;
    out.flush()?;
    Ok(report)
}

/// Returns the exit status.
fn emit_report<W: Write>(results: &[samples::CaseResult], out: &mut W) -> i32 {
    match write_report(out, results) {
        Ok(ref report) if report.is_success() => 0,
        Ok(_) => 1,
        Err(err) => {
            error!("failed to write report: {}", err);
            1
        }
    }
}

/// Returns the exit status.
fn run(config: &Config) -> i32 {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match &config.mode {
        Mode::Solve => emit_total(solve(config), &mut out),
        Mode::Check(patterns) => {
            if config.input_path.is_some() {
                warn!("--input is ignored by check");
            }

            let results = samples::check(patterns);
            emit_report(&results, &mut out)
        }
    }
}

fn main() {
    env_logger::init();

    let matches = app().get_matches();
    let config = Config::from_matches(&matches);
    debug!("{:?}", config);

    process::exit(run(&config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::samples::{CaseResult, Outcome};

    fn solve_text(text: &str) -> Result<u64, InputError> {
        input::parse(text).and_then(|checkpoints| cost::total_cost(&checkpoints))
    }

    /// Rejects every write, like a stdout whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_total_is_printed_with_newline() {
        let mut out = Vec::new();
        let status = emit_total(solve_text("3\n3 1 1\n5 1 2\n"), &mut out);
        assert_eq!(status, 0);
        assert_eq!(out, b"17\n");
    }

    #[test]
    fn test_bad_input_prints_nothing() {
        let mut out = Vec::new();
        let status = emit_total(solve_text("2\n5 x\n1 9\n"), &mut out);
        assert_eq!(status, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_solve_from_missing_file() {
        let config = Config {
            input_path: Some("/nonexistent/prefix-min-cost/case.in".to_owned()),
            mode: Mode::Solve,
        };
        let mut out = Vec::new();
        assert_eq!(emit_total(solve(&config), &mut out), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_closed_stdout_fails() {
        assert_eq!(emit_total(Ok(17), &mut ClosedPipe), 1);

        let results = vec![CaseResult {
            input_path: PathBuf::from("samples/1.in"),
            outcome: Outcome::Passed,
        }];
        assert_eq!(emit_report(&results, &mut ClosedPipe), 1);
    }

    #[test]
    fn test_report() {
        let results = vec![
            CaseResult {
                input_path: PathBuf::from("samples/1.in"),
                outcome: Outcome::Passed,
            },
            CaseResult {
                input_path: PathBuf::from("samples/2.in"),
                outcome: Outcome::WrongAnswer {
                    expected: "71".to_owned(),
                    actual: 70,
                },
            },
        ];

        let mut out = Vec::new();
        assert_eq!(emit_report(&results, &mut out), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "samples/1.in: ok\n\
             samples/2.in: wrong answer: expected 71, got 70\n\
             1 passed, 1 failed\n"
        );

        let mut out = Vec::new();
        assert_eq!(emit_report(&results[..1], &mut out), 0);
        assert!(String::from_utf8(out).unwrap().ends_with("1 passed, 0 failed\n"));

        let mut out = Vec::new();
        assert_eq!(emit_report(&[], &mut out), 1);
    }
}
