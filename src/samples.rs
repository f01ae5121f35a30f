//! Runs the solver over `X.in` sample files and compares with `X.out`.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::cost;
use crate::error::InputError;
use crate::input;

#[derive(Debug)]
pub enum Outcome {
    Passed,
    WrongAnswer { expected: String, actual: u64 },
    MissingExpected(PathBuf),
    Failed(InputError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "ok"),
            Outcome::WrongAnswer { expected, actual } => {
                write!(f, "wrong answer: expected {}, got {}", expected, actual)
            }
            Outcome::MissingExpected(path) => write!(f, "missing {}", path.display()),
            Outcome::Failed(err) => write!(f, "error: {}", err),
        }
    }
}

#[derive(Debug)]
pub struct CaseResult {
    pub input_path: PathBuf,
    pub outcome: Outcome,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
}

impl Report {
    pub fn from_results(results: &[CaseResult]) -> Self {
        let passed = results
            .iter()
            .filter(|result| match result.outcome {
                Outcome::Passed => true,
                _ => false,
            })
            .count();
        Report {
            passed,
            failed: results.len() - passed,
        }
    }

    /// At least one case ran and none failed.
    pub fn is_success(&self) -> bool {
        self.passed > 0 && self.failed == 0
    }
}

/// Expands the patterns into a sorted, deduplicated list of paths.
pub fn collect_cases(patterns: &[String]) -> Vec<PathBuf> {
    let mut paths = BTreeSet::new();

    for pattern in patterns {
        trace!("collecting {}", pattern);

        let entries = match glob(pattern) {
            Ok(entries) => entries,
            Err(err) => {
                error!("invalid pattern {:?}: {}", pattern, err);
                continue;
            }
        };

        for entry in entries {
            match entry {
                Ok(path) => {
                    paths.insert(path);
                }
                Err(err) => warn!("{}", err),
            }
        }
    }

    paths.into_iter().collect()
}

pub fn run_case(input_path: &Path) -> Outcome {
    let expected_path = input_path.with_extension("out");
    let expected = match fs::read_to_string(&expected_path) {
        Ok(text) => text.trim().to_owned(),
        Err(err) => {
            warn!("{}: {}", expected_path.display(), err);
            return Outcome::MissingExpected(expected_path);
        }
    };

    let actual = match input::read_file(input_path).and_then(|checkpoints| cost::total_cost(&checkpoints)) {
        Ok(total) => total,
        Err(err) => return Outcome::Failed(err),
    };

    if expected == actual.to_string() {
        Outcome::Passed
    } else {
        Outcome::WrongAnswer { expected, actual }
    }
}

/// Runs every case the patterns match. A failing case doesn't stop the rest.
pub fn check(patterns: &[String]) -> Vec<CaseResult> {
    let cases = collect_cases(patterns);
    if cases.is_empty() {
        warn!("no sample matched {:?}", patterns);
    }

    cases
        .into_iter()
        .map(|input_path| {
            let outcome = run_case(&input_path);
            debug!("{}: {}", input_path.display(), outcome);
            CaseResult {
                input_path,
                outcome,
            }
        })
        .collect()
}
