//! Defines data structures of command line arguments.

pub const DEFAULT_SAMPLE_PATTERN: &str = "samples/*.in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Solve one input and print the total.
    Solve,
    /// Run the solver over sample files matched by the patterns.
    Check(Vec<String>),
}

#[derive(Debug)]
pub struct Config {
    pub input_path: Option<String>,
    pub mode: Mode,
}

impl Config {
    pub fn from_matches(gm: &clap::ArgMatches) -> Self {
        let mode = match gm.subcommand() {
            ("check", sm) => {
                let mut patterns = sm
                    .and_then(|sm| sm.values_of("pattern"))
                    .into_iter()
                    .flat_map(|patterns| patterns)
                    .map(|pattern| pattern.to_owned())
                    .collect::<Vec<_>>();
                if patterns.is_empty() {
                    trace!("no pattern given, using {}", DEFAULT_SAMPLE_PATTERN);
                    patterns.push(DEFAULT_SAMPLE_PATTERN.to_owned());
                }
                trace!("check {:?}", patterns);
                Mode::Check(patterns)
            }
            _ => Mode::Solve,
        };

        let input_path = gm.value_of("input").map(|s| s.to_owned());

        Config { input_path, mode }
    }
}
