//! Reads the three-line judge input into a validated record.
//!
//! ```text
//! N
//! distance[0] ... distance[N-1]
//! price[0] ... price[N-1]
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::InputError;

/// Distances and prices paired by position. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkpoints {
    distances: Vec<u64>,
    prices: Vec<u64>,
}

impl Checkpoints {
    pub fn new(distances: Vec<u64>, prices: Vec<u64>) -> Result<Self, InputError> {
        if distances.len() != prices.len() {
            return Err(InputError::LengthMismatch {
                line: PRICE_LINE,
                expected: distances.len(),
                found: prices.len(),
            });
        }

        if distances.is_empty() {
            return Err(InputError::Empty);
        }

        Ok(Checkpoints { distances, prices })
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn distances(&self) -> &[u64] {
        &self.distances
    }

    pub fn prices(&self) -> &[u64] {
        &self.prices
    }
}

const COUNT_LINE: usize = 1;
const DISTANCE_LINE: usize = 2;
const PRICE_LINE: usize = 3;

fn parse_count(line: &str) -> Result<usize, InputError> {
    let token = line.trim();
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::InvalidCount {
            token: token.to_owned(),
        }),
    }
}

fn parse_values(line_no: usize, line: &str, expected: usize) -> Result<Vec<u64>, InputError> {
    let values = line
        .split_whitespace()
        .map(|word| {
            word.parse::<u64>().map_err(|_| InputError::InvalidToken {
                line: line_no,
                token: word.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() != expected {
        return Err(InputError::LengthMismatch {
            line: line_no,
            expected,
            found: values.len(),
        });
    }

    Ok(values)
}

/// Parses the whole input text.
/// Trailing blank lines are accepted; anything else after the price line is not.
pub fn parse(text: &str) -> Result<Checkpoints, InputError> {
    let mut lines = text.lines();
    let mut next_line = |line: usize| lines.next().ok_or(InputError::MissingLine { line });

    let n = parse_count(next_line(COUNT_LINE)?)?;
    let distances = parse_values(DISTANCE_LINE, next_line(DISTANCE_LINE)?, n)?;
    let prices = parse_values(PRICE_LINE, next_line(PRICE_LINE)?, n)?;

    if let Some((i, _)) = lines
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty())
    {
        return Err(InputError::TrailingInput {
            line: PRICE_LINE + 1 + i,
        });
    }

    trace!("parsed {} checkpoints", n);
    Checkpoints::new(distances, prices)
}

/// Reads the stream to the end, then parses it.
pub fn read_from<R: Read>(mut reader: R) -> Result<Checkpoints, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

pub fn read_file(path: &Path) -> Result<Checkpoints, InputError> {
    trace!("read input from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse(&text)
}
