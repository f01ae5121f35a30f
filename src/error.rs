use std::io;

use thiserror::Error;

/// Anything that keeps the input from producing a total.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("line {line} is missing")]
    MissingLine { line: usize },

    #[error("no checkpoints given")]
    Empty,

    #[error("checkpoint count must be a positive integer, got {token:?}")]
    InvalidCount { token: String },

    #[error("line {line}: {token:?} is not a non-negative integer")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: expected {expected} values, found {found}")]
    LengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unexpected input after the price line")]
    TrailingInput { line: usize },

    #[error("total cost exceeds 64-bit range at checkpoint {checkpoint}")]
    Overflow { checkpoint: usize },
}
