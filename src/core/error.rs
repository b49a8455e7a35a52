//! Error types for the parity arbitrage scanner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArbError {
    #[error("Column length mismatch: {column} has {found} rows, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Parse error at line {line}, column {column}: {value:?}")]
    Parse {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Data error: {0}")]
    Data(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type ArbResult<T> = Result<T, ArbError>;

impl ArbError {
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
