use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid data format: {0}")]
    Format(#[from] FormatError),
    #[error("invalid value: {0}")]
    InvalidValue(#[from] InvalidValue),
    #[error("unknown training type: {0:?}")]
    UnknownActivity(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected {expected} fields, got {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid step count {input:?}: {source}")]
    Steps {
        input: String,
        source: ParseIntError,
    },
    #[error("invalid duration {input:?}: {source}")]
    Duration {
        input: String,
        source: DurationError,
    },
}

/// Positivity precondition that failed, reported in check order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidValue {
    #[error("step count must be greater than zero")]
    Steps,
    #[error("weight must be greater than zero")]
    Weight,
    #[error("height must be greater than zero")]
    Height,
    #[error("duration must be greater than zero")]
    Duration,
    #[error("mean speed must be greater than zero")]
    MeanSpeed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{self:?}")]
pub enum DurationError {
    Empty,
    InvalidNumber,
    MissingUnit,
    UnknownUnit(String),
    Overflow,
}
