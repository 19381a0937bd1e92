use std::str::FromStr;

use chrono::TimeDelta;

use crate::{
    duration::parse_duration,
    error::{FormatError, InvalidValue, TrackerError},
};

const SEPARATOR: char = ',';

/// Daily step package, `"<steps>,<duration>"` (e.g. `"6000,1h30m"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPackage {
    pub steps: i64,
    pub duration: TimeDelta,
}

/// Training package, `"<steps>,<training type>,<duration>"`
/// (e.g. `"7500,Running,1h15m"`).
///
/// The training type is kept as written; it is only recognized when the
/// calories are dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingPackage {
    pub steps: i64,
    pub training_type: String,
    pub duration: TimeDelta,
}

fn split_fields<const N: usize>(data: &str) -> Result<[&str; N], TrackerError> {
    let parts = data.split(SEPARATOR).collect::<Vec<_>>();
    let found = parts.len();
    parts
        .try_into()
        .map_err(|_| FormatError::FieldCount { expected: N, found }.into())
}

fn parse_steps(field: &str) -> Result<i64, TrackerError> {
    let steps = field
        .parse::<i64>()
        .map_err(|source| FormatError::Steps {
            input: field.to_string(),
            source,
        })?;

    if steps <= 0 {
        return Err(InvalidValue::Steps.into());
    }
    Ok(steps)
}

fn parse_positive_duration(field: &str) -> Result<TimeDelta, TrackerError> {
    let duration = parse_duration(field).map_err(|source| FormatError::Duration {
        input: field.to_string(),
        source,
    })?;

    if duration <= TimeDelta::zero() {
        return Err(InvalidValue::Duration.into());
    }
    Ok(duration)
}

impl FromStr for DayPackage {
    type Err = TrackerError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let [steps, duration] = split_fields::<2>(data)?;
        let steps = parse_steps(steps)?;
        let duration = parse_positive_duration(duration)?;

        Ok(Self { steps, duration })
    }
}

impl FromStr for TrainingPackage {
    type Err = TrackerError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let [steps, training_type, duration] = split_fields::<3>(data)?;
        let steps = parse_steps(steps)?;
        let duration = parse_positive_duration(duration)?;

        Ok(Self {
            steps,
            training_type: training_type.to_string(),
            duration,
        })
    }
}
