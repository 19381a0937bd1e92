use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracker_codec::{InvalidValue, TrackerError};

use crate::{
    constants::{MIN_IN_H, WALKING_CALORIES_COEFFICIENT},
    distance::mean_speed,
    helpers::time_math::FractionalTime,
};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum TrainingType {
    #[serde(rename = "Running")]
    Running,
    #[serde(rename = "Walking")]
    Walking,
}

impl TrainingType {
    /// Recognizes a label as written in a training package. Case-sensitive.
    pub fn from_label(label: &str) -> Result<Self, TrackerError> {
        Self::from_str(label).map_err(|_| TrackerError::UnknownActivity(label.to_string()))
    }

    pub fn spent_calories(
        self,
        steps: i64,
        weight: f64,
        height: f64,
        duration: TimeDelta,
    ) -> Result<f64, TrackerError> {
        match self {
            TrainingType::Running => running_spent_calories(steps, weight, height, duration),
            TrainingType::Walking => walking_spent_calories(steps, weight, height, duration),
        }
    }
}

// NaN fails this as well as zero and negatives
fn positive(value: f64) -> bool {
    value > 0.0
}

fn check_inputs(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, InvalidValue> {
    if steps <= 0 {
        return Err(InvalidValue::Steps);
    }
    if !positive(weight) {
        return Err(InvalidValue::Weight);
    }
    if !positive(height) {
        return Err(InvalidValue::Height);
    }
    if duration <= TimeDelta::zero() {
        return Err(InvalidValue::Duration);
    }

    let speed = mean_speed(steps, height, duration);
    if !positive(speed) {
        return Err(InvalidValue::MeanSpeed);
    }
    Ok(speed)
}

/// Calories burned while running: `weight * mean speed * minutes / 60`.
pub fn running_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    let speed = check_inputs(steps, weight, height, duration)?;
    Ok(weight * speed * duration.minutes_f64() / MIN_IN_H)
}

/// Calories burned while walking, half the running figure.
pub fn walking_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    running_spent_calories(steps, weight, height, duration)
        .map(|calories| calories * WALKING_CALORIES_COEFFICIENT)
}
