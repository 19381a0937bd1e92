use chrono::TimeDelta;

use crate::{
    constants::{M_IN_KM, STEP_LENGTH, STEP_LENGTH_COEFFICIENT},
    helpers::time_math::FractionalTime,
};

/// Distance in km for a day of steps, using the fixed step length.
pub fn day_distance(steps: i64) -> f64 {
    steps as f64 * STEP_LENGTH / M_IN_KM
}

/// Distance in km with a step length derived from height.
pub fn distance(steps: i64, height: f64) -> f64 {
    let step_length = STEP_LENGTH_COEFFICIENT * height;
    steps as f64 * step_length / M_IN_KM
}

/// Mean speed in km/h. Zero when the duration is not positive.
pub fn mean_speed(steps: i64, height: f64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }
    distance(steps, height) / duration.hours_f64()
}
