use std::fmt::Display;

use serde::Serialize;
use tracker_algos::{TrainingType, distance, helpers::time_math::FractionalTime, mean_speed};
use tracker_codec::{TrackerError, TrainingPackage};

use crate::sink::{ErrorSink, LogSink};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainingReport {
    pub training_type: TrainingType,
    pub duration_hours: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl TrainingReport {
    /// Parses `"<steps>,<training type>,<duration>"` and computes the report.
    ///
    /// The label is only checked after steps and duration have been
    /// validated, so `"0,Swimming,1h"` reports the step count.
    pub fn new(data: &str, weight: f64, height: f64) -> Result<Self, TrackerError> {
        let TrainingPackage {
            steps,
            training_type,
            duration,
        } = data.parse()?;

        let training_type = TrainingType::from_label(&training_type)?;
        let calories = training_type.spent_calories(steps, weight, height, duration)?;

        Ok(Self {
            training_type,
            duration_hours: duration.hours_f64(),
            distance: distance(steps, height),
            speed: mean_speed(steps, height, duration),
            calories,
        })
    }
}

impl Display for TrainingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Training type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
            self.training_type, self.duration_hours, self.distance, self.speed, self.calories
        ))
    }
}

/// Builds the training report, logging and returning any failure.
pub fn generate_training_report(
    data: &str,
    weight: f64,
    height: f64,
) -> Result<String, TrackerError> {
    generate_training_report_with(&LogSink, data, weight, height)
}

pub fn generate_training_report_with<S: ErrorSink + ?Sized>(
    sink: &S,
    data: &str,
    weight: f64,
    height: f64,
) -> Result<String, TrackerError> {
    let report = TrainingReport::new(data, weight, height).inspect_err(|error| sink.record(error))?;
    debug!(
        "{} report: {:.2} km at {:.2} km/h, {:.2} kcal",
        report.training_type, report.distance, report.speed, report.calories
    );
    Ok(report.to_string())
}
