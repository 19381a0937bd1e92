use std::fmt::Display;

use serde::Serialize;
use tracker_algos::{day_distance, walking_spent_calories};
use tracker_codec::{DayPackage, TrackerError};

use crate::sink::{ErrorSink, LogSink};

/// Summary of a day of walking: steps, distance in km and calories burned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayStepsReport {
    pub steps: i64,
    pub distance: f64,
    pub calories: f64,
}

impl DayStepsReport {
    pub fn new(data: &str, weight: f64, height: f64) -> Result<Self, TrackerError> {
        let DayPackage { steps, duration } = data.parse()?;
        let calories = walking_spent_calories(steps, weight, height, duration)?;

        Ok(Self {
            steps,
            distance: day_distance(steps),
            calories,
        })
    }
}

impl Display for DayStepsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
            self.steps, self.distance, self.calories
        ))
    }
}

/// Builds the day report for `"<steps>,<duration>"`, logging failures.
///
/// Returns an empty string on any error; the cause only reaches the log.
pub fn generate_step_report(data: &str, weight: f64, height: f64) -> String {
    generate_step_report_with(&LogSink, data, weight, height)
}

/// Same as [`generate_step_report`], sending failures to `sink`.
pub fn generate_step_report_with<S: ErrorSink + ?Sized>(
    sink: &S,
    data: &str,
    weight: f64,
    height: f64,
) -> String {
    match DayStepsReport::new(data, weight, height) {
        Ok(report) => {
            debug!(
                "day report: {} steps, {:.2} km, {:.2} kcal",
                report.steps, report.distance, report.calories
            );
            report.to_string()
        }
        Err(error) => {
            sink.record(&error);
            String::new()
        }
    }
}
