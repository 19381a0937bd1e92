#[macro_use]
extern crate log;

mod sink;
pub use sink::{ErrorSink, LogSink, MemorySink};

mod day_steps;
pub use day_steps::{DayStepsReport, generate_step_report, generate_step_report_with};

mod training;
pub use training::{TrainingReport, generate_training_report, generate_training_report_with};

pub use tracker_algos::{TrainingType, running_spent_calories, walking_spent_calories};
pub use tracker_codec::{DurationError, FormatError, InvalidValue, TrackerError};
