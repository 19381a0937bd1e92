mod error;
pub use error::{DurationError, FormatError, InvalidValue, TrackerError};

mod duration;
pub use duration::parse_duration;

mod package;
pub use package::{DayPackage, TrainingPackage};
