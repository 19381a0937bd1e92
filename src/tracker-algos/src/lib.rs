pub mod constants;

pub(crate) mod distance;
pub use distance::{day_distance, distance, mean_speed};

pub(crate) mod calories;
pub use calories::{TrainingType, running_spent_calories, walking_spent_calories};

pub mod helpers;
