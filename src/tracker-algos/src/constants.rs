/// Fixed step length in meters, used for daily step totals.
pub const STEP_LENGTH: f64 = 0.65;

/// Step length as a fraction of the walker's height.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;

pub const M_IN_KM: f64 = 1000.0;

pub const MIN_IN_H: f64 = 60.0;

/// Walking burns half of what running burns at the same mean speed.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;
