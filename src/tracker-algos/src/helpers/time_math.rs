use chrono::TimeDelta;

const NANOS_PER_MINUTE: f64 = 60_000_000_000.0;

/// Fractional views of a duration, keeping sub-second precision.
pub trait FractionalTime {
    fn minutes_f64(&self) -> f64;

    fn hours_f64(&self) -> f64 {
        self.minutes_f64() / 60.0
    }
}

impl FractionalTime for TimeDelta {
    fn minutes_f64(&self) -> f64 {
        match self.num_nanoseconds() {
            Some(nanos) => nanos as f64 / NANOS_PER_MINUTE,
            // Beyond ~292 years nanoseconds overflow; whole seconds are plenty.
            None => self.num_seconds() as f64 / 60.0,
        }
    }
}

pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
