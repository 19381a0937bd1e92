use std::sync::{Mutex, PoisonError};

use tracker_codec::TrackerError;

/// Side channel that receives every failed report.
///
/// Recording is fire-and-forget: implementations must not panic and have no
/// way to fail the calculation that produced the error.
pub trait ErrorSink {
    fn record(&self, error: &TrackerError);
}

/// Forwards errors to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn record(&self, error: &TrackerError) {
        error!("{}", error);
    }
}

/// Keeps errors in memory, mostly useful in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    errors: Mutex<Vec<TrackerError>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<TrackerError> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl ErrorSink for MemorySink {
    fn record(&self, error: &TrackerError) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.clone());
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &S {
    fn record(&self, error: &TrackerError) {
        (**self).record(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};
    use tracker_codec::InvalidValue;

    #[test]
    fn memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.record(&InvalidValue::Steps.into());
        sink.record(&TrackerError::UnknownActivity("Yoga".to_string()));

        assert_eq!(
            sink.errors(),
            vec![
                TrackerError::InvalidValue(InvalidValue::Steps),
                TrackerError::UnknownActivity("Yoga".to_string()),
            ]
        );
    }

    #[test]
    fn memory_sink_survives_poisoning() {
        let sink = Arc::new(MemorySink::new());
        let poisoner = Arc::clone(&sink);
        let _ = thread::spawn(move || {
            let _guard = poisoner.errors.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        sink.record(&InvalidValue::Weight.into());
        assert_eq!(sink.errors(), vec![TrackerError::from(InvalidValue::Weight)]);
    }

    #[test]
    fn log_sink_does_not_panic() {
        let _ = env_logger::builder().is_test(true).try_init();
        LogSink.record(&InvalidValue::Duration.into());
    }

    #[test]
    fn references_are_sinks() {
        fn record_twice(sink: impl ErrorSink) {
            sink.record(&InvalidValue::Height.into());
            sink.record(&InvalidValue::Height.into());
        }

        let sink = MemorySink::new();
        record_twice(&sink);
        assert_eq!(sink.errors().len(), 2);
    }
}
