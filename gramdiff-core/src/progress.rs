//! Progress Reporting
//!
//! The engine's only logging contract: a sink receiving human-readable
//! status strings at order boundaries and on completion or failure of
//! each order. The sink must not assume any particular UI or logging
//! backend.

/// Receiver for human-readable pipeline status messages.
pub trait ProgressSink: Send + Sync {
    fn status(&self, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn status(&self, message: &str) {
        self(message)
    }
}

/// Sink that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn status(&self, _message: &str) {}
}
