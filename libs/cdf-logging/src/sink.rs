//! Seams to the outside world: where records go and who creates the sinks.

use std::error::Error;
use std::sync::Arc;

use crate::level::LogLevel;
use crate::record::{EventId, Formatter, LogRecord};

/// Receives the records of one logger and is responsible for making them
/// durable or visible.
///
/// Both methods are called synchronously from the logging call and may be
/// called from many threads at once.
pub trait LogSink: Send + Sync {
    /// Cheap check done before a record is built.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Consumes one record. The record and the cause are only borrowed for
    /// the duration of the call.
    fn emit(
        &self,
        level: LogLevel,
        event_id: &EventId,
        record: &LogRecord<'_>,
        cause: Option<&(dyn Error + 'static)>,
        formatter: Formatter,
    );
}

/// Creates the sink for each logger category.
pub trait LoggerFactory: Send + Sync {
    fn create_sink(&self, category: &str) -> Arc<dyn LogSink>;
}

impl<F> LoggerFactory for F
where
    F: Fn(&str) -> Arc<dyn LogSink> + Send + Sync,
{
    fn create_sink(&self, category: &str) -> Arc<dyn LogSink> {
        self(category)
    }
}
