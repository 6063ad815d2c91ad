//! Facade macros that capture the call site for you.
//!
//! ```
//! use cdf_logging::{EventId, LogLevel, Logger, log_at, log_enter, log_exit};
//!
//! fn reconcile(logger: &Logger) {
//!     log_enter!(logger, LogLevel::Trace);
//!     let err = std::io::Error::other("ledger locked");
//!     log_at!(logger, LogLevel::Warning, "ledger busy, retrying", cause = &err);
//!     log_at!(logger, LogLevel::Information, "reconciled", event = EventId::new(30));
//!     log_exit!(logger, LogLevel::Trace);
//! }
//!
//! reconcile(&Logger::inert());
//! ```

/// Logs `Entering '<function>'` at the given level.
#[macro_export]
macro_rules! log_enter {
    ($logger:expr, $level:expr) => {
        $logger.enter($level, $crate::call_site!())
    };
    ($logger:expr, $level:expr, event = $event:expr) => {
        $logger.enter_with_event($level, &$event, $crate::call_site!())
    };
}

/// Logs `Exiting '<function>'` at the given level.
#[macro_export]
macro_rules! log_exit {
    ($logger:expr, $level:expr) => {
        $logger.exit($level, $crate::call_site!())
    };
    ($logger:expr, $level:expr, event = $event:expr) => {
        $logger.exit_with_event($level, &$event, $crate::call_site!())
    };
}

/// Logs a message at the given level, optionally with a cause and an event id.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $message:expr) => {
        $logger.log($level, $message, $crate::call_site!())
    };
    ($logger:expr, $level:expr, $message:expr, cause = $cause:expr) => {
        $logger.log_with_cause($level, $message, $cause, $crate::call_site!())
    };
    ($logger:expr, $level:expr, $message:expr, event = $event:expr) => {
        $logger.log_with_event($level, &$event, $message, $crate::call_site!())
    };
    ($logger:expr, $level:expr, $message:expr, cause = $cause:expr, event = $event:expr) => {
        $logger.log_with_cause_and_event($level, &$event, $message, $cause, $crate::call_site!())
    };
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::record::PROPERTY_MEMBER_NAME;
    use crate::testing::RecordingSink;
    use crate::{EventId, LogLevel, Logger};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn macros_capture_the_calling_function() {
        let sink = Arc::new(RecordingSink::new(LogLevel::Trace));
        let logger = Logger::new("macros", sink.clone());

        log_enter!(logger, LogLevel::Trace);
        log_at!(logger, LogLevel::Information, "working", event = EventId::new(2));
        let err = std::io::Error::other("late");
        log_at!(logger, LogLevel::Error, "failed", cause = &err, event = EventId::new(3));
        log_exit!(logger, LogLevel::Trace, event = EventId::new(4));

        let entries = sink.entries();
        assert_eq!(entries.len(), 4);
        for entry in &entries {
            assert_eq!(
                entry.property(PROPERTY_MEMBER_NAME),
                Some(&json!("macros_capture_the_calling_function"))
            );
        }
        assert_eq!(entries[0].message, "Entering 'macros_capture_the_calling_function'");
        assert_eq!(entries[2].cause.as_deref(), Some("late"));
        assert_eq!(entries[3].event_id.id, 4);
    }

    #[test]
    fn macros_respect_the_gate() {
        let sink = Arc::new(RecordingSink::new(LogLevel::Critical));
        let logger = Logger::new("macros", sink.clone());

        log_enter!(logger, LogLevel::Trace);
        log_at!(logger, LogLevel::Error, "not important enough");
        assert_eq!(sink.emitted(), 0);
    }
}
