//! The logging facade.
//!
//! Every entry point runs Gate, Build, Emit in that order:
//!
//! - **Gate**: ask the sink whether the level is enabled. A disabled level, an
//!   inert logger or an empty message returns here, before the call site is
//!   resolved or anything is allocated.
//! - **Build**: create the [`LogRecord`] with `MemberName` and `LineNumber`.
//!   Enter and exit calls synthesize `Entering '<member>'` / `Exiting '<member>'`.
//! - **Emit**: pass record, event id, cause and [`format_record`] to the sink.
//!
//! The facade is the fixed cross-product of the six levels, four call shapes
//! (enter, exit, message, message with cause) and with or without an
//! [`EventId`]. The generic methods take the level as an argument; the
//! per-level methods (`trace_enter`, `warning_with_cause`, ...) fix it.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::callsite::CallSite;
use crate::level::LogLevel;
use crate::record::{EventId, LogRecord, format_record};
use crate::sink::LogSink;

/// Handle through which a consumer emits records.
///
/// Cloning is cheap. A logger without a sink is inert: every call on it
/// returns immediately.
#[derive(Clone)]
pub struct Logger {
    category: Arc<str>,
    sink: Option<Arc<dyn LogSink>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("inert", &self.sink.is_none())
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::inert()
    }
}

impl From<Option<Logger>> for Logger {
    /// An absent logger behaves like an inert one.
    fn from(logger: Option<Logger>) -> Self {
        logger.unwrap_or_default()
    }
}

impl Logger {
    #[must_use]
    pub fn new(category: impl Into<Arc<str>>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            category: category.into(),
            sink: Some(sink),
        }
    }

    /// A logger on which every call is a no-op.
    #[must_use]
    pub fn inert() -> Self {
        Self {
            category: Arc::from(""),
            sink: None,
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.sink.is_none()
    }

    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.gate(level).is_some()
    }

    fn gate(&self, level: LogLevel) -> Option<&dyn LogSink> {
        let sink = self.sink.as_deref()?;
        sink.is_enabled(level).then_some(sink)
    }

    pub fn enter(&self, level: LogLevel, site: CallSite) {
        self.enter_with_event(level, &EventId::NONE, site);
    }

    pub fn enter_with_event(&self, level: LogLevel, event_id: &EventId, site: CallSite) {
        let Some(sink) = self.gate(level) else {
            return;
        };
        let record = LogRecord::new(format!("Entering '{}'", site.member()), &site);
        emit(sink, level, event_id, &record);
    }

    pub fn exit(&self, level: LogLevel, site: CallSite) {
        self.exit_with_event(level, &EventId::NONE, site);
    }

    pub fn exit_with_event(&self, level: LogLevel, event_id: &EventId, site: CallSite) {
        let Some(sink) = self.gate(level) else {
            return;
        };
        let record = LogRecord::new(format!("Exiting '{}'", site.member()), &site);
        emit(sink, level, event_id, &record);
    }

    /// Logs `message`. Empty messages are dropped.
    pub fn log(&self, level: LogLevel, message: &str, site: CallSite) {
        self.log_with_event(level, &EventId::NONE, message, site);
    }

    pub fn log_with_event(&self, level: LogLevel, event_id: &EventId, message: &str, site: CallSite) {
        if message.is_empty() {
            return;
        }
        let Some(sink) = self.gate(level) else {
            return;
        };
        let record = LogRecord::new(message, &site);
        emit(sink, level, event_id, &record);
    }

    /// Logs `message` together with the error that caused it.
    pub fn log_with_cause(
        &self,
        level: LogLevel,
        message: &str,
        cause: &(dyn Error + 'static),
        site: CallSite,
    ) {
        self.log_with_cause_and_event(level, &EventId::NONE, message, cause, site);
    }

    pub fn log_with_cause_and_event(
        &self,
        level: LogLevel,
        event_id: &EventId,
        message: &str,
        cause: &(dyn Error + 'static),
        site: CallSite,
    ) {
        if message.is_empty() {
            return;
        }
        let Some(sink) = self.gate(level) else {
            return;
        };
        let mut record = LogRecord::new(message, &site);
        record.set_cause(cause);
        emit(sink, level, event_id, &record);
    }

    /// Gated entry for records with custom properties.
    ///
    /// Returns `None` when the level is disabled, so property values are only
    /// computed when they will be used.
    ///
    /// ```
    /// use cdf_logging::{LogLevel, Logger, call_site};
    ///
    /// let logger = Logger::inert();
    /// if let Some(record) = logger.record(LogLevel::Information, call_site!()) {
    ///     record
    ///         .message("payment captured")
    ///         .property("Amount", 125)
    ///         .emit();
    /// }
    /// ```
    #[must_use]
    pub fn record(&self, level: LogLevel, site: CallSite) -> Option<RecordBuilder<'_, 'static>> {
        let sink = self.gate(level)?;
        Some(RecordBuilder {
            sink,
            level,
            event_id: EventId::NONE,
            record: LogRecord::new("", &site),
        })
    }
}

fn emit(sink: &dyn LogSink, level: LogLevel, event_id: &EventId, record: &LogRecord<'_>) {
    sink.emit(level, event_id, record, record.cause(), format_record);
}

/// Record under construction, returned by [`Logger::record`].
#[must_use = "a record is only logged once `emit` is called"]
pub struct RecordBuilder<'l, 'a> {
    sink: &'l dyn LogSink,
    level: LogLevel,
    event_id: EventId,
    record: LogRecord<'a>,
}

impl<'l, 'a> RecordBuilder<'l, 'a> {
    pub fn message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.record.set_message(message);
        self
    }

    pub fn property(mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Value>) -> Self {
        self.record.add_property(name, value);
        self
    }

    pub fn event_id(mut self, event_id: impl Into<EventId>) -> Self {
        self.event_id = event_id.into();
        self
    }

    /// Attaches the error that caused this record. Borrowing a cause narrows
    /// the builder to the cause's lifetime.
    pub fn cause<'c>(self, cause: &'c (dyn Error + 'static)) -> RecordBuilder<'l, 'c>
    where
        'a: 'c,
    {
        let mut record: LogRecord<'c> = self.record;
        record.set_cause(cause);
        RecordBuilder {
            sink: self.sink,
            level: self.level,
            event_id: self.event_id,
            record,
        }
    }

    /// Hands the record to the sink. A record without a message is dropped.
    pub fn emit(self) {
        if self.record.message().is_empty() {
            return;
        }
        emit(self.sink, self.level, &self.event_id, &self.record);
    }
}

impl fmt::Debug for RecordBuilder<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordBuilder")
            .field("level", &self.level)
            .field("event_id", &self.event_id)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

macro_rules! level_methods {
    (
        $(
            $level:ident => {
                enter: $enter:ident,
                enter_with_event: $enter_with_event:ident,
                exit: $exit:ident,
                exit_with_event: $exit_with_event:ident,
                message: $message:ident,
                message_with_event: $message_with_event:ident,
                with_cause: $with_cause:ident,
                with_cause_and_event: $with_cause_and_event:ident $(,)?
            }
        ),+ $(,)?
    ) => {
        impl Logger {
            $(
                #[doc = concat!("[`Logger::enter`] at `", stringify!($level), "`.")]
                pub fn $enter(&self, site: CallSite) {
                    self.enter(LogLevel::$level, site);
                }

                #[doc = concat!("[`Logger::enter_with_event`] at `", stringify!($level), "`.")]
                pub fn $enter_with_event(&self, event_id: &EventId, site: CallSite) {
                    self.enter_with_event(LogLevel::$level, event_id, site);
                }

                #[doc = concat!("[`Logger::exit`] at `", stringify!($level), "`.")]
                pub fn $exit(&self, site: CallSite) {
                    self.exit(LogLevel::$level, site);
                }

                #[doc = concat!("[`Logger::exit_with_event`] at `", stringify!($level), "`.")]
                pub fn $exit_with_event(&self, event_id: &EventId, site: CallSite) {
                    self.exit_with_event(LogLevel::$level, event_id, site);
                }

                #[doc = concat!("[`Logger::log`] at `", stringify!($level), "`.")]
                pub fn $message(&self, message: &str, site: CallSite) {
                    self.log(LogLevel::$level, message, site);
                }

                #[doc = concat!("[`Logger::log_with_event`] at `", stringify!($level), "`.")]
                pub fn $message_with_event(&self, event_id: &EventId, message: &str, site: CallSite) {
                    self.log_with_event(LogLevel::$level, event_id, message, site);
                }

                #[doc = concat!("[`Logger::log_with_cause`] at `", stringify!($level), "`.")]
                pub fn $with_cause(&self, message: &str, cause: &(dyn Error + 'static), site: CallSite) {
                    self.log_with_cause(LogLevel::$level, message, cause, site);
                }

                #[doc = concat!("[`Logger::log_with_cause_and_event`] at `", stringify!($level), "`.")]
                pub fn $with_cause_and_event(
                    &self,
                    event_id: &EventId,
                    message: &str,
                    cause: &(dyn Error + 'static),
                    site: CallSite,
                ) {
                    self.log_with_cause_and_event(LogLevel::$level, event_id, message, cause, site);
                }
            )+
        }
    };
}

level_methods! {
    Trace => {
        enter: trace_enter,
        enter_with_event: trace_enter_with_event,
        exit: trace_exit,
        exit_with_event: trace_exit_with_event,
        message: trace,
        message_with_event: trace_with_event,
        with_cause: trace_with_cause,
        with_cause_and_event: trace_with_cause_and_event,
    },
    Debug => {
        enter: debug_enter,
        enter_with_event: debug_enter_with_event,
        exit: debug_exit,
        exit_with_event: debug_exit_with_event,
        message: debug,
        message_with_event: debug_with_event,
        with_cause: debug_with_cause,
        with_cause_and_event: debug_with_cause_and_event,
    },
    Information => {
        enter: information_enter,
        enter_with_event: information_enter_with_event,
        exit: information_exit,
        exit_with_event: information_exit_with_event,
        message: information,
        message_with_event: information_with_event,
        with_cause: information_with_cause,
        with_cause_and_event: information_with_cause_and_event,
    },
    Warning => {
        enter: warning_enter,
        enter_with_event: warning_enter_with_event,
        exit: warning_exit,
        exit_with_event: warning_exit_with_event,
        message: warning,
        message_with_event: warning_with_event,
        with_cause: warning_with_cause,
        with_cause_and_event: warning_with_cause_and_event,
    },
    Error => {
        enter: error_enter,
        enter_with_event: error_enter_with_event,
        exit: error_exit,
        exit_with_event: error_exit_with_event,
        message: error,
        message_with_event: error_with_event,
        with_cause: error_with_cause,
        with_cause_and_event: error_with_cause_and_event,
    },
    Critical => {
        enter: critical_enter,
        enter_with_event: critical_enter_with_event,
        exit: critical_exit,
        exit_with_event: critical_exit_with_event,
        message: critical,
        message_with_event: critical_with_event,
        with_cause: critical_with_cause,
        with_cause_and_event: critical_with_cause_and_event,
    },
}
