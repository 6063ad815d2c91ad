//! Structured, level-gated logging facade
//!
//! Every call follows the same three steps:
//! 1. **Gate**: return at once if the level is disabled, before anything is built.
//! 2. **Build**: assemble a [`LogRecord`] with the call site's `MemberName` and
//!    `LineNumber` plus any caller properties.
//! 3. **Emit**: hand the record to the logger's [`LogSink`].
//!
//! Loggers come from a [`LogManager`]. A manager without a factory, like the
//! process-wide default before [`manager::initialize`], hands out inert loggers
//! on which every call is a no-op.
//!
//! ```
//! use cdf_logging::{LogLevel, LogManager, log_at, log_enter};
//!
//! struct OrderService;
//!
//! let logger = LogManager::disabled().acquire::<OrderService>();
//! log_enter!(logger, LogLevel::Trace);
//! log_at!(logger, LogLevel::Information, "order accepted");
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod callsite;
pub mod config;
pub mod level;
pub mod logger;
pub mod macros;
pub mod manager;
pub mod record;
pub mod sink;
pub mod tracing_bridge;

#[cfg(test)]
mod testing;

pub use callsite::CallSite;
pub use config::{ConfigError, LoggingConfig};
pub use level::{LogLevel, ParseLevelError};
pub use logger::{Logger, RecordBuilder};
pub use manager::{LifecycleError, LogManager};
pub use record::{EventId, Formatter, LogRecord, PROPERTY_LINE_NUMBER, PROPERTY_MEMBER_NAME, format_record};
pub use sink::{LogSink, LoggerFactory};
pub use tracing_bridge::{TracingLoggerFactory, TracingSink};
