//! Bridge from the facade to `tracing`.
//!
//! [`TracingLoggerFactory`] is the factory applications install at startup.
//! Each record becomes one `tracing` event with target `cdf_logging`:
//! the record's message, plus `category`, `event_id`, `properties` (the
//! property list as a JSON object) and `error` (the cause, if any). Whatever
//! subscriber the host installed decides where the event ends up.

use std::error::Error;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::Level;

use crate::config::LoggingConfig;
use crate::level::LogLevel;
use crate::record::{EventId, Formatter, LogRecord};
use crate::sink::{LogSink, LoggerFactory};

const BRIDGE_TARGET: &str = "cdf_logging";

/// Property holding the host name, when enabled.
pub const PROPERTY_MACHINE_NAME: &str = "MachineName";
/// Property holding the emitting thread's id, when enabled.
pub const PROPERTY_THREAD_ID: &str = "ThreadId";
/// Property holding the emitting thread's name, when enabled and named.
pub const PROPERTY_THREAD_NAME: &str = "ThreadName";

/// Creates [`TracingSink`]s sharing one configuration.
#[derive(Debug, Clone)]
pub struct TracingLoggerFactory {
    config: LoggingConfig,
    machine_name: Option<Arc<str>>,
}

impl TracingLoggerFactory {
    /// Resolves the host name once, if the configuration asks for it.
    #[must_use]
    pub fn new(config: LoggingConfig) -> Self {
        let machine_name = if config.include_machine_name {
            resolve_machine_name()
        } else {
            None
        };
        Self {
            config,
            machine_name,
        }
    }

    #[must_use]
    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }
}

impl Default for TracingLoggerFactory {
    fn default() -> Self {
        Self::new(LoggingConfig::default())
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn create_sink(&self, category: &str) -> Arc<dyn LogSink> {
        Arc::new(TracingSink {
            category: Arc::from(category),
            min_level: self.config.min_level,
            machine_name: self.machine_name.clone(),
            include_thread_id: self.config.include_thread_id,
            include_thread_name: self.config.include_thread_name,
        })
    }
}

fn resolve_machine_name() -> Option<Arc<str>> {
    match hostname::get() {
        Ok(name) => Some(Arc::from(name.to_string_lossy().as_ref())),
        Err(e) => {
            tracing::warn!(error = %e, "could not resolve the host name; MachineName will be omitted");
            None
        }
    }
}

/// Sink of one category, forwarding records to `tracing`.
#[derive(Debug)]
pub struct TracingSink {
    category: Arc<str>,
    min_level: LogLevel,
    machine_name: Option<Arc<str>>,
    include_thread_id: bool,
    include_thread_name: bool,
}

impl TracingSink {
    fn properties_json(&self, record: &LogRecord<'_>) -> String {
        let mut properties = Map::new();
        for (name, value) in record.properties() {
            // JSON objects can't repeat keys; the first occurrence wins, like
            // `LogRecord::property`.
            properties
                .entry(name.as_ref())
                .or_insert_with(|| value.clone());
        }
        if let Some(machine_name) = &self.machine_name {
            properties.insert(PROPERTY_MACHINE_NAME.to_owned(), Value::from(machine_name.as_ref()));
        }
        if self.include_thread_id || self.include_thread_name {
            let thread = std::thread::current();
            if self.include_thread_id {
                properties.insert(PROPERTY_THREAD_ID.to_owned(), Value::from(thread_id(&thread)));
            }
            if self.include_thread_name
                && let Some(name) = thread.name()
            {
                properties.insert(PROPERTY_THREAD_NAME.to_owned(), Value::from(name));
            }
        }
        Value::Object(properties).to_string()
    }
}

#[allow(clippy::use_debug)] // ThreadId only exposes its number through Debug
fn thread_id(thread: &std::thread::Thread) -> String {
    format!("{:?}", thread.id())
}

fn tracing_enabled(level: LogLevel) -> bool {
    match level {
        LogLevel::Trace => tracing::enabled!(target: BRIDGE_TARGET, Level::TRACE),
        LogLevel::Debug => tracing::enabled!(target: BRIDGE_TARGET, Level::DEBUG),
        LogLevel::Information => tracing::enabled!(target: BRIDGE_TARGET, Level::INFO),
        LogLevel::Warning => tracing::enabled!(target: BRIDGE_TARGET, Level::WARN),
        LogLevel::Error | LogLevel::Critical => tracing::enabled!(target: BRIDGE_TARGET, Level::ERROR),
    }
}

impl LogSink for TracingSink {
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level && tracing_enabled(level)
    }

    fn emit(
        &self,
        level: LogLevel,
        event_id: &EventId,
        record: &LogRecord<'_>,
        cause: Option<&(dyn Error + 'static)>,
        formatter: Formatter,
    ) {
        let message = formatter(record);
        let properties = self.properties_json(record);
        let error = cause.map(ToString::to_string);
        let category = &*self.category;
        let event_id = event_id.id;
        let critical = level == LogLevel::Critical;

        // `tracing` needs the level as a constant at each call site.
        macro_rules! forward {
            ($level:expr) => {
                tracing::event!(
                    target: BRIDGE_TARGET,
                    $level,
                    category,
                    event_id,
                    critical,
                    properties = %properties,
                    error = error.as_deref(),
                    "{message}"
                )
            };
        }

        match level {
            LogLevel::Trace => forward!(Level::TRACE),
            LogLevel::Debug => forward!(Level::DEBUG),
            LogLevel::Information => forward!(Level::INFO),
            LogLevel::Warning => forward!(Level::WARN),
            LogLevel::Error | LogLevel::Critical => forward!(Level::ERROR),
        }
    }
}
