//! Where loggers come from.
//!
//! [`LogManager`] is the context object threaded through application startup
//! and handed to consumers. For code that can't be handed one, a process-wide
//! default can be installed once with [`initialize`] and read with [`acquire`].
//! Until then (or forever, if it never happens) [`acquire`] returns inert
//! loggers.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::logger::Logger;
use crate::sink::LoggerFactory;

/// Lifecycle failures of the process-wide manager.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("invalid input: '{parameter}' must be provided")]
    InvalidInput { parameter: &'static str },
    #[error("the process-wide log manager is already initialized")]
    AlreadyInitialized,
}

/// Hands out loggers bound to one factory.
#[derive(Clone, Default)]
pub struct LogManager {
    factory: Option<Arc<dyn LoggerFactory>>,
}

impl fmt::Debug for LogManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogManager")
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}

impl LogManager {
    #[must_use]
    pub fn new(factory: Arc<dyn LoggerFactory>) -> Self {
        Self {
            factory: Some(factory),
        }
    }

    /// A manager without factory; every logger it hands out is inert.
    #[must_use]
    pub fn disabled() -> Self {
        Self { factory: None }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.factory.is_some()
    }

    /// Logger whose category is the type name of `T`.
    #[must_use]
    pub fn acquire<T: ?Sized>(&self) -> Logger {
        self.acquire_named(std::any::type_name::<T>())
    }

    /// Logger for an explicit category.
    #[must_use]
    pub fn acquire_named(&self, category: &str) -> Logger {
        match &self.factory {
            Some(factory) => Logger::new(category, factory.create_sink(category)),
            None => Logger::inert(),
        }
    }
}

/// Process-wide default manager
static GLOBAL_LOG_MANAGER: OnceLock<LogManager> = OnceLock::new();

/// Installs the process-wide default manager (called once by application startup).
///
/// # Errors
/// - [`LifecycleError::InvalidInput`] if `factory` is `None`.
/// - [`LifecycleError::AlreadyInitialized`] on every call after the first
///   successful one; the first factory stays in place.
pub fn initialize(factory: Option<Arc<dyn LoggerFactory>>) -> Result<(), LifecycleError> {
    let factory = factory.ok_or(LifecycleError::InvalidInput { parameter: "factory" })?;
    GLOBAL_LOG_MANAGER
        .set(LogManager::new(factory))
        .map_err(|_| LifecycleError::AlreadyInitialized)?;
    tracing::debug!("process-wide log manager initialized");
    Ok(())
}

#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL_LOG_MANAGER.get().is_some()
}

/// The process-wide manager, if [`initialize`] succeeded.
#[must_use]
pub fn global() -> Option<&'static LogManager> {
    GLOBAL_LOG_MANAGER.get()
}

/// Logger from the process-wide manager, or an inert one before [`initialize`].
#[must_use]
pub fn acquire<T: ?Sized>() -> Logger {
    GLOBAL_LOG_MANAGER
        .get()
        .map_or_else(Logger::inert, LogManager::acquire::<T>)
}

/// Same as [`acquire`] with an explicit category.
#[must_use]
pub fn acquire_named(category: &str) -> Logger {
    GLOBAL_LOG_MANAGER
        .get()
        .map_or_else(Logger::inert, |manager| manager.acquire_named(category))
}
