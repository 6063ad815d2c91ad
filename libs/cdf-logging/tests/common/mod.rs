//! Recording sink and factory shared by the integration tests.
#![allow(dead_code)]

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cdf_errors::{ErrorKind, ManagedError};
use cdf_logging::{EventId, Formatter, LogLevel, LogRecord, LogSink, LoggerFactory};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Entry {
    pub category: String,
    pub level: LogLevel,
    pub event_id: EventId,
    pub message: String,
    pub properties: Vec<(String, Value)>,
    pub cause: Option<String>,
    pub cause_kind: Option<ErrorKind>,
}

impl Entry {
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }
}

/// Shared journal written by every sink of one factory.
#[derive(Default)]
pub struct Journal {
    entries: Mutex<Vec<Entry>>,
    gate_checks: AtomicUsize,
}

impl Journal {
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn gate_checks(&self) -> usize {
        self.gate_checks.load(Ordering::SeqCst)
    }
}

pub struct RecordingSink {
    category: String,
    min_level: LogLevel,
    journal: Arc<Journal>,
}

impl LogSink for RecordingSink {
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.journal.gate_checks.fetch_add(1, Ordering::SeqCst);
        level >= self.min_level
    }

    fn emit(
        &self,
        level: LogLevel,
        event_id: &EventId,
        record: &LogRecord<'_>,
        cause: Option<&(dyn Error + 'static)>,
        formatter: Formatter,
    ) {
        let entry = Entry {
            category: self.category.clone(),
            level,
            event_id: event_id.clone(),
            message: formatter(record).to_owned(),
            properties: record
                .properties()
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            cause: cause.map(ToString::to_string),
            cause_kind: cause
                .and_then(|c| c.downcast_ref::<ManagedError>())
                .map(ManagedError::kind),
        };
        self.journal.entries.lock().unwrap().push(entry);
    }
}

pub struct RecordingFactory {
    min_level: LogLevel,
    journal: Arc<Journal>,
}

impl RecordingFactory {
    pub fn new(min_level: LogLevel) -> (Arc<Self>, Arc<Journal>) {
        let journal = Arc::new(Journal::default());
        let factory = Arc::new(Self {
            min_level,
            journal: journal.clone(),
        });
        (factory, journal)
    }
}

impl LoggerFactory for RecordingFactory {
    fn create_sink(&self, category: &str) -> Arc<dyn LogSink> {
        Arc::new(RecordingSink {
            category: category.to_owned(),
            min_level: self.min_level,
            journal: self.journal.clone(),
        })
    }
}
