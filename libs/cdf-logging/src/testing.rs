//! Recording sink for unit tests.

use std::error::Error;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

use crate::level::LogLevel;
use crate::record::{EventId, Formatter, LogRecord};
use crate::sink::LogSink;

#[derive(Debug, Clone)]
pub struct Entry {
    pub level: LogLevel,
    pub event_id: EventId,
    pub message: String,
    pub formatted: String,
    pub properties: Vec<(String, Value)>,
    pub cause: Option<String>,
}

impl Entry {
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }
}

pub struct RecordingSink {
    min_level: LogLevel,
    gate_checks: AtomicUsize,
    entries: Mutex<Vec<Entry>>,
}

impl RecordingSink {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level,
            gate_checks: AtomicUsize::new(0),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn emitted(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn gate_checks(&self) -> usize {
        self.gate_checks.load(Ordering::SeqCst)
    }
}

impl LogSink for RecordingSink {
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.gate_checks.fetch_add(1, Ordering::SeqCst);
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
            level,
            event_id: event_id.clone(),
            message: record.message().to_owned(),
            formatted: formatter(record).to_owned(),
            properties: record
                .properties()
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            cause: cause.map(ToString::to_string),
        };
        self.entries.lock().unwrap().push(entry);
    }
}
