//! Log records and the correlation identifier that travels with them.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde_json::Value;

use crate::callsite::CallSite;

/// Property holding the calling member's name.
pub const PROPERTY_MEMBER_NAME: &str = "MemberName";

/// Property holding the line the logging call was made on.
pub const PROPERTY_LINE_NUMBER: &str = "LineNumber";

/// Correlation identifier for a record. The default, id 0 with no name, means
/// "no particular event".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    pub id: i32,
    pub name: Option<Cow<'static, str>>,
}

impl EventId {
    pub const NONE: EventId = EventId { id: 0, name: None };

    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    #[must_use]
    pub fn named(id: i32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}:{name}", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Renders a record for sinks that want a single line of text.
pub type Formatter = for<'r, 'a> fn(&'r LogRecord<'a>) -> &'r str;

/// The formatter the facade hands to sinks: the record's message, verbatim.
/// Properties stay structured and are never interpolated into the text.
#[must_use]
pub fn format_record<'r>(record: &'r LogRecord<'_>) -> &'r str {
    record.message()
}

/// One structured logging emission.
///
/// Properties keep insertion order and may repeat a name. `MemberName` and
/// `LineNumber` always come first. Records are built per call and dropped
/// once the sink returns.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    message: Cow<'a, str>,
    properties: Vec<(Cow<'a, str>, Value)>,
    cause: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogRecord<'a> {
    #[must_use]
    pub fn new(message: impl Into<Cow<'a, str>>, site: &CallSite) -> Self {
        let properties = vec![
            (Cow::Borrowed(PROPERTY_MEMBER_NAME), Value::from(site.member())),
            (Cow::Borrowed(PROPERTY_LINE_NUMBER), Value::from(site.line())),
        ];
        Self {
            message: message.into(),
            properties,
            cause: None,
        }
    }

    /// Appends a property. Existing properties with the same name are kept.
    pub fn add_property(&mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Value>) {
        self.properties.push((name.into(), value.into()));
    }

    pub fn set_message(&mut self, message: impl Into<Cow<'a, str>>) {
        self.message = message.into();
    }

    pub fn set_cause(&mut self, cause: &'a (dyn Error + 'static)) {
        self.cause = Some(cause);
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn properties(&self) -> &[(Cow<'a, str>, Value)] {
        &self.properties
    }

    /// First property called `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn cause(&self) -> Option<&'a (dyn Error + 'static)> {
        self.cause
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn site() -> CallSite {
        CallSite::new("billing::invoices::issue", 88)
    }

    #[test]
    fn call_site_properties_come_first() {
        let record = LogRecord::new("invoice issued", &site());
        let names: Vec<_> = record.properties().iter().map(|(k, _)| k.as_ref()).collect();
        assert_eq!(names, vec![PROPERTY_MEMBER_NAME, PROPERTY_LINE_NUMBER]);
        assert_eq!(record.property(PROPERTY_MEMBER_NAME), Some(&json!("issue")));
        assert_eq!(record.property(PROPERTY_LINE_NUMBER), Some(&json!(88)));
    }

    #[test]
    fn properties_keep_order_and_duplicates() {
        let mut record = LogRecord::new("retrying", &site());
        record.add_property("Attempt", 1);
        record.add_property("Attempt", 2);
        record.add_property(String::from("Endpoint"), "https://tax.example.com");

        let tail: Vec<_> = record.properties()[2..]
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        assert_eq!(
            tail,
            vec![
                ("Attempt".to_owned(), json!(1)),
                ("Attempt".to_owned(), json!(2)),
                ("Endpoint".to_owned(), json!("https://tax.example.com")),
            ]
        );
        assert_eq!(record.property("Attempt"), Some(&json!(1)));
    }

    #[test]
    fn formatter_returns_the_message_only() {
        let mut record = LogRecord::new("invoice {Number} issued", &site());
        record.add_property("Number", 1042);
        let formatter: Formatter = format_record;
        assert_eq!(formatter(&record), "invoice {Number} issued");
    }

    #[test]
    fn cause_is_borrowed_not_owned() {
        let cause = std::io::Error::other("disk full");
        let mut record = LogRecord::new("write failed", &site());
        record.set_cause(&cause);
        assert_eq!(record.cause().map(ToString::to_string).as_deref(), Some("disk full"));
    }

    #[test]
    fn event_id_display() {
        assert_eq!(EventId::NONE.to_string(), "0");
        assert_eq!(EventId::named(7, "OrderPlaced").to_string(), "7:OrderPlaced");
        assert_eq!(EventId::from(3), EventId::new(3));
    }
}
