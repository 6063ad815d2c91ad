//! RFC 9457 shaped problem descriptions (pure data model, no HTTP framework dependencies)

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Content type for problem descriptions as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Detail of the generic problem. Never carries anything from the failing error.
pub const GENERIC_DETAIL: &str = "An internal error has occurred and the operation could not complete.";

/// Base of the type URIs used for status-derived problem types.
pub(crate) const STATUS_TYPE_BASE: &str = "https://httpstatuses.com/";

/// Custom serializer for `StatusCode` to u16
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

/// Custom deserializer for `StatusCode` from u16
fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// Description of a failure that is safe to hand across a trust boundary.
///
/// The boundary transport serializes this value and sets its own status code
/// from [`ProblemDescription::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ProblemDescription {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_uri: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    /// Serializes as u16 for RFC 9457 compatibility.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code"
    )]
    pub status: StatusCode,
    /// The managed error's message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Path of the request the problem occurred in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDescription {
    /// Create a problem with the given status, title and type, without detail or instance.
    #[must_use]
    pub fn new(status: StatusCode, title: impl Into<String>, type_uri: impl Into<String>) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status,
            detail: None,
            instance: None,
        }
    }

    /// The generic 500 returned for unmanaged failures and whenever mapping
    /// cannot produce anything more specific.
    #[must_use]
    pub fn internal_server_error() -> Self {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        Self::new(status, "Internal Server Error", status_type_uri(status)).with_detail(GENERIC_DETAIL)
    }

    #[must_use]
    pub fn with_type(mut self, type_uri: impl Into<String>) -> Self {
        self.type_uri = type_uri.into();
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_instance(mut self, path: impl Into<String>) -> Self {
        self.instance = Some(path.into());
        self
    }

    /// Status as a bare number, for transports that don't speak `http`.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

/// `https://httpstatuses.com/<code>`
pub(crate) fn status_type_uri(status: StatusCode) -> String {
    format!("{STATUS_TYPE_BASE}{}", status.as_u16())
}
