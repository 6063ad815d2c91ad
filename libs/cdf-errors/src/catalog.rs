//! Default problem fields per error kind

use crate::kind::ErrorKind;
use crate::problem::ProblemDescription;
use http::StatusCode;

/// Static problem defaults for one error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemDefaults {
    pub status: u16,
    pub title: &'static str,
    pub type_uri: &'static str,
}

impl ProblemDefaults {
    /// Problem carrying these defaults and `detail`, or `None` if `status`
    /// is not a valid status code.
    #[must_use]
    pub fn problem(self, detail: impl Into<String>) -> Option<ProblemDescription> {
        let status = StatusCode::from_u16(self.status).ok()?;
        Some(ProblemDescription::new(status, self.title, self.type_uri).with_detail(detail))
    }
}

const BAD_REQUEST: ProblemDefaults = ProblemDefaults {
    status: 400,
    title: "Bad Request",
    type_uri: "https://httpstatuses.com/400",
};

const UNAUTHORIZED: ProblemDefaults = ProblemDefaults {
    status: 401,
    title: "UnAuthorized",
    type_uri: "https://httpstatuses.com/401",
};

const FORBIDDEN: ProblemDefaults = ProblemDefaults {
    status: 403,
    title: "Forbidden",
    type_uri: "https://httpstatuses.com/403",
};

const INTERNAL_SERVER_ERROR: ProblemDefaults = ProblemDefaults {
    status: 500,
    title: "Internal Server Error",
    type_uri: "https://httpstatuses.com/500",
};

const GATEWAY_TIMEOUT: ProblemDefaults = ProblemDefaults {
    status: 504,
    title: "Gateway Timeout",
    type_uri: "https://httpstatuses.com/504",
};

/// One entry per kind. Entries are independent: a kind never inherits its
/// parent's defaults while it has its own row.
const CATALOG: &[(ErrorKind, ProblemDefaults)] = &[
    (ErrorKind::Authentication, UNAUTHORIZED),
    (ErrorKind::Authorization, UNAUTHORIZED),
    (ErrorKind::ExternalAccessDenied, FORBIDDEN),
    (ErrorKind::Security, UNAUTHORIZED),
    (ErrorKind::Timeout, GATEWAY_TIMEOUT),
    (ErrorKind::Communications, GATEWAY_TIMEOUT),
    (ErrorKind::Configuration, INTERNAL_SERVER_ERROR),
    (ErrorKind::DataValidation, BAD_REQUEST),
    (ErrorKind::Data, INTERNAL_SERVER_ERROR),
    (ErrorKind::UnhandledLogic, INTERNAL_SERVER_ERROR),
    (ErrorKind::Logic, INTERNAL_SERVER_ERROR),
    (ErrorKind::Managed, INTERNAL_SERVER_ERROR),
];

/// Resolves the defaults for `kind`, most derived kind first.
#[must_use]
pub fn defaults_for(kind: ErrorKind) -> Option<ProblemDefaults> {
    kind.ancestors().find_map(|candidate| {
        CATALOG
            .iter()
            .find(|(entry, _)| *entry == candidate)
            .map(|(_, defaults)| *defaults)
    })
}
