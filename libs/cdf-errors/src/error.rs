//! The managed error value.

use std::borrow::Cow;
use std::error::Error;

use crate::kind::ErrorKind;

/// Boxed cause carried by a [`ManagedError`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An anticipated failure whose message is safe to show to the caller.
///
/// The message falls back to the kind's standard message whenever none (or a
/// blank one) is supplied, so it is never empty. The optional cause is owned by
/// this value and is only ever exposed through [`Error::source`] and
/// [`ManagedError::cause`].
///
/// ```
/// use cdf_errors::{ErrorKind, ManagedError};
///
/// let err = ManagedError::timeout();
/// assert_eq!(err.kind(), ErrorKind::Timeout);
/// assert_eq!(err.message(), ErrorKind::Timeout.standard_message());
///
/// let err = ManagedError::from_message(ErrorKind::DataValidation, "email is required");
/// assert_eq!(err.to_string(), "email is required");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ManagedError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    #[source]
    cause: Option<BoxError>,
}

impl ManagedError {
    /// Creates an error of `kind` carrying the standard message.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(kind.standard_message()),
            cause: None,
        }
    }

    /// Creates an error of `kind` with the standard message, wrapping `cause`.
    #[must_use]
    pub fn from_cause(kind: ErrorKind, cause: impl Into<BoxError>) -> Self {
        Self::new(kind).with_cause(cause)
    }

    /// Creates an error of `kind` with an application-safe message.
    #[must_use]
    pub fn from_message(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(kind).with_message(message)
    }

    /// Creates an error of `kind` with an application-safe message, wrapping `cause`.
    #[must_use]
    pub fn from_message_and_cause(
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::new(kind).with_message(message).with_cause(cause)
    }

    /// Replaces the message. Blank messages keep the current one.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.message = message;
        }
        self
    }

    /// Attaches `cause`, replacing any previous one.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Takes the wrapped cause out of this error.
    #[must_use]
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// Returns `true` if this error's kind is `kind` or specializes it.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind.is(kind)
    }
}

impl From<ErrorKind> for ManagedError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Wraps foreign errors into [`ManagedError`]s, keeping them as the cause.
pub trait ManagedResultExt<T> {
    /// Wraps the error as the cause of a `kind` error with the standard message.
    ///
    /// # Errors
    /// Returns the wrapped error when `self` is `Err`.
    fn or_managed(self, kind: ErrorKind) -> Result<T, ManagedError>;

    /// Wraps the error as the cause of a `kind` error with `message`.
    ///
    /// # Errors
    /// Returns the wrapped error when `self` is `Err`.
    fn or_managed_with(
        self,
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, ManagedError>;
}

impl<T, E> ManagedResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn or_managed(self, kind: ErrorKind) -> Result<T, ManagedError> {
        self.map_err(|e| ManagedError::from_cause(kind, e))
    }

    fn or_managed_with(
        self,
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, ManagedError> {
        self.map_err(|e| ManagedError::from_message_and_cause(kind, message, e))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn no_arguments_yields_the_standard_message() {
        for kind in ErrorKind::ALL {
            let err = ManagedError::new(*kind);
            assert_eq!(err.message(), kind.standard_message());
            assert!(err.cause().is_none());
        }
    }

    #[test]
    fn shorthands_match_their_kind() {
        assert_eq!(ManagedError::managed().kind(), ErrorKind::Managed);
        assert_eq!(ManagedError::authorization().kind(), ErrorKind::Authorization);
        assert_eq!(
            ManagedError::external_access_denied().kind(),
            ErrorKind::ExternalAccessDenied
        );
        assert_eq!(ManagedError::unhandled_logic().kind(), ErrorKind::UnhandledLogic);
    }

    #[test]
    fn cause_only_keeps_the_standard_message() {
        let err = ManagedError::from_cause(
            ErrorKind::Configuration,
            io::Error::new(io::ErrorKind::NotFound, "settings.yaml missing"),
        );
        assert_eq!(err.message(), ErrorKind::Configuration.standard_message());
        assert_eq!(err.cause().map(ToString::to_string).as_deref(), Some("settings.yaml missing"));
    }

    #[test]
    fn blank_message_falls_back_to_the_standard_one() {
        let err = ManagedError::from_message(ErrorKind::Data, "   ");
        assert_eq!(err.message(), ErrorKind::Data.standard_message());

        let err = ManagedError::from_message(ErrorKind::Data, String::new());
        assert_eq!(err.message(), ErrorKind::Data.standard_message());
    }

    #[test]
    fn chained_cause_round_trips() {
        let inner = ManagedError::from_message(ErrorKind::Timeout, "inventory service timed out");
        let outer = ManagedError::from_message_and_cause(ErrorKind::Data, "order not saved", inner);

        let cause = outer
            .cause()
            .and_then(|c| c.downcast_ref::<ManagedError>())
            .expect("cause should be a managed error");
        assert_eq!(cause.kind(), ErrorKind::Timeout);
        assert_eq!(cause.message(), "inventory service timed out");

        let source = outer.source().expect("source should be exposed");
        assert_eq!(source.to_string(), "inventory service timed out");
    }

    #[test]
    fn into_cause_hands_back_ownership() {
        let err = ManagedError::timeout().with_cause(io::Error::from(io::ErrorKind::TimedOut));
        let cause = err.into_cause().expect("cause should be present");
        let io_err = cause.downcast::<io::Error>().expect("cause should be an io error");
        assert_eq!(io_err.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn result_ext_wraps_foreign_errors() {
        let result: Result<(), io::Error> = Err(io::Error::other("socket closed"));
        let err = result
            .or_managed_with(ErrorKind::Communications, "upstream unavailable")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Communications);
        assert_eq!(err.message(), "upstream unavailable");
        assert!(err.cause().is_some());

        let ok: Result<u8, io::Error> = Ok(7);
        assert_eq!(ok.or_managed(ErrorKind::Data).unwrap(), 7);
    }

    #[test]
    fn is_checks_the_kind_tree() {
        let err = ManagedError::authentication();
        assert!(err.is(ErrorKind::Security));
        assert!(err.is(ErrorKind::Managed));
        assert!(!err.is(ErrorKind::Authorization));
    }
}
