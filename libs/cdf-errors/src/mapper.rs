//! Mapping errors to problem descriptions
//!
//! This module provides the single place where errors become problem
//! descriptions. Managed errors get the defaults of their kind, everything
//! else gets the generic 500 so nothing about the failure leaks to the caller.
//! Mapping never fails.

use std::error::Error;

use http::StatusCode;

use crate::catalog;
use crate::context::RequestContext;
use crate::error::{BoxError, ManagedError};
use crate::problem::ProblemDescription;

/// Caller-side replacements for a kind's default problem fields.
///
/// Each field is independent; `None` keeps the kind's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemOverrides {
    pub type_uri: Option<String>,
    pub status: Option<u16>,
    pub title: Option<String>,
}

impl ProblemOverrides {
    #[must_use]
    pub fn with_type(mut self, type_uri: impl Into<String>) -> Self {
        self.type_uri = Some(type_uri.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Maps `error` to a problem description.
///
/// `None` and errors that are not [`ManagedError`]s map to
/// [`ProblemDescription::internal_server_error`]. Managed errors get their
/// kind's status, title and type, their message as `detail`, and
/// `request_path` as `instance`.
///
/// ```
/// use cdf_errors::{ManagedError, map_to_problem};
///
/// let err = ManagedError::timeout();
/// let problem = map_to_problem(Some(&err), Some("/api/x"));
/// assert_eq!(problem.status_code(), 504);
/// assert_eq!(problem.instance.as_deref(), Some("/api/x"));
/// ```
#[must_use]
pub fn map_to_problem(
    error: Option<&(dyn Error + 'static)>,
    request_path: Option<&str>,
) -> ProblemDescription {
    map_to_problem_with(error, request_path, &ProblemOverrides::default())
}

/// Same as [`map_to_problem`], replacing the kind's defaults with `overrides`.
///
/// An override status that is not a valid status code yields the generic problem.
#[must_use]
pub fn map_to_problem_with(
    error: Option<&(dyn Error + 'static)>,
    request_path: Option<&str>,
    overrides: &ProblemOverrides,
) -> ProblemDescription {
    let Some(error) = error else {
        return ProblemDescription::internal_server_error();
    };

    let Some(managed) = find_managed(error) else {
        tracing::debug!(error = %error, "unmanaged error mapped to the generic problem");
        return ProblemDescription::internal_server_error();
    };

    managed_problem(managed, request_path, overrides).unwrap_or_else(|| {
        tracing::warn!(
            kind = %managed.kind(),
            status = ?overrides.status,
            "managed error could not be mapped, using the generic problem"
        );
        ProblemDescription::internal_server_error()
    })
}

/// Maps `error` using the path exposed by `context`.
#[must_use]
pub fn map_in_context<C>(error: Option<&(dyn Error + 'static)>, context: &C) -> ProblemDescription
where
    C: RequestContext + ?Sized,
{
    map_to_problem(error, context.current_path())
}

fn find_managed<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a ManagedError> {
    error
        .downcast_ref::<ManagedError>()
        .or_else(|| error.downcast_ref::<Box<ManagedError>>().map(Box::as_ref))
}

fn managed_problem(
    error: &ManagedError,
    request_path: Option<&str>,
    overrides: &ProblemOverrides,
) -> Option<ProblemDescription> {
    let mut problem = catalog::defaults_for(error.kind())?.problem(error.message())?;
    if let Some(status) = overrides.status {
        problem.status = StatusCode::from_u16(status).ok()?;
    }
    if let Some(title) = &overrides.title {
        problem.title.clone_from(title);
    }
    if let Some(type_uri) = &overrides.type_uri {
        problem = problem.with_type(type_uri.as_str());
    }
    Some(match request_path.filter(|path| !path.is_empty()) {
        Some(path) => problem.with_instance(path),
        None => problem,
    })
}

impl ManagedError {
    /// Maps this error; see [`map_to_problem`].
    #[must_use]
    pub fn to_problem(&self, request_path: Option<&str>) -> ProblemDescription {
        map_to_problem(Some(self), request_path)
    }
}

/// Helper trait for converting errors to problem descriptions at the boundary
pub trait IntoProblem {
    fn into_problem(self, request_path: Option<&str>) -> ProblemDescription;
}

impl IntoProblem for ManagedError {
    fn into_problem(self, request_path: Option<&str>) -> ProblemDescription {
        self.to_problem(request_path)
    }
}

impl IntoProblem for BoxError {
    fn into_problem(self, request_path: Option<&str>) -> ProblemDescription {
        let error: &(dyn Error + 'static) = &*self;
        map_to_problem(Some(error), request_path)
    }
}

impl IntoProblem for anyhow::Error {
    fn into_problem(self, request_path: Option<&str>) -> ProblemDescription {
        // anyhow sees through `context()` layers, the plain downcast does not
        if let Some(managed) = self.downcast_ref::<ManagedError>() {
            return managed.to_problem(request_path);
        }
        let error: &(dyn Error + 'static) = &*self;
        map_to_problem(Some(error), request_path)
    }
}
