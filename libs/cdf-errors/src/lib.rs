//! Managed errors and their problem descriptions
//!
//! This crate provides pure data types plus one pure mapping function, with no
//! dependencies on HTTP frameworks. It includes:
//! - the closed tree of managed error kinds (`ErrorKind`)
//! - the error value built on it (`ManagedError`)
//! - RFC 9457 shaped problem descriptions (`ProblemDescription`)
//! - the mapper that turns any error into a problem description (`map_to_problem`)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod context;
pub mod error;
pub mod kind;
pub mod mapper;
pub mod problem;

// Re-export commonly used types
pub use catalog::ProblemDefaults;
pub use context::{NoRequest, RequestContext};
pub use error::{BoxError, ManagedError, ManagedResultExt};
pub use kind::{Ancestors, ErrorKind};
pub use mapper::{IntoProblem, ProblemOverrides, map_in_context, map_to_problem, map_to_problem_with};
pub use problem::{APPLICATION_PROBLEM_JSON, GENERIC_DETAIL, ProblemDescription};
