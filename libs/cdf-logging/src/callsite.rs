//! Call-site identity attached to every record.
//!
//! Rust has no caller-member attribute, so the facade takes a [`CallSite`]
//! argument. The [`call_site!`](crate::call_site) macro fills it in at the call
//! expression; callers without the macro pass member and line themselves.

/// Where a logging call was made.
///
/// Holds the raw function path; it is only shortened to a member name when a
/// record is actually built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// `function` may be a full path (`crate::orders::submit`) or a bare name.
    #[must_use]
    pub const fn new(function: &'static str, line: u32) -> Self {
        Self { function, line }
    }

    /// Name of the calling function, without module path or closure markers.
    #[must_use]
    pub fn member(&self) -> &'static str {
        member_name(self.function)
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Strips a function path down to the member name.
///
/// `call_site!` sees the path of a marker function nested in the caller, so
/// the marker segment and any closure segments are dropped first.
#[must_use]
pub fn member_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::site_marker").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Captures the enclosing function and line as a [`CallSite`].
///
/// ```
/// fn submit_order() -> cdf_logging::CallSite {
///     cdf_logging::call_site!()
/// }
///
/// assert_eq!(submit_order().member(), "submit_order");
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn site_marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallSite::new(type_name_of(site_marker), ::std::line!())
    }};
}
