//! The closed tree of managed error kinds.
//!
//! Every kind has exactly one parent except `Managed`, which is the root:
//!
//! ```text
//! Managed
//!  ├─ Security
//!  │   ├─ Authentication
//!  │   └─ Authorization
//!  ├─ Communications
//!  │   ├─ ExternalAccessDenied
//!  │   └─ Timeout
//!  ├─ Configuration
//!  ├─ Data
//!  │   └─ DataValidation
//!  └─ Logic
//!      └─ UnhandledLogic
//! ```

use std::fmt;

/// Declares the kinds together with everything that is defined per kind, so a
/// new kind can't be added without its parent, name and standard message.
macro_rules! error_kinds {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident {
                name: $name:literal,
                parent: $parent:expr,
                message: $message:literal,
                shorthand: $shorthand:ident $(,)?
            }
        ),+ $(,)?
    ) => {
        /// Kind of a [`ManagedError`](crate::ManagedError).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorKind {
            $( $(#[$meta])* $variant, )+
        }

        impl ErrorKind {
            /// Every kind, root first.
            pub const ALL: &'static [ErrorKind] = &[ $( ErrorKind::$variant, )+ ];

            /// The kind this one specializes. `None` only for [`ErrorKind::Managed`].
            #[must_use]
            pub const fn parent(self) -> Option<ErrorKind> {
                match self {
                    $( ErrorKind::$variant => $parent, )+
                }
            }

            /// Application-safe message used when an error is built without one.
            #[must_use]
            pub const fn standard_message(self) -> &'static str {
                match self {
                    $( ErrorKind::$variant => $message, )+
                }
            }

            /// Stable `snake_case` name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( ErrorKind::$variant => $name, )+
                }
            }
        }

        impl crate::error::ManagedError {
            $(
                #[doc = concat!(
                    "Creates a `", stringify!($variant), "` error carrying the standard message."
                )]
                #[must_use]
                pub fn $shorthand() -> Self {
                    Self::new(ErrorKind::$variant)
                }
            )+
        }
    };
}

error_kinds! {
    /// Root of the tree: any failure the application anticipated.
    Managed {
        name: "managed",
        parent: None,
        message: "A managed error has occurred.",
        shorthand: managed,
    },
    Security {
        name: "security",
        parent: Some(ErrorKind::Managed),
        message: "A security error has occurred.",
        shorthand: security,
    },
    Authentication {
        name: "authentication",
        parent: Some(ErrorKind::Security),
        message: "Authentication failed.",
        shorthand: authentication,
    },
    Authorization {
        name: "authorization",
        parent: Some(ErrorKind::Security),
        message: "The caller is not authorized to perform this operation.",
        shorthand: authorization,
    },
    Communications {
        name: "communications",
        parent: Some(ErrorKind::Managed),
        message: "A communications error has occurred.",
        shorthand: communications,
    },
    /// A remote party refused access to one of its resources.
    ExternalAccessDenied {
        name: "external_access_denied",
        parent: Some(ErrorKind::Communications),
        message: "Access to an external resource was denied.",
        shorthand: external_access_denied,
    },
    Timeout {
        name: "timeout",
        parent: Some(ErrorKind::Communications),
        message: "The operation timed out.",
        shorthand: timeout,
    },
    Configuration {
        name: "configuration",
        parent: Some(ErrorKind::Managed),
        message: "A configuration error has occurred.",
        shorthand: configuration,
    },
    Data {
        name: "data",
        parent: Some(ErrorKind::Managed),
        message: "A data error has occurred.",
        shorthand: data,
    },
    DataValidation {
        name: "data_validation",
        parent: Some(ErrorKind::Data),
        message: "The supplied data failed validation.",
        shorthand: data_validation,
    },
    Logic {
        name: "logic",
        parent: Some(ErrorKind::Managed),
        message: "A logic error has occurred.",
        shorthand: logic,
    },
    /// A code path the application knows about but has no handling for.
    UnhandledLogic {
        name: "unhandled_logic",
        parent: Some(ErrorKind::Logic),
        message: "An unhandled logic error has occurred.",
        shorthand: unhandled_logic,
    },
}

impl ErrorKind {
    /// Walks from this kind up to the root, starting with the kind itself.
    #[must_use]
    pub const fn ancestors(self) -> Ancestors {
        Ancestors { next: Some(self) }
    }

    /// Returns `true` if this kind is `ancestor` or specializes it.
    ///
    /// ```
    /// use cdf_errors::ErrorKind;
    ///
    /// assert!(ErrorKind::Timeout.is(ErrorKind::Communications));
    /// assert!(ErrorKind::Timeout.is(ErrorKind::Managed));
    /// assert!(!ErrorKind::Timeout.is(ErrorKind::Security));
    /// ```
    #[must_use]
    pub fn is(self, ancestor: ErrorKind) -> bool {
        self.ancestors().any(|kind| kind == ancestor)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator returned by [`ErrorKind::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<ErrorKind>,
}

impl Iterator for Ancestors {
    type Item = ErrorKind;

    fn next(&mut self) -> Option<ErrorKind> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn standard_messages_are_fixed() {
        let expected = [
            (ErrorKind::Managed, "A managed error has occurred."),
            (ErrorKind::Security, "A security error has occurred."),
            (ErrorKind::Authentication, "Authentication failed."),
            (
                ErrorKind::Authorization,
                "The caller is not authorized to perform this operation.",
            ),
            (ErrorKind::Communications, "A communications error has occurred."),
            (
                ErrorKind::ExternalAccessDenied,
                "Access to an external resource was denied.",
            ),
            (ErrorKind::Timeout, "The operation timed out."),
            (ErrorKind::Configuration, "A configuration error has occurred."),
            (ErrorKind::Data, "A data error has occurred."),
            (ErrorKind::DataValidation, "The supplied data failed validation."),
            (ErrorKind::Logic, "A logic error has occurred."),
            (ErrorKind::UnhandledLogic, "An unhandled logic error has occurred."),
        ];
        assert_eq!(expected.len(), ErrorKind::ALL.len());
        for (kind, message) in expected {
            assert_eq!(kind.standard_message(), message, "{kind}");
            assert_eq!(crate::ManagedError::new(kind).message(), message, "{kind}");
        }
    }

    #[test]
    fn only_the_root_has_no_parent() {
        for kind in ErrorKind::ALL {
            assert_eq!(
                kind.parent().is_none(),
                *kind == ErrorKind::Managed,
                "unexpected parent for {kind}"
            );
        }
    }

    #[test]
    fn every_kind_reaches_the_root() {
        for kind in ErrorKind::ALL {
            assert_eq!(kind.ancestors().last(), Some(ErrorKind::Managed));
            // the tree is at most three levels deep
            assert!(kind.ancestors().count() <= 3);
        }
    }

    #[test]
    fn ancestors_start_with_the_kind_itself() {
        let chain: Vec<_> = ErrorKind::DataValidation.ancestors().collect();
        assert_eq!(
            chain,
            vec![ErrorKind::DataValidation, ErrorKind::Data, ErrorKind::Managed]
        );
    }

    #[test]
    fn specialization_follows_the_tree() {
        assert!(ErrorKind::Authentication.is(ErrorKind::Security));
        assert!(ErrorKind::Authorization.is(ErrorKind::Security));
        assert!(ErrorKind::ExternalAccessDenied.is(ErrorKind::Communications));
        assert!(ErrorKind::UnhandledLogic.is(ErrorKind::Logic));
        assert!(!ErrorKind::Security.is(ErrorKind::Authentication));
        assert!(!ErrorKind::DataValidation.is(ErrorKind::Logic));
    }

    #[test]
    fn standard_messages_are_unique_and_non_empty() {
        let mut seen = std::collections::HashSet::new();
        for kind in ErrorKind::ALL {
            let message = kind.standard_message();
            assert!(!message.trim().is_empty());
            assert!(seen.insert(message), "duplicate message for {kind}");
        }
    }

    #[test]
    fn display_uses_the_stable_name() {
        assert_eq!(ErrorKind::ExternalAccessDenied.to_string(), "external_access_denied");
    }
}
