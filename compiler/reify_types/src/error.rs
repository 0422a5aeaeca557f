//! Type expression errors.
//!
//! Every error is returned at the point of detection. Nothing in this crate
//! recovers from or retries an error.

use std::fmt;

use crate::Type;

/// Error from constructing or erasing a type expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeError {
    /// A required input was absent.
    NullArgument {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A numeric argument fell below its minimum.
    ///
    /// Example: an array dimension of 0.
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The value supplied.
        value: i64,
        /// Smallest accepted value.
        minimum: i64,
    },

    /// A type expression cannot be erased to a class.
    UnsupportedType {
        /// The offending expression.
        ty: Type,
        /// Why it was rejected.
        reason: UnsupportedReason,
    },
}

/// Why a type expression was rejected during erasure.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnsupportedReason {
    /// Wildcard with an upper-bound count other than one.
    UpperBounds {
        /// Number of upper bounds present.
        found: usize,
    },
    /// Shape outside the known variants.
    UnrecognizedShape,
}

impl UnsupportedReason {
    /// Get a human-readable description of this reason.
    pub fn description(&self) -> String {
        match self {
            Self::UpperBounds { found } => {
                let plural = if *found == 1 { "" } else { "s" };
                format!("wildcards with {found} upper bound{plural} are not supported")
            }
            Self::UnrecognizedShape => "unrecognized type shape".to_string(),
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument { parameter } => {
                write!(f, "required argument `{parameter}` is absent")
            }
            Self::InvalidArgument {
                parameter,
                value,
                minimum,
            } => {
                write!(f, "illegal {parameter}: {value} (must be at least {minimum})")
            }
            Self::UnsupportedType { ty, reason } => {
                write!(f, "unsupported type `{ty}`: {}", reason.description())
            }
        }
    }
}

impl std::error::Error for TypeError {}
