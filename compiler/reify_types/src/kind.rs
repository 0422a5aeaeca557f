//! Type expression kind discriminant.
//!
//! Each [`Type`](crate::Type) has a `TypeKind` that names its variant.
//! Kinds appear as tracing span fields.

use std::fmt;

/// Type expression variant discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TypeKind {
    // === Terminal (no sub-expressions) ===
    /// Nominal class identity.
    Class = 0,
    /// Unbound generic parameter placeholder.
    Variable = 1,
    /// Foreign shape this library does not recognize.
    Opaque = 2,

    // === Compound ===
    /// Array of a component type.
    Array = 16,
    /// Raw type applied to type arguments.
    Parameterized = 17,
    /// Bounded placeholder `?`, `? extends U`, `? super L`.
    Wildcard = 18,
    /// Type carrying opaque tags.
    Tagged = 19,
}

impl TypeKind {
    /// Check if this kind has no sub-expressions.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        (self as u8) < 16
    }

    /// Get the name of this kind as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Variable => "variable",
            Self::Opaque => "opaque",
            Self::Array => "array",
            Self::Parameterized => "parameterized",
            Self::Wildcard => "wildcard",
            Self::Tagged => "tagged",
        }
    }
}

impl fmt::Debug for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKind::{}", self.name())
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
