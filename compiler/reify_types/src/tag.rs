//! Opaque tag values attached to tagged types.
//!
//! Tags are metadata (qualifiers, markers) and never type expressions
//! themselves. Order is significant: `T:a:b` and `T:b:a` differ.

use std::fmt;
use std::sync::Arc;

use reify_ir::Class;

/// An opaque, hashable tag value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// Free-form text tag.
    Str(Arc<str>),
    /// Integer tag.
    Int(i64),
    /// Boolean tag.
    Bool(bool),
    /// A class used as a marker (e.g. a qualifier annotation type).
    Class(Class),
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::Str(value.into())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::Str(value.into())
    }
}

impl From<i64> for Tag {
    fn from(value: i64) -> Self {
        Tag::Int(value)
    }
}

impl From<bool> for Tag {
    fn from(value: bool) -> Self {
        Tag::Bool(value)
    }
}

impl From<Class> for Tag {
    fn from(value: Class) -> Self {
        Tag::Class(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Str(text) => f.write_str(text),
            Tag::Int(value) => write!(f, "{value}"),
            Tag::Bool(value) => write!(f, "{value}"),
            Tag::Class(class) => write!(f, "{class}"),
        }
    }
}

#[cfg(test)]
mod tests;
