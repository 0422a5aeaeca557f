//! Reified generic type expressions.
//!
//! A [`Type`] describes a generic type shape at runtime: a raw class, an
//! array of some component, a class applied to type arguments, a wildcard
//! with bounds, or a type carrying opaque tags. Values are immutable and
//! compared structurally, so two expressions with the same shape are equal
//! and hash alike however they were built.
//!
//! # Pipeline
//!
//! ```text
//! factories (Type::array_of, Type::parameterized, ...)
//!     → canonicalize (foreign shapes → Type)
//!     → raw_type (Type → erased Class)
//!     → Display (canonical rendering)
//! ```
//!
//! # Example
//!
//! ```
//! use reify_types::{raw_type, Class, Type};
//!
//! let list = Type::class(Class::named("java.util.List"));
//! let string = Type::class(Class::named("java.lang.String"));
//! let ty = Type::parameterized(list, [Type::subtype_of(string)]);
//!
//! assert_eq!(ty.to_string(), "java.util.List<? extends java.lang.String>");
//! assert_eq!(raw_type(&ty).map(|c| c.to_string()).ok(), Some("java.util.List".into()));
//! ```

mod canon;
mod construct;
mod error;
mod expr;
mod flags;
mod format;
pub mod host;
mod kind;
mod raw;
mod reflect;
mod reified;
mod stack;
mod tag;
mod traverse;

pub use canon::{canonicalize, canonicalize_opt};
pub use error::{TypeError, UnsupportedReason};
pub use expr::{OpaqueType, ParameterizedType, TaggedType, Type, TypeVariable, WildcardType};
pub use flags::TypeFlags;
pub use kind::TypeKind;
pub use raw::{array_class, erase_variable, raw_type};
pub use reflect::{ReflectType, Shape};
pub use reified::ReifiedType;
pub use tag::Tag;
pub use traverse::TypeVisitor;

// Nominal identities are part of this crate's public surface.
pub use reify_ir::{Class, DeclaredClass, Primitive, OBJECT_NAME};

// Size assertions to prevent accidental regressions.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{TypeFlags, TypeKind};
    reify_ir::static_assert_size!(TypeKind, 1);
    reify_ir::static_assert_size!(TypeFlags, 2);
}
