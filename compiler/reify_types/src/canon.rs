//! Canonicalization of foreign type descriptions.
//!
//! Rebuilds any [`ReflectType`] as a [`Type`] built only from this crate's
//! own variants, so equality and hashing depend on shape alone and never on
//! which implementation produced the input.

use crate::stack::ensure_sufficient_stack;
use crate::{ReflectType, Shape, Type};

/// Rebuild `ty` as an equivalent [`Type`].
///
/// Post-order: children are canonicalized before their parent is rebuilt.
/// Classes, variables, and unrecognized shapes are terminal. The owner of a
/// parameterized input is taken as given, never defaulted.
///
/// Canonicalizing a canonical value returns an equal value.
#[tracing::instrument(level = "trace", skip_all, fields(kind = %ty.shape().kind()))]
pub fn canonicalize(ty: &dyn ReflectType) -> Type {
    rebuild(ty)
}

/// Like [`canonicalize`], but absent input yields absent output.
pub fn canonicalize_opt(ty: Option<&dyn ReflectType>) -> Option<Type> {
    ty.map(canonicalize)
}

fn rebuild(ty: &dyn ReflectType) -> Type {
    ensure_sufficient_stack(|| match ty.shape() {
        Shape::Class(class) => Type::Class(class),
        Shape::GenericArray(component) => Type::array_of(rebuild(component)),
        Shape::Parameterized {
            owner,
            raw,
            arguments,
        } => Type::parameterized_owned(
            owner.map(rebuild),
            rebuild(raw),
            arguments.into_iter().map(rebuild),
        ),
        Shape::Wildcard {
            upper_bounds,
            lower_bounds,
        } => Type::wildcard(
            upper_bounds.into_iter().map(rebuild),
            lower_bounds.into_iter().map(rebuild),
        ),
        Shape::Tagged { raw, tags } => Type::tagged(rebuild(raw), tags.into_owned()),
        Shape::Variable(name) => Type::variable(&*name),
        Shape::Other(description) => {
            tracing::trace!(%description, "passing through unrecognized shape");
            Type::opaque(&*description)
        }
    })
}
