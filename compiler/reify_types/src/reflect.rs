//! Foreign type boundary.
//!
//! Type descriptions produced elsewhere (a host reflection API, another
//! library's type model) enter this crate through [`ReflectType`]. Each
//! implementation reports its top-level [`Shape`]; [`canonicalize`] walks
//! the shapes and rebuilds them as [`Type`] values.
//!
//! [`canonicalize`]: crate::canonicalize

use std::borrow::Cow;

use reify_ir::Class;

use crate::{Tag, Type, TypeKind};

/// A type description that can report its shape.
pub trait ReflectType {
    /// Describe the top level of this type. Children stay foreign.
    fn shape(&self) -> Shape<'_>;
}

/// Top-level shape of a foreign type description.
pub enum Shape<'a> {
    /// A nominal class.
    Class(Class),
    /// A generic array of the given component.
    GenericArray(&'a dyn ReflectType),
    /// A raw type applied to arguments.
    Parameterized {
        owner: Option<&'a dyn ReflectType>,
        raw: &'a dyn ReflectType,
        arguments: Vec<&'a dyn ReflectType>,
    },
    /// A wildcard with its bound sequences.
    Wildcard {
        upper_bounds: Vec<&'a dyn ReflectType>,
        lower_bounds: Vec<&'a dyn ReflectType>,
    },
    /// A type carrying ordered tags.
    Tagged {
        raw: &'a dyn ReflectType,
        tags: Cow<'a, [Tag]>,
    },
    /// An unbound type variable.
    Variable(Cow<'a, str>),
    /// Anything else, with a description for diagnostics.
    Other(Cow<'a, str>),
}

impl Shape<'_> {
    /// Get the variant this shape canonicalizes to.
    pub fn kind(&self) -> TypeKind {
        match self {
            Shape::Class(_) => TypeKind::Class,
            Shape::GenericArray(_) => TypeKind::Array,
            Shape::Parameterized { .. } => TypeKind::Parameterized,
            Shape::Wildcard { .. } => TypeKind::Wildcard,
            Shape::Tagged { .. } => TypeKind::Tagged,
            Shape::Variable(_) => TypeKind::Variable,
            Shape::Other(_) => TypeKind::Opaque,
        }
    }
}

fn as_dyn(ty: &Type) -> &dyn ReflectType {
    ty
}

impl ReflectType for Type {
    fn shape(&self) -> Shape<'_> {
        match self {
            Type::Class(class) => Shape::Class(class.clone()),
            Type::Array(component) => Shape::GenericArray(&**component),
            Type::Parameterized(parameterized) => Shape::Parameterized {
                owner: parameterized.owner().map(as_dyn),
                raw: parameterized.raw(),
                arguments: parameterized.arguments().iter().map(as_dyn).collect(),
            },
            Type::Wildcard(wildcard) => Shape::Wildcard {
                upper_bounds: wildcard.upper_bounds().iter().map(as_dyn).collect(),
                lower_bounds: wildcard.lower_bounds().iter().map(as_dyn).collect(),
            },
            Type::Tagged(tagged) => Shape::Tagged {
                raw: tagged.raw(),
                tags: Cow::Borrowed(tagged.tags()),
            },
            Type::Variable(variable) => Shape::Variable(Cow::Borrowed(variable.name())),
            Type::Opaque(opaque) => Shape::Other(Cow::Borrowed(opaque.description())),
        }
    }
}

impl ReflectType for Class {
    fn shape(&self) -> Shape<'_> {
        Shape::Class(self.clone())
    }
}
