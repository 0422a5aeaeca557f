//! Typed handles pairing a type expression with its erased class.
//!
//! A [`ReifiedType`] is resolved once at construction, so callers that need
//! both the generic shape and the runtime class never erase twice.

use std::fmt;
use std::hash::{Hash, Hasher};

use reify_ir::Class;

use crate::{
    canonicalize, raw_type, ParameterizedType, ReflectType, Shape, TaggedType, Type, TypeError,
    WildcardType,
};

/// A type expression together with the class it erases to.
///
/// Equality and hashing consider the type expression only; the class is
/// derived from it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReifiedType {
    class: Class,
    ty: Type,
}

impl ReifiedType {
    /// Erase `ty` and keep both forms.
    ///
    /// Fails exactly when [`raw_type`] fails.
    pub fn new(ty: Type) -> Result<Self, TypeError> {
        let class = raw_type(&ty)?;
        Ok(ReifiedType { class, ty })
    }

    /// Handle for a plain class; the class is its own type expression.
    pub fn of_class(class: Class) -> Self {
        ReifiedType {
            ty: Type::Class(class.clone()),
            class,
        }
    }

    /// Canonicalize a foreign description, then erase it.
    pub fn reflect(ty: &dyn ReflectType) -> Result<Self, TypeError> {
        Self::new(canonicalize(ty))
    }

    /// The erased class.
    pub fn as_class(&self) -> &Class {
        &self.class
    }

    /// The full type expression.
    pub fn as_type(&self) -> &Type {
        &self.ty
    }

    /// Take the type expression, discarding the class.
    pub fn into_type(self) -> Type {
        self.ty
    }

    /// The array's component, if the expression is a generic array.
    pub fn as_array(&self) -> Option<&Type> {
        self.ty.component()
    }

    pub fn as_parameterized(&self) -> Option<&ParameterizedType> {
        self.ty.as_parameterized()
    }

    pub fn as_wildcard(&self) -> Option<&WildcardType> {
        self.ty.as_wildcard()
    }

    pub fn as_tagged(&self) -> Option<&TaggedType> {
        self.ty.as_tagged()
    }
}

impl PartialEq for ReifiedType {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
    }
}

impl Eq for ReifiedType {}

impl Hash for ReifiedType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.hash(state);
    }
}

impl From<Class> for ReifiedType {
    fn from(class: Class) -> Self {
        ReifiedType::of_class(class)
    }
}

impl TryFrom<Type> for ReifiedType {
    type Error = TypeError;

    fn try_from(ty: Type) -> Result<Self, Self::Error> {
        ReifiedType::new(ty)
    }
}

impl ReflectType for ReifiedType {
    fn shape(&self) -> Shape<'_> {
        self.ty.shape()
    }
}

impl fmt::Display for ReifiedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ty, f)
    }
}
