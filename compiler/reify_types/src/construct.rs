//! Type construction helpers.
//!
//! Provides the validated factories for every type expression variant.
//! Sequences passed in are collected into fresh storage, so callers never
//! share a buffer with the built value.

use std::sync::Arc;

use reify_ir::Class;

use crate::{
    OpaqueType, ParameterizedType, Tag, TaggedType, Type, TypeError, TypeVariable, WildcardType,
};

impl Type {
    // === Terminal Constructors ===

    /// Wrap a nominal class.
    pub fn class(class: Class) -> Self {
        Type::Class(class)
    }

    /// The universal top type `java.lang.Object`.
    pub fn object() -> Self {
        Type::Class(Class::object())
    }

    /// Create an unbound generic parameter placeholder.
    pub fn variable(name: impl Into<Arc<str>>) -> Self {
        Type::Variable(TypeVariable::new(name))
    }

    /// Create a placeholder for a foreign shape this library cannot model.
    pub fn opaque(description: impl Into<Arc<str>>) -> Self {
        Type::Opaque(OpaqueType::new(description))
    }

    // === Array Constructors ===

    /// Create a generic array type `component[]`.
    pub fn array_of(component: Type) -> Self {
        Type::Array(Arc::new(component))
    }

    /// Create `dimension` nested array layers around `component`.
    ///
    /// Dimension 1 is the same as [`Type::array_of`].
    pub fn array_of_dim(component: Type, dimension: u32) -> Result<Self, TypeError> {
        if dimension == 0 {
            return Err(TypeError::InvalidArgument {
                parameter: "dimension",
                value: dimension.into(),
                minimum: 1,
            });
        }
        let mut ty = Type::array_of(component);
        for _ in 1..dimension {
            ty = Type::array_of(ty);
        }
        Ok(ty)
    }

    // === Parameterized Constructors ===

    /// Create a parameterized type with an explicit owner.
    pub fn parameterized_owned(
        owner: Option<Type>,
        raw: Type,
        arguments: impl IntoIterator<Item = Type>,
    ) -> Self {
        Type::Parameterized(Arc::new(ParameterizedType::new(
            owner,
            raw,
            arguments.into_iter().collect(),
        )))
    }

    /// Create a parameterized type `raw<arguments...>`.
    ///
    /// When `raw` is a member class, the owner defaults to its enclosing
    /// class; otherwise there is no owner.
    pub fn parameterized(raw: Type, arguments: impl IntoIterator<Item = Type>) -> Self {
        let owner = raw.as_class().and_then(Class::enclosing).map(Type::Class);
        Type::parameterized_owned(owner, raw, arguments)
    }

    // === Wildcard Constructors ===

    /// Create a wildcard from explicit bound sequences.
    ///
    /// Accepts any number of bounds on either side; erasure only supports
    /// exactly one upper bound.
    pub fn wildcard(
        upper_bounds: impl IntoIterator<Item = Type>,
        lower_bounds: impl IntoIterator<Item = Type>,
    ) -> Self {
        Type::Wildcard(Arc::new(WildcardType::new(
            upper_bounds.into_iter().collect(),
            lower_bounds.into_iter().collect(),
        )))
    }

    /// Create the unbounded wildcard `?`.
    pub fn unbounded() -> Self {
        Type::wildcard([Type::object()], [])
    }

    /// Create `? extends bound`.
    ///
    /// A wildcard bound contributes its own upper bounds, so
    /// `subtype_of(subtype_of(X))` is `subtype_of(X)`.
    pub fn subtype_of(bound: Type) -> Self {
        if let Type::Wildcard(wildcard) = &bound {
            return Type::wildcard(wildcard.upper_bounds().to_vec(), []);
        }
        Type::wildcard([bound], [])
    }

    /// Create `? super bound`.
    ///
    /// The upper bound is always the top type. A wildcard bound contributes
    /// its own lower bounds.
    pub fn supertype_of(bound: Type) -> Self {
        if let Type::Wildcard(wildcard) = &bound {
            return Type::wildcard([Type::object()], wildcard.lower_bounds().to_vec());
        }
        Type::wildcard([Type::object()], [bound])
    }

    // === Tagged Constructor ===

    /// Attach `tags` (in order) to `raw`.
    pub fn tagged(raw: Type, tags: impl IntoIterator<Item = Tag>) -> Self {
        Type::Tagged(Arc::new(TaggedType::new(raw, tags.into_iter().collect())))
    }
}
