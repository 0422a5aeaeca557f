//! Type expression definitions.
//!
//! [`Type`] is a closed sum over the shapes a reified generic type can take.
//! Compound payloads live behind `Arc` so sub-expressions are shared rather
//! than copied; nothing is ever mutated after construction.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use reify_ir::{Class, Primitive};

use crate::stack::ensure_sufficient_stack;
use crate::{Tag, TypeKind};

/// A reified type expression.
///
/// Equality and hashing are structural and recursive: two expressions are
/// equal iff their variants and all attributes are equal. Array layers are
/// compared, hashed, and dropped in a loop; other nesting runs under the
/// stack guard.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Nominal class identity: `java.lang.String`, `int`, `long[]`.
    Class(Class),

    /// Generic array: `List<String>[]`. Nesting models extra dimensions.
    Array(Arc<Type>),

    /// Raw type applied to type arguments: `Map<K, V>`.
    Parameterized(Arc<ParameterizedType>),

    /// Bounded placeholder: `?`, `? extends U`, `? super L`.
    Wildcard(Arc<WildcardType>),

    /// Type carrying ordered opaque tags: `T:Tag1:Tag2`.
    Tagged(Arc<TaggedType>),

    /// Unbound generic parameter placeholder such as `T`.
    Variable(TypeVariable),

    /// Foreign shape passed through canonicalization unrecognized.
    Opaque(OpaqueType),
}

/// Payload of [`Type::Parameterized`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterizedType {
    owner: Option<Type>,
    raw: Type,
    /// Positional: order is significant.
    arguments: Box<[Type]>,
}

/// Payload of [`Type::Wildcard`].
///
/// Factories populate a single bound, but storage keeps full sequences so
/// multi-bound wildcards from foreign sources survive canonicalization.
/// Erasure rejects them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildcardType {
    upper_bounds: Box<[Type]>,
    lower_bounds: Box<[Type]>,
}

/// Payload of [`Type::Tagged`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedType {
    raw: Type,
    tags: Box<[Tag]>,
}

/// Unbound generic parameter, identified by name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeVariable(Arc<str>);

/// Description of an unrecognized foreign type shape.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpaqueType(Arc<str>);

impl ParameterizedType {
    pub(crate) fn new(owner: Option<Type>, raw: Type, arguments: Box<[Type]>) -> Self {
        ParameterizedType {
            owner,
            raw,
            arguments,
        }
    }

    /// Enclosing type, for member classes of generic classes.
    pub fn owner(&self) -> Option<&Type> {
        self.owner.as_ref()
    }

    /// The generic type being applied.
    pub fn raw(&self) -> &Type {
        &self.raw
    }

    /// Type arguments in declaration order.
    pub fn arguments(&self) -> &[Type] {
        &self.arguments
    }
}

impl WildcardType {
    pub(crate) fn new(upper_bounds: Box<[Type]>, lower_bounds: Box<[Type]>) -> Self {
        WildcardType {
            upper_bounds,
            lower_bounds,
        }
    }

    /// Upper (`extends`) bounds.
    pub fn upper_bounds(&self) -> &[Type] {
        &self.upper_bounds
    }

    /// Lower (`super`) bounds.
    pub fn lower_bounds(&self) -> &[Type] {
        &self.lower_bounds
    }

    /// Check if the upper bounds say nothing beyond the top type.
    pub fn has_trivial_upper_bound(&self) -> bool {
        match &*self.upper_bounds {
            [] => true,
            [Type::Class(class)] => class.is_object(),
            _ => false,
        }
    }

    /// Check if this is the unbounded wildcard `?`.
    pub fn is_unbounded(&self) -> bool {
        self.lower_bounds.is_empty() && self.has_trivial_upper_bound()
    }
}

impl TaggedType {
    pub(crate) fn new(raw: Type, tags: Box<[Tag]>) -> Self {
        TaggedType { raw, tags }
    }

    /// The tagged type without tag information.
    pub fn raw(&self) -> &Type {
        &self.raw
    }

    /// Tags in attachment order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl TypeVariable {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        TypeVariable(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl OpaqueType {
    pub fn new(description: impl Into<Arc<str>>) -> Self {
        OpaqueType(description.into())
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

impl Type {
    /// Get the variant discriminant.
    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Class(_) => TypeKind::Class,
            Type::Array(_) => TypeKind::Array,
            Type::Parameterized(_) => TypeKind::Parameterized,
            Type::Wildcard(_) => TypeKind::Wildcard,
            Type::Tagged(_) => TypeKind::Tagged,
            Type::Variable(_) => TypeKind::Variable,
            Type::Opaque(_) => TypeKind::Opaque,
        }
    }

    /// Check if this is a primitive class (including `void`).
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Class(class) if class.is_primitive())
    }

    /// Get the class, if this is a nominal class.
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Type::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Get the component, if this is a generic array.
    pub fn component(&self) -> Option<&Type> {
        match self {
            Type::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Get the payload, if this is a parameterized type.
    pub fn as_parameterized(&self) -> Option<&ParameterizedType> {
        match self {
            Type::Parameterized(parameterized) => Some(parameterized),
            _ => None,
        }
    }

    /// Get the payload, if this is a wildcard.
    pub fn as_wildcard(&self) -> Option<&WildcardType> {
        match self {
            Type::Wildcard(wildcard) => Some(wildcard),
            _ => None,
        }
    }

    /// Get the payload, if this is a tagged type.
    pub fn as_tagged(&self) -> Option<&TaggedType> {
        match self {
            Type::Tagged(tagged) => Some(tagged),
            _ => None,
        }
    }

    /// Check if this is the unbounded wildcard `?`.
    pub fn is_unbounded_wildcard(&self) -> bool {
        matches!(self, Type::Wildcard(wildcard) if wildcard.is_unbounded())
    }

    /// Check if this type is fully available at runtime.
    ///
    /// Classes are reifiable; so are arrays and tagged forms of reifiable
    /// types, and parameterized types whose arguments are all `?` and whose
    /// owner (if any) is reifiable.
    pub fn is_reifiable(&self) -> bool {
        ensure_sufficient_stack(|| match self {
            Type::Class(_) => true,
            Type::Array(component) => component.is_reifiable(),
            Type::Tagged(tagged) => tagged.raw().is_reifiable(),
            Type::Parameterized(parameterized) => {
                parameterized.owner().map_or(true, Type::is_reifiable)
                    && parameterized.raw().is_reifiable()
                    && parameterized
                        .arguments()
                        .iter()
                        .all(Type::is_unbounded_wildcard)
            }
            Type::Wildcard(_) | Type::Variable(_) | Type::Opaque(_) => false,
        })
    }
}

/// Move a uniquely owned component out of its `Arc`, leaving a trivial
/// type behind.
fn take_unique(component: &mut Arc<Type>) -> Option<Type> {
    Arc::get_mut(component)
        .map(|inner| std::mem::replace(inner, Type::Class(Class::Primitive(Primitive::Void))))
}

impl Drop for Type {
    fn drop(&mut self) {
        let Type::Array(component) = self else {
            return;
        };
        let mut next = take_unique(component);
        while let Some(mut ty) = next {
            next = match &mut ty {
                Type::Array(component) => take_unique(component),
                _ => None,
            };
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self, other);
        while let (Type::Array(a), Type::Array(b)) = (lhs, rhs) {
            if Arc::ptr_eq(a, b) {
                return true;
            }
            lhs = &**a;
            rhs = &**b;
        }
        ensure_sufficient_stack(|| match (lhs, rhs) {
            (Type::Class(a), Type::Class(b)) => a == b,
            (Type::Parameterized(a), Type::Parameterized(b)) => a == b,
            (Type::Wildcard(a), Type::Wildcard(b)) => a == b,
            (Type::Tagged(a), Type::Tagged(b)) => a == b,
            (Type::Variable(a), Type::Variable(b)) => a == b,
            (Type::Opaque(a), Type::Opaque(b)) => a == b,
            _ => false,
        })
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut ty = self;
        while let Type::Array(component) = ty {
            TypeKind::Array.hash(state);
            ty = &**component;
        }
        ensure_sufficient_stack(|| {
            ty.kind().hash(state);
            match ty {
                Type::Class(class) => class.hash(state),
                Type::Parameterized(parameterized) => parameterized.hash(state),
                Type::Wildcard(wildcard) => wildcard.hash(state),
                Type::Tagged(tagged) => tagged.hash(state),
                Type::Variable(variable) => variable.hash(state),
                Type::Opaque(opaque) => opaque.hash(state),
                Type::Array(_) => {}
            }
        });
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Type::Class(class) => f.debug_tuple("Class").field(class).finish(),
            Type::Array(component) => f.debug_tuple("Array").field(component).finish(),
            Type::Parameterized(parameterized) => {
                f.debug_tuple("Parameterized").field(parameterized).finish()
            }
            Type::Wildcard(wildcard) => f.debug_tuple("Wildcard").field(wildcard).finish(),
            Type::Tagged(tagged) => f.debug_tuple("Tagged").field(tagged).finish(),
            Type::Variable(variable) => f.debug_tuple("Variable").field(variable).finish(),
            Type::Opaque(opaque) => f.debug_tuple("Opaque").field(opaque).finish(),
        })
    }
}

impl From<Class> for Type {
    fn from(class: Class) -> Self {
        Type::Class(class)
    }
}

impl From<TypeVariable> for Type {
    fn from(variable: TypeVariable) -> Self {
        Type::Variable(variable)
    }
}
