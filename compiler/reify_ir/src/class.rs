//! Nominal class identities.
//!
//! A [`Class`] is the erased, non-generic identity of a type: what a
//! parameterized type erases to, and what a type expression ultimately
//! wraps at its leaves.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::Primitive;

/// Qualified name of the universal top type.
pub const OBJECT_NAME: &str = "java.lang.Object";

/// A nominal class identity.
///
/// Equality and hashing are structural: two classes with the same kind,
/// name, and enclosing chain are equal however they were built. Array
/// layers are compared, hashed, rendered, and dropped iteratively, so the
/// dimension count is unbounded.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Class {
    /// A primitive class such as `int` or `void`.
    Primitive(Primitive),
    /// A class, interface, enum, or record declared by name.
    Declared(DeclaredClass),
    /// An array class with the given component class.
    Array(Arc<Class>),
}

/// A class declared by qualified name, possibly nested in another class.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclaredClass(Arc<Declared>);

#[derive(Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Declared {
    /// Binary name: nested classes join their simple name with `$`.
    name: Box<str>,
    enclosing: Option<DeclaredClass>,
}

impl DeclaredClass {
    /// Create a top-level class from its fully-qualified name.
    pub fn top_level(name: impl Into<Box<str>>) -> Self {
        DeclaredClass(Arc::new(Declared {
            name: name.into(),
            enclosing: None,
        }))
    }

    /// Create a member class nested directly inside `enclosing`.
    ///
    /// The binary name is `Enclosing$Simple`, as the host loader spells it.
    pub fn nested(enclosing: &DeclaredClass, simple_name: &str) -> Self {
        DeclaredClass(Arc::new(Declared {
            name: format!("{}${simple_name}", enclosing.name()).into_boxed_str(),
            enclosing: Some(enclosing.clone()),
        }))
    }

    /// Fully-qualified binary name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The class this one is nested in, if any.
    pub fn enclosing(&self) -> Option<&DeclaredClass> {
        self.0.enclosing.as_ref()
    }

    /// Name without package or enclosing-class prefix.
    pub fn simple_name(&self) -> &str {
        let name = self.name();
        let separator = if self.0.enclosing.is_some() { '$' } else { '.' };
        name.rsplit_once(separator).map_or(name, |(_, simple)| simple)
    }

    /// Package of the outermost enclosing class (empty for the default package).
    pub fn package(&self) -> &str {
        let mut outermost = self;
        while let Some(enclosing) = outermost.enclosing() {
            outermost = enclosing;
        }
        outermost
            .name()
            .rsplit_once('.')
            .map_or("", |(package, _)| package)
    }

    /// Check if this is the universal top type.
    pub fn is_object(&self) -> bool {
        self.0.enclosing.is_none() && &*self.0.name == OBJECT_NAME
    }
}

impl Class {
    /// The universal top type `java.lang.Object`.
    pub fn object() -> Self {
        Class::named(OBJECT_NAME)
    }

    /// Create a top-level declared class from its qualified name.
    pub fn named(name: impl Into<Box<str>>) -> Self {
        Class::Declared(DeclaredClass::top_level(name))
    }

    /// Create a member class nested inside `enclosing`.
    pub fn nested(enclosing: &DeclaredClass, simple_name: &str) -> Self {
        Class::Declared(DeclaredClass::nested(enclosing, simple_name))
    }

    /// Create the one-dimensional array class of `self`.
    #[must_use]
    pub fn array(&self) -> Self {
        Class::Array(Arc::new(self.clone()))
    }

    /// Create the array class with `dimension` more dimensions than `self`.
    ///
    /// Dimensions compose: an array of `String[]` with one dimension is
    /// `String[][]`, not `String[]`.
    #[must_use]
    pub fn array_of(&self, dimension: NonZeroU32) -> Self {
        let mut class = self.array();
        for _ in 1..dimension.get() {
            class = class.array();
        }
        class
    }

    /// Check if this is a primitive class (including `void`).
    pub fn is_primitive(&self) -> bool {
        matches!(self, Class::Primitive(_))
    }

    /// Check if this is an array class.
    pub fn is_array(&self) -> bool {
        matches!(self, Class::Array(_))
    }

    /// Check if this is the universal top type.
    pub fn is_object(&self) -> bool {
        matches!(self, Class::Declared(declared) if declared.is_object())
    }

    /// Get the primitive, if this is one.
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Class::Primitive(primitive) => Some(*primitive),
            _ => None,
        }
    }

    /// Get the declared class, if this is one.
    pub fn as_declared(&self) -> Option<&DeclaredClass> {
        match self {
            Class::Declared(declared) => Some(declared),
            _ => None,
        }
    }

    /// The natural enclosing class of a nested declared class.
    pub fn enclosing(&self) -> Option<Class> {
        self.as_declared()?
            .enclosing()
            .map(|enclosing| Class::Declared(enclosing.clone()))
    }

    /// Component class of an array class.
    pub fn component(&self) -> Option<&Class> {
        match self {
            Class::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Innermost non-array class (`self` for non-arrays).
    pub fn element(&self) -> &Class {
        let mut class = self;
        while let Class::Array(component) = class {
            class = &**component;
        }
        class
    }

    /// Number of array dimensions (0 for non-arrays).
    pub fn dimensions(&self) -> u32 {
        let mut count = 0;
        let mut class = self;
        while let Class::Array(component) = class {
            class = &**component;
            count += 1;
        }
        count
    }

    /// Name the host loader uses for this class.
    ///
    /// Identical to the display name except for arrays, which use the
    /// descriptor encoding: `[Ljava.lang.String;`, `[[I`.
    pub fn binary_name(&self) -> String {
        match self {
            Class::Array(_) => {
                let mut buf = String::new();
                self.write_descriptor(&mut buf);
                buf
            }
            _ => self.to_string(),
        }
    }

    fn write_descriptor(&self, buf: &mut String) {
        for _ in 0..self.dimensions() {
            buf.push('[');
        }
        match self.element() {
            Class::Primitive(primitive) => buf.push(primitive.descriptor()),
            Class::Declared(declared) => {
                buf.push('L');
                buf.push_str(declared.name());
                buf.push(';');
            }
            Class::Array(_) => {}
        }
    }
}

/// Move a uniquely owned component out of its `Arc`, leaving a trivial
/// class behind.
fn take_unique(component: &mut Arc<Class>) -> Option<Class> {
    Arc::get_mut(component)
        .map(|inner| std::mem::replace(inner, Class::Primitive(Primitive::Void)))
}

impl Drop for Class {
    fn drop(&mut self) {
        let Class::Array(component) = self else {
            return;
        };
        let mut next = take_unique(component);
        while let Some(mut class) = next {
            next = match &mut class {
                Class::Array(component) => take_unique(component),
                _ => None,
            };
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self, other);
        while let (Class::Array(a), Class::Array(b)) = (lhs, rhs) {
            if Arc::ptr_eq(a, b) {
                return true;
            }
            lhs = &**a;
            rhs = &**b;
        }
        match (lhs, rhs) {
            (Class::Primitive(a), Class::Primitive(b)) => a == b,
            (Class::Declared(a), Class::Declared(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Class {}

impl Hash for Class {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimensions().hash(state);
        match self.element() {
            Class::Primitive(primitive) => {
                state.write_u8(0);
                primitive.hash(state);
            }
            Class::Declared(declared) => {
                state.write_u8(1);
                declared.hash(state);
            }
            Class::Array(_) => {}
        }
    }
}

impl From<Primitive> for Class {
    fn from(primitive: Primitive) -> Self {
        Class::Primitive(primitive)
    }
}

impl From<DeclaredClass> for Class {
    fn from(declared: DeclaredClass) -> Self {
        Class::Declared(declared)
    }
}

impl fmt::Display for DeclaredClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for DeclaredClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclaredClass({})", self.name())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::Primitive(primitive) => f.write_str(primitive.name()),
            Class::Declared(declared) => f.write_str(declared.name()),
            Class::Array(_) => {
                write!(f, "{}", self.element())?;
                for _ in 0..self.dimensions() {
                    f.write_str("[]")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({self})")
    }
}

#[cfg(test)]
mod tests;
