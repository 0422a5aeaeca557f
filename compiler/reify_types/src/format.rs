//! Canonical type rendering.
//!
//! Rendering rules:
//! - classes print their qualified name (`java.util.Map$Entry`, `int[]`)
//! - arrays append `[]` per layer
//! - parameterized types print `raw<a1, a2>` (just `raw` with no arguments)
//! - wildcards print `?`, `? extends U`, or `? super L`; a leading
//!   `java.lang.Object` upper bound prints as `?`
//! - tagged types print `raw:tag1:tag2`
//!
//! Equal values always render identically.

use std::fmt::{self, Write};

use crate::stack::ensure_sufficient_stack;
use crate::{OpaqueType, ParameterizedType, TaggedType, Type, TypeVariable, WildcardType};

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut element = self;
        let mut dimensions = 0;
        while let Type::Array(component) = element {
            element = &**component;
            dimensions += 1;
        }
        ensure_sufficient_stack(|| match element {
            Type::Class(class) => write!(f, "{class}"),
            Type::Array(_) => Ok(()),
            Type::Parameterized(parameterized) => write!(f, "{parameterized}"),
            Type::Wildcard(wildcard) => write!(f, "{wildcard}"),
            Type::Tagged(tagged) => write!(f, "{tagged}"),
            Type::Variable(variable) => write!(f, "{variable}"),
            Type::Opaque(opaque) => write!(f, "{opaque}"),
        })?;
        for _ in 0..dimensions {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl fmt::Display for ParameterizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())?;
        let Some((first, rest)) = self.arguments().split_first() else {
            return Ok(());
        };
        // Type<First
        write!(f, "<{first}")?;
        // Type<First, Second, Third, ...
        for argument in rest {
            write!(f, ", {argument}")?;
        }
        f.write_char('>')
    }
}

impl fmt::Display for WildcardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A lower bound decides the phrasing even though the upper bound is
        // still present (always the top type for `supertype_of`).
        if !self.lower_bounds().is_empty() {
            f.write_str("? super ")?;
            return write_bounds(f, self.lower_bounds());
        }
        // Only the leading upper bound decides between `?` and `extends`.
        if self
            .upper_bounds()
            .first()
            .map_or(true, |bound| matches!(bound, Type::Class(class) if class.is_object()))
        {
            return f.write_char('?');
        }
        f.write_str("? extends ")?;
        write_bounds(f, self.upper_bounds())
    }
}

impl fmt::Display for TaggedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())?;
        for tag in self.tags() {
            write!(f, ":{tag}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OpaqueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Multiple bounds only arise from foreign sources and are joined like an
/// intersection.
fn write_bounds(f: &mut fmt::Formatter<'_>, bounds: &[Type]) -> fmt::Result {
    for (i, bound) in bounds.iter().enumerate() {
        if i > 0 {
            f.write_str(" & ")?;
        }
        write!(f, "{bound}")?;
    }
    Ok(())
}
