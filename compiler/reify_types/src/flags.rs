//! Type expression summary flags.
//!
//! `TypeFlags` answer "does this expression contain X?" questions in one
//! walk. Flags are organized into categories:
//! - **Presence flags**: what occurs anywhere in the expression
//! - **Category flags**: what the root expression is

use bitflags::bitflags;
use reify_ir::Class;

use crate::{
    OpaqueType, ParameterizedType, TaggedType, Type, TypeVariable, TypeVisitor, WildcardType,
};

bitflags! {
    /// Summary of a type expression's contents.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u16 {
        // === Presence Flags (bits 0-7) ===

        /// Contains a generic array or an array class.
        const HAS_ARRAY = 1 << 0;
        /// Contains a parameterized type.
        const HAS_PARAMETERIZED = 1 << 1;
        /// Contains a wildcard.
        const HAS_WILDCARD = 1 << 2;
        /// Contains a tagged type.
        const HAS_TAGS = 1 << 3;
        /// Contains an unbound type variable.
        const HAS_VARIABLE = 1 << 4;
        /// Contains an unrecognized foreign shape.
        const HAS_OPAQUE = 1 << 5;

        // === Category Flags (bits 8-15) ===

        /// Root is a nominal class.
        const IS_CLASS = 1 << 8;
        /// Root is a primitive class.
        const IS_PRIMITIVE = 1 << 9;
    }
}

impl TypeFlags {
    /// Check if the expression is generic in any way.
    #[inline]
    pub const fn is_generic(self) -> bool {
        self.intersects(
            Self::HAS_PARAMETERIZED
                .union(Self::HAS_WILDCARD)
                .union(Self::HAS_VARIABLE),
        )
    }

    /// Check if erasure might fail on this expression.
    ///
    /// Opaque shapes always fail; wildcards fail when malformed.
    #[inline]
    pub const fn may_fail_erasure(self) -> bool {
        self.intersects(Self::HAS_OPAQUE.union(Self::HAS_WILDCARD))
    }
}

struct FlagCollector(TypeFlags);

impl TypeVisitor for FlagCollector {
    fn visit_class(&mut self, class: &Class) {
        if class.is_array() {
            self.0 |= TypeFlags::HAS_ARRAY;
        }
    }

    fn visit_array(&mut self, component: &Type) {
        self.0 |= TypeFlags::HAS_ARRAY;
        self.visit(component);
    }

    fn visit_parameterized(&mut self, parameterized: &ParameterizedType) {
        self.0 |= TypeFlags::HAS_PARAMETERIZED;
        if let Some(owner) = parameterized.owner() {
            self.visit(owner);
        }
        self.visit(parameterized.raw());
        for argument in parameterized.arguments() {
            self.visit(argument);
        }
    }

    fn visit_wildcard(&mut self, wildcard: &WildcardType) {
        self.0 |= TypeFlags::HAS_WILDCARD;
        for bound in wildcard.upper_bounds().iter().chain(wildcard.lower_bounds()) {
            self.visit(bound);
        }
    }

    fn visit_tagged(&mut self, tagged: &TaggedType) {
        self.0 |= TypeFlags::HAS_TAGS;
        self.visit(tagged.raw());
    }

    fn visit_variable(&mut self, _variable: &TypeVariable) {
        self.0 |= TypeFlags::HAS_VARIABLE;
    }

    fn visit_opaque(&mut self, _opaque: &OpaqueType) {
        self.0 |= TypeFlags::HAS_OPAQUE;
    }
}

impl Type {
    /// Compute the summary flags of this expression.
    pub fn flags(&self) -> TypeFlags {
        let mut collector = FlagCollector(TypeFlags::empty());
        collector.visit(self);
        let mut flags = collector.0;
        if let Type::Class(class) = self {
            flags |= TypeFlags::IS_CLASS;
            if class.is_primitive() {
                flags |= TypeFlags::IS_PRIMITIVE;
            }
        }
        flags
    }
}
