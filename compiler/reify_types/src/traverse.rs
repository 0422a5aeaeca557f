//! Type traversal.
//!
//! [`TypeVisitor`] walks a type expression without modifying it. Override a
//! `visit_*` method to observe one variant; the defaults recurse into every
//! child in declaration order (owner, raw, arguments; upper then lower
//! bounds).
//!
//! # Example
//! ```
//! use reify_types::{Type, TypeVariable, TypeVisitor};
//!
//! struct CountVariables(usize);
//!
//! impl TypeVisitor for CountVariables {
//!     fn visit_variable(&mut self, _variable: &TypeVariable) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let ty = Type::parameterized(Type::variable("M"), [Type::variable("K")]);
//! let mut counter = CountVariables(0);
//! counter.visit(&ty);
//! assert_eq!(counter.0, 2);
//! ```

use reify_ir::Class;
use rustc_hash::FxHashSet;

use crate::stack::ensure_sufficient_stack;
use crate::{OpaqueType, ParameterizedType, TaggedType, Type, TypeVariable, WildcardType};

/// Trait for visiting type expressions without modification.
pub trait TypeVisitor {
    /// Visit a type by dispatching to variant-specific methods.
    fn visit(&mut self, ty: &Type) {
        ensure_sufficient_stack(|| match ty {
            Type::Class(class) => self.visit_class(class),
            Type::Array(component) => self.visit_array(component),
            Type::Parameterized(parameterized) => self.visit_parameterized(parameterized),
            Type::Wildcard(wildcard) => self.visit_wildcard(wildcard),
            Type::Tagged(tagged) => self.visit_tagged(tagged),
            Type::Variable(variable) => self.visit_variable(variable),
            Type::Opaque(opaque) => self.visit_opaque(opaque),
        });
    }

    /// Visit a nominal class.
    fn visit_class(&mut self, _class: &Class) {}

    /// Visit a generic array. Default visits the component.
    fn visit_array(&mut self, component: &Type) {
        self.visit(component);
    }

    /// Visit a parameterized type. Default visits owner, raw, and arguments.
    fn visit_parameterized(&mut self, parameterized: &ParameterizedType) {
        if let Some(owner) = parameterized.owner() {
            self.visit(owner);
        }
        self.visit(parameterized.raw());
        for argument in parameterized.arguments() {
            self.visit(argument);
        }
    }

    /// Visit a wildcard. Default visits upper, then lower bounds.
    fn visit_wildcard(&mut self, wildcard: &WildcardType) {
        for bound in wildcard.upper_bounds() {
            self.visit(bound);
        }
        for bound in wildcard.lower_bounds() {
            self.visit(bound);
        }
    }

    /// Visit a tagged type. Default visits the raw type; tags are opaque.
    fn visit_tagged(&mut self, tagged: &TaggedType) {
        self.visit(tagged.raw());
    }

    /// Visit a type variable.
    fn visit_variable(&mut self, _variable: &TypeVariable) {}

    /// Visit an unrecognized foreign shape.
    fn visit_opaque(&mut self, _opaque: &OpaqueType) {}
}

/// Collects distinct type variables in first-appearance order.
#[derive(Default)]
struct VariableCollector {
    seen: FxHashSet<TypeVariable>,
    variables: Vec<TypeVariable>,
}

impl TypeVisitor for VariableCollector {
    fn visit_variable(&mut self, variable: &TypeVariable) {
        if self.seen.insert(variable.clone()) {
            self.variables.push(variable.clone());
        }
    }
}

/// Collects distinct classes in first-appearance order.
#[derive(Default)]
struct ClassCollector {
    seen: FxHashSet<Class>,
    classes: Vec<Class>,
}

impl TypeVisitor for ClassCollector {
    fn visit_class(&mut self, class: &Class) {
        if self.seen.insert(class.clone()) {
            self.classes.push(class.clone());
        }
    }
}

impl Type {
    /// Distinct type variables mentioned anywhere in this expression.
    pub fn type_variables(&self) -> Vec<TypeVariable> {
        let mut collector = VariableCollector::default();
        collector.visit(self);
        collector.variables
    }

    /// Distinct classes mentioned anywhere in this expression.
    ///
    /// Includes owners, raw types, arguments, bounds, and array classes
    /// exactly as written (no erasure is performed).
    pub fn referenced_classes(&self) -> Vec<Class> {
        let mut collector = ClassCollector::default();
        collector.visit(self);
        collector.classes
    }
}
