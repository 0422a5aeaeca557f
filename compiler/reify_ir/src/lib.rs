//! Reify IR - nominal type identities.
//!
//! This crate models the "class tokens" of a host reflective type system:
//! - Primitive classes (`int`, `boolean`, ..., `void`)
//! - Declared classes, optionally nested inside an enclosing class
//! - Array classes, synthesized directly from their component class
//!
//! Every value is immutable and compared structurally. Two classes built
//! independently from the same name and enclosing chain are equal and hash
//! identically; no registry or global cache is involved.
//!
//! # Array Classes
//!
//! Array classes are first-class values. Requesting an array of an array
//! class composes dimensions:
//!
//! ```
//! use std::num::NonZeroU32;
//! use reify_ir::Class;
//!
//! let string = Class::named("java.lang.String");
//! let one = NonZeroU32::MIN;
//! let grid = string.array_of(one).array_of(one);
//! assert_eq!(grid.to_string(), "java.lang.String[][]");
//! assert_eq!(grid.binary_name(), "[[Ljava.lang.String;");
//! ```

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-cloned types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod class;
mod primitive;

pub use class::{Class, DeclaredClass, OBJECT_NAME};
pub use primitive::Primitive;

// Class is cloned into every type expression that mentions it.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Class, Primitive};
    // Class: discriminant + one Arc pointer
    crate::static_assert_size!(Class, 16);
    crate::static_assert_size!(Primitive, 1);
}
