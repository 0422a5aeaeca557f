//! Raw-type resolution (erasure).
//!
//! Reduces a type expression to the nominal [`Class`] it erases to:
//!
//! | Expression            | Erases to                        |
//! |-----------------------|----------------------------------|
//! | class                 | itself                           |
//! | `raw<args>`           | erasure of `raw`                 |
//! | `raw:tags`            | erasure of `raw`                 |
//! | `C[]...[]` (depth d)  | d-dimensional array of erased C  |
//! | `? extends U`         | erasure of `U`                   |
//! | type variable         | `java.lang.Object`               |

use std::num::NonZeroU32;

use reify_ir::Class;

use crate::stack::ensure_sufficient_stack;
use crate::{Type, TypeError, TypeVariable, UnsupportedReason};

/// Resolve the class `ty` erases to.
///
/// Fails with [`TypeError::UnsupportedType`] for wildcards without exactly
/// one upper bound, and for opaque shapes.
#[tracing::instrument(level = "trace", skip_all, fields(kind = %ty.kind()))]
pub fn raw_type(ty: &Type) -> Result<Class, TypeError> {
    resolve(ty)
}

/// Erase an unbound type variable.
///
/// Nothing is known statically about a variable, so it always erases to the
/// universal top type.
pub fn erase_variable(_variable: &TypeVariable) -> Class {
    Class::object()
}

/// Build the `dimension`-dimensional array class over `component`.
///
/// Dimensions compose: if `component` is already an array class, the new
/// layers are added on top of it.
pub fn array_class(component: &Class, dimension: u32) -> Result<Class, TypeError> {
    let Some(dimension) = NonZeroU32::new(dimension) else {
        return Err(TypeError::InvalidArgument {
            parameter: "dimension",
            value: 0,
            minimum: 1,
        });
    };
    Ok(component.array_of(dimension))
}

fn resolve(ty: &Type) -> Result<Class, TypeError> {
    ensure_sufficient_stack(|| match ty {
        Type::Class(class) => Ok(class.clone()),
        Type::Parameterized(parameterized) => resolve(parameterized.raw()),
        Type::Tagged(tagged) => resolve(tagged.raw()),
        Type::Array(component) => resolve_array(component),
        Type::Wildcard(wildcard) => match wildcard.upper_bounds() {
            [bound] => resolve(bound),
            bounds => {
                tracing::debug!(%ty, found = bounds.len(), "rejecting wildcard bounds");
                Err(TypeError::UnsupportedType {
                    ty: ty.clone(),
                    reason: UnsupportedReason::UpperBounds {
                        found: bounds.len(),
                    },
                })
            }
        },
        Type::Variable(variable) => Ok(erase_variable(variable)),
        Type::Opaque(_) => {
            tracing::debug!(%ty, "rejecting unrecognized shape");
            Err(TypeError::UnsupportedType {
                ty: ty.clone(),
                reason: UnsupportedReason::UnrecognizedShape,
            })
        }
    })
}

/// Erase a generic array whose outermost component is `component`.
fn resolve_array(mut component: &Type) -> Result<Class, TypeError> {
    let mut depth = NonZeroU32::MIN;
    while let Type::Array(inner) = component {
        depth = depth.saturating_add(1);
        component = &**inner;
    }
    let element = match component {
        Type::Variable(variable) => erase_variable(variable),
        other => resolve(other)?,
    };
    Ok(element.array_of(depth))
}

impl Type {
    /// Resolve the class this type erases to. See [`raw_type`].
    pub fn raw_class(&self) -> Result<Class, TypeError> {
        raw_type(self)
    }
}
