//! Host boundary with optional inputs.
//!
//! Mirrors a host reflection API in which any handle may be absent. Every
//! function checks its required inputs first, failing with
//! [`TypeError::NullArgument`] naming the missing one, then canonicalizes
//! the present inputs and delegates to the typed factories.
//!
//! ```
//! use reify_types::{host, Class, TypeError};
//!
//! let err = host::array_of(None).err();
//! assert_eq!(err, Some(TypeError::NullArgument { parameter: "component" }));
//!
//! let string = Class::named("java.lang.String");
//! let ty = host::array_of_dim(Some(&string), 2);
//! assert_eq!(ty.map(|t| t.to_string()).ok(), Some("java.lang.String[][]".into()));
//! ```

use reify_ir::Class;

use crate::{ReflectType, Tag, Type, TypeError};

fn require<T>(value: Option<T>, parameter: &'static str) -> Result<T, TypeError> {
    value.ok_or(TypeError::NullArgument { parameter })
}

fn require_type(
    ty: Option<&dyn ReflectType>,
    parameter: &'static str,
) -> Result<Type, TypeError> {
    require(ty, parameter).map(crate::canonicalize)
}

fn dimension(value: i32) -> Result<u32, TypeError> {
    match u32::try_from(value) {
        Ok(dimension) if dimension > 0 => Ok(dimension),
        _ => Err(TypeError::InvalidArgument {
            parameter: "dimension",
            value: value.into(),
            minimum: 1,
        }),
    }
}

fn canonical_all(types: &[&dyn ReflectType]) -> Vec<Type> {
    types.iter().map(|ty| crate::canonicalize(*ty)).collect()
}

/// See [`Type::array_of`].
pub fn array_of(component: Option<&dyn ReflectType>) -> Result<Type, TypeError> {
    Ok(Type::array_of(require_type(component, "component")?))
}

/// See [`Type::array_of_dim`].
pub fn array_of_dim(
    component: Option<&dyn ReflectType>,
    dimension: i32,
) -> Result<Type, TypeError> {
    let component = require_type(component, "component")?;
    Type::array_of_dim(component, self::dimension(dimension)?)
}

/// See [`Type::parameterized_owned`]. The owner may be absent.
pub fn parameterized_owned(
    owner: Option<&dyn ReflectType>,
    raw: Option<&dyn ReflectType>,
    arguments: &[&dyn ReflectType],
) -> Result<Type, TypeError> {
    let raw = require_type(raw, "raw")?;
    let owner = crate::canonicalize_opt(owner);
    Ok(Type::parameterized_owned(owner, raw, canonical_all(arguments)))
}

/// See [`Type::parameterized`].
pub fn parameterized(
    raw: Option<&dyn ReflectType>,
    arguments: &[&dyn ReflectType],
) -> Result<Type, TypeError> {
    let raw = require_type(raw, "raw")?;
    Ok(Type::parameterized(raw, canonical_all(arguments)))
}

/// See [`Type::subtype_of`].
pub fn subtype_of(bound: Option<&dyn ReflectType>) -> Result<Type, TypeError> {
    Ok(Type::subtype_of(require_type(bound, "bound")?))
}

/// See [`Type::supertype_of`].
pub fn supertype_of(bound: Option<&dyn ReflectType>) -> Result<Type, TypeError> {
    Ok(Type::supertype_of(require_type(bound, "bound")?))
}

/// See [`Type::tagged`]. Tags are copied in order.
pub fn tagged(raw: Option<&dyn ReflectType>, tags: Option<&[Tag]>) -> Result<Type, TypeError> {
    let raw = require_type(raw, "raw")?;
    let tags = require(tags, "tags")?;
    Ok(Type::tagged(raw, tags.iter().cloned()))
}

/// See [`crate::raw_type`].
pub fn raw_type(ty: Option<&dyn ReflectType>) -> Result<Class, TypeError> {
    crate::raw_type(&require_type(ty, "type")?)
}

/// See [`crate::array_class`].
pub fn array_class(component: Option<&Class>, dimension: i32) -> Result<Class, TypeError> {
    let component = require(component, "component")?;
    crate::array_class(component, self::dimension(dimension)?)
}

/// Like [`crate::canonicalize`], but absence is an error.
///
/// Use [`crate::canonicalize_opt`] to propagate absence instead.
pub fn canonicalize(ty: Option<&dyn ReflectType>) -> Result<Type, TypeError> {
    require_type(ty, "type")
}

#[cfg(test)]
mod tests;
