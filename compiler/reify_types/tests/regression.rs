//! Regression tests for the worked examples of type erasure and rendering.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::hash::BuildHasher;

use pretty_assertions::assert_eq;
use reify_types::{
    array_class, host, raw_type, Class, DeclaredClass, Primitive, Tag, Type, TypeError,
    UnsupportedReason,
};
use rustc_hash::FxBuildHasher;

fn list() -> Class {
    Class::named("java.util.List")
}

fn string() -> Class {
    Class::named("java.lang.String")
}

fn number() -> Class {
    Class::named("java.lang.Number")
}

#[test]
fn primitives_are_primitive() {
    let names = [
        "boolean", "char", "byte", "short", "int", "long", "float", "double", "void",
    ];
    for name in names {
        let primitive = Primitive::from_name(name).unwrap();
        assert!(Type::class(Class::from(primitive)).is_primitive(), "{name}");
    }
    assert!(!Type::class(string()).is_primitive());
    assert!(!Type::class(Class::object()).is_primitive());
}

#[test]
fn array_class_synthesis() {
    assert_eq!(array_class(&string(), 1).unwrap(), string().array());
    assert_eq!(
        array_class(&string().array(), 1).unwrap(),
        string().array().array()
    );
    assert_eq!(
        array_class(&string(), 0),
        Err(TypeError::InvalidArgument {
            parameter: "dimension",
            value: 0,
            minimum: 1,
        })
    );
    assert_eq!(
        host::array_class(None, 1),
        Err(TypeError::NullArgument {
            parameter: "component"
        })
    );
}

#[test]
fn generic_array_erasure() {
    let ty = Type::array_of(Type::parameterized(
        Type::class(list()),
        [Type::class(string())],
    ));
    assert_eq!(raw_type(&ty).unwrap(), list().array());
    assert_eq!(
        host::raw_type(None),
        Err(TypeError::NullArgument { parameter: "type" })
    );
}

#[test]
fn wildcard_erasure() {
    let extends_list = Type::subtype_of(Type::class(list()));
    let super_number = Type::supertype_of(Type::class(number()));
    assert_eq!(raw_type(&extends_list).unwrap(), list());
    assert_eq!(raw_type(&super_number).unwrap(), Class::object());
}

#[test]
fn nested_generics_erasure() {
    let list_of_extends_string = Type::parameterized(
        Type::class(list()),
        [Type::subtype_of(Type::class(string()))],
    );
    let array = Type::array_of_dim(list_of_extends_string, 3).unwrap();
    assert_eq!(
        array.to_string(),
        "java.util.List<? extends java.lang.String>[][][]"
    );

    let wildcard = Type::subtype_of(array.clone());
    assert_eq!(
        wildcard.to_string(),
        "? extends java.util.List<? extends java.lang.String>[][][]"
    );

    let ty = Type::parameterized(Type::class(list()), [wildcard.clone()]);
    assert_eq!(
        ty.to_string(),
        "java.util.List<? extends java.util.List<? extends java.lang.String>[][][]>"
    );

    let list3 = list().array().array().array();
    assert_eq!(raw_type(&Type::class(string())).unwrap(), string());
    assert_eq!(raw_type(&array).unwrap(), list3);
    assert_eq!(raw_type(&wildcard).unwrap(), list3);
    assert_eq!(raw_type(&ty).unwrap(), list());
}

#[test]
fn dimension_composition() {
    let x = Type::class(string());
    let nested = Type::array_of_dim(Type::array_of_dim(x.clone(), 2).unwrap(), 1).unwrap();
    let flat = Type::array_of_dim(x, 3).unwrap();
    assert_eq!(raw_type(&nested), raw_type(&flat));
    assert_eq!(nested, flat);
}

#[test]
fn wildcard_rendering() {
    let x = Type::class(string());
    assert_eq!(
        Type::subtype_of(x.clone()).to_string(),
        "? extends java.lang.String"
    );
    assert_eq!(
        Type::supertype_of(Type::class(number())).to_string(),
        "? super java.lang.Number"
    );
    assert_eq!(
        Type::subtype_of(Type::subtype_of(x.clone())),
        Type::subtype_of(x)
    );
    assert_eq!(Type::unbounded().to_string(), "?");
}

#[test]
fn nested_member_owner() {
    let map = DeclaredClass::top_level("java.util.Map");
    let entry = Class::nested(&map, "Entry");
    let ty = Type::parameterized(
        Type::class(entry),
        [Type::class(string()), Type::class(number())],
    );
    assert_eq!(
        ty.as_parameterized().and_then(|p| p.owner()),
        Some(&Type::class(Class::Declared(map)))
    );
    assert_eq!(
        ty.to_string(),
        "java.util.Map$Entry<java.lang.String, java.lang.Number>"
    );
}

#[test]
fn validation() {
    assert!(matches!(
        Type::array_of_dim(Type::class(string()), 0),
        Err(TypeError::InvalidArgument { value: 0, .. })
    ));
    assert_eq!(
        host::subtype_of(None),
        Err(TypeError::NullArgument { parameter: "bound" })
    );

    let two_bounds = Type::wildcard([Type::class(number()), Type::class(string())], []);
    assert_eq!(
        raw_type(&two_bounds),
        Err(TypeError::UnsupportedType {
            ty: two_bounds.clone(),
            reason: UnsupportedReason::UpperBounds { found: 2 },
        })
    );
}

#[test]
fn tag_order_is_significant() {
    let x = Type::class(string());
    let ab = Type::tagged(x.clone(), [Tag::from("a"), Tag::from("b")]);
    let ba = Type::tagged(x, [Tag::from("b"), Tag::from("a")]);
    assert_ne!(ab, ba);
    assert_eq!(ab.to_string(), "java.lang.String:a:b");
}

#[test]
fn deep_arrays_stay_on_the_stack() {
    let depth = 100_000;
    let build = |element: Class| Type::array_of_dim(Type::class(element), depth).unwrap();
    let a = build(string());
    let b = build(string());

    assert!(a == b);
    assert!(a != build(number()));
    assert_eq!(FxBuildHasher.hash_one(&a), FxBuildHasher.hash_one(&b));

    let class = raw_type(&a).unwrap();
    assert_eq!(class.dimensions(), depth);
    let layers = usize::try_from(depth).unwrap();
    let rendered = class.to_string();
    assert_eq!(rendered.len(), "java.lang.String".len() + 2 * layers);
    assert_eq!(a.to_string(), rendered);

    drop(class);
    drop(a);
    drop(b);
}

#[test]
fn shared_array_components_survive_drop() {
    let inner = Type::array_of_dim(Type::class(string()), 3).unwrap();
    let outer = Type::array_of(inner.clone());
    drop(outer);
    assert_eq!(inner.to_string(), "java.lang.String[][][]");
}
