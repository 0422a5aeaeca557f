use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn dim(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

#[test]
fn test_structural_equality() {
    let a = Class::named("java.lang.String");
    let b = Class::named(String::from("java.lang.String"));
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b); // duplicate
    set.insert(Class::named("java.lang.Number"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_object() {
    assert!(Class::object().is_object());
    assert!(!Class::named("java.lang.String").is_object());
    assert!(!Class::object().array().is_object());
    assert_eq!(Class::object().to_string(), OBJECT_NAME);
}

#[test]
fn test_nested_names() {
    let map = DeclaredClass::top_level("java.util.Map");
    let entry = DeclaredClass::nested(&map, "Entry");

    assert_eq!(entry.name(), "java.util.Map$Entry");
    assert_eq!(entry.simple_name(), "Entry");
    assert_eq!(entry.package(), "java.util");
    assert_eq!(entry.enclosing(), Some(&map));
    assert_eq!(map.simple_name(), "Map");
    assert_eq!(map.enclosing(), None);
}

#[test]
fn test_nested_differs_from_top_level_with_same_name() {
    let outer = DeclaredClass::top_level("a.Outer");
    let nested = Class::nested(&outer, "Inner");
    let flat = Class::named("a.Outer$Inner");
    assert_eq!(nested.to_string(), flat.to_string());
    assert_ne!(nested, flat);
}

#[test]
fn test_enclosing_class() {
    let map = DeclaredClass::top_level("java.util.Map");
    let entry = Class::nested(&map, "Entry");
    assert_eq!(entry.enclosing(), Some(Class::Declared(map)));
    assert_eq!(Class::named("java.util.List").enclosing(), None);
    assert_eq!(Class::Primitive(Primitive::Int).enclosing(), None);
}

#[test]
fn test_default_package() {
    let class = DeclaredClass::top_level("Main");
    assert_eq!(class.package(), "");
    assert_eq!(class.simple_name(), "Main");
}

#[test]
fn test_array_dimensions_compose() {
    let string = Class::named("java.lang.String");
    let once = string.array_of(dim(1));
    let twice = once.array_of(dim(1));

    assert_eq!(once.dimensions(), 1);
    assert_eq!(twice.dimensions(), 2);
    assert_eq!(twice, string.array_of(dim(2)));
    assert_eq!(twice.element(), &string);
    assert_eq!(twice.component(), Some(&once));
    assert_eq!(string.component(), None);
}

#[test]
fn test_display() {
    let list = Class::named("java.util.List");
    assert_eq!(list.to_string(), "java.util.List");
    assert_eq!(list.array_of(dim(3)).to_string(), "java.util.List[][][]");
    assert_eq!(Class::from(Primitive::Int).array().to_string(), "int[]");
    assert_eq!(format!("{list:?}"), "Class(java.util.List)");
}

#[test]
fn test_binary_name() {
    let list = Class::named("java.util.List");
    assert_eq!(list.binary_name(), "java.util.List");
    assert_eq!(list.array_of(dim(3)).binary_name(), "[[[Ljava.util.List;");
    assert_eq!(Class::from(Primitive::Int).binary_name(), "int");
    assert_eq!(Class::from(Primitive::Int).array().binary_name(), "[I");
    assert_eq!(
        Class::from(Primitive::Boolean).array_of(dim(2)).binary_name(),
        "[[Z"
    );
}

#[test]
fn test_kind_queries() {
    let int = Class::from(Primitive::Int);
    assert!(int.is_primitive());
    assert_eq!(int.as_primitive(), Some(Primitive::Int));
    assert!(!int.array().is_primitive());
    assert!(int.array().is_array());
    assert!(Class::named("java.lang.String").as_declared().is_some());
    assert!(int.as_declared().is_none());
}

#[test]
fn test_deep_array_class() {
    let depth = 100_000;
    let string = Class::named("java.lang.String");
    let a = string.array_of(dim(depth));
    let b = string.array_of(dim(depth));

    assert!(a == b);
    assert!(a != Class::named("java.lang.Number").array_of(dim(depth)));
    assert!(a != string.array_of(dim(depth - 1)));

    let mut set = HashSet::new();
    set.insert(a.clone());
    assert!(set.contains(&b));

    let layers = usize::try_from(depth).unwrap_or(usize::MAX);
    let rendered = a.to_string();
    assert_eq!(rendered.len(), "java.lang.String".len() + 2 * layers);
    assert!(rendered.ends_with("String[][]"));
    assert_eq!(a.binary_name().len(), layers + "Ljava.lang.String;".len());

    drop(set);
    drop(a);
    drop(b);
}

#[test]
fn test_shared_components_survive_drop() {
    let inner = Class::named("java.lang.String").array_of(dim(3));
    let outer = inner.array();
    drop(outer);
    assert_eq!(inner.to_string(), "java.lang.String[][][]");
}
