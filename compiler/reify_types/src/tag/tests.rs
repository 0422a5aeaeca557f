use super::*;
use pretty_assertions::assert_eq;

#[test]
fn conversions() {
    assert_eq!(Tag::from("named"), Tag::Str("named".into()));
    assert_eq!(Tag::from(String::from("named")), Tag::from("named"));
    assert_eq!(Tag::from(7_i64), Tag::Int(7));
    assert_eq!(Tag::from(true), Tag::Bool(true));
}

#[test]
fn display() {
    assert_eq!(Tag::from("Named").to_string(), "Named");
    assert_eq!(Tag::from(-3_i64).to_string(), "-3");
    assert_eq!(Tag::from(false).to_string(), "false");
    assert_eq!(
        Tag::from(Class::named("javax.inject.Singleton")).to_string(),
        "javax.inject.Singleton"
    );
}

#[test]
fn kinds_do_not_collide() {
    assert_ne!(Tag::from("1"), Tag::from(1_i64));
    assert_ne!(Tag::from("true"), Tag::from(true));
}
