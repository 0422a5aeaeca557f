use super::*;
use pretty_assertions::assert_eq;

fn null(parameter: &'static str) -> TypeError {
    TypeError::NullArgument { parameter }
}

fn invalid(value: i64) -> TypeError {
    TypeError::InvalidArgument {
        parameter: "dimension",
        value,
        minimum: 1,
    }
}

#[test]
fn absent_inputs_are_named() {
    assert_eq!(array_of(None), Err(null("component")));
    assert_eq!(array_of_dim(None, 2), Err(null("component")));
    assert_eq!(parameterized(None, &[]), Err(null("raw")));
    assert_eq!(parameterized_owned(None, None, &[]), Err(null("raw")));
    assert_eq!(subtype_of(None), Err(null("bound")));
    assert_eq!(supertype_of(None), Err(null("bound")));
    assert_eq!(tagged(None, Some(&[])), Err(null("raw")));
    assert_eq!(raw_type(None), Err(null("type")));
    assert_eq!(array_class(None, 1), Err(null("component")));
    assert_eq!(canonicalize(None), Err(null("type")));
}

#[test]
fn absent_tags_are_rejected() {
    let string = Class::named("java.lang.String");
    assert_eq!(tagged(Some(&string), None), Err(null("tags")));
}

#[test]
fn absence_is_checked_before_dimension() {
    assert_eq!(array_of_dim(None, 0), Err(null("component")));
    assert_eq!(array_class(None, -1), Err(null("component")));
}

#[test]
fn dimension_must_be_positive() {
    let string = Class::named("java.lang.String");
    assert_eq!(array_of_dim(Some(&string), 0), Err(invalid(0)));
    assert_eq!(array_of_dim(Some(&string), -4), Err(invalid(-4)));
    assert_eq!(array_class(Some(&string), 0), Err(invalid(0)));
}

#[test]
fn present_inputs_delegate() {
    let list = Class::named("java.util.List");
    let string = Class::named("java.lang.String");

    let ty = parameterized(Some(&list), &[&string]);
    assert_eq!(
        ty.as_ref().map(ToString::to_string),
        Ok("java.util.List<java.lang.String>".to_string())
    );

    let ty = subtype_of(Some(&string)).map(|t| t.to_string());
    assert_eq!(ty, Ok("? extends java.lang.String".to_string()));

    let ty = supertype_of(Some(&string)).map(|t| t.to_string());
    assert_eq!(ty, Ok("? super java.lang.String".to_string()));

    let tags = [Tag::from("a"), Tag::from(true)];
    let ty = tagged(Some(&list), Some(&tags)).map(|t| t.to_string());
    assert_eq!(ty, Ok("java.util.List:a:true".to_string()));
}

#[test]
fn owner_may_be_absent() {
    let list = Class::named("java.util.List");
    let ty = parameterized_owned(None, Some(&list), &[]);
    assert_eq!(ty.map(|t| t.as_parameterized().map(|p| p.owner().is_none())), Ok(Some(true)));
}

#[test]
fn erasure_through_host() {
    let list = Class::named("java.util.List");
    let string = Class::named("java.lang.String");
    let generic = Type::parameterized(Type::class(list.clone()), [Type::class(string)]);
    let array = Type::array_of(generic);
    assert_eq!(raw_type(Some(&array)), Ok(list.array()));
    assert_eq!(array_class(Some(&list.array()), 1), Ok(list.array().array()));
}
