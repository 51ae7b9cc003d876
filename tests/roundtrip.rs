//! Display/parse round-trip tests for the vector string format.

use worldvec::{Error, Vector2, Vector3};

#[test]
fn vector2_display_parses_back() {
    for vector in [
        Vector2::default(),
        Vector2::new(1.0, 2.0),
        Vector2::new(0.5, 1234.25),
        Vector2::new(0.0, 0.125),
    ] {
        assert_eq!(Ok(vector), vector.to_string().parse());
        assert_eq!(Some(vector), Vector2::parse(&vector.to_string()));
    }
}

#[test]
fn vector3_display_parses_back() {
    for vector in [
        Vector3::default(),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(0.5, 1234.25, 0.125),
    ] {
        assert_eq!(Ok(vector), vector.to_string().parse());
        assert_eq!(Some(vector), Vector3::parse(&vector.to_string()));
    }
}

#[test]
fn comma_only_form_parses() {
    assert_eq!(Ok(Vector2::new(1.5, 2.0)), "(1.5,2)".parse());
    assert_eq!(Ok(Vector3::new(1.5, 2.0, 0.25)), "(1.5,2,.25)".parse());
}

#[test]
fn component_counts_are_not_interchangeable() {
    assert_eq!(
        Err(Error::ComponentCount {
            expected: 2,
            found: 3,
        }),
        "(1, 2, 3)".parse::<Vector2>()
    );
    assert_eq!(
        Err(Error::ComponentCount {
            expected: 3,
            found: 2,
        }),
        "(1, 2)".parse::<Vector3>()
    );
}

#[test]
fn negative_components_display_but_do_not_parse() {
    let vector = Vector2::new(-1.5, 2.0);
    assert_eq!("(-1.5, 2)", vector.to_string());
    assert_eq!(
        Err(Error::InvalidComponent("-1.5".to_string())),
        vector.to_string().parse::<Vector2>()
    );
}

#[test]
fn surrounding_text_is_rejected() {
    assert!("position: (1, 2)".parse::<Vector2>().is_err());
    assert!("(1, 2) dropped".parse::<Vector2>().is_err());
}
