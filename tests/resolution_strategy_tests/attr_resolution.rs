//! Attribute-name fallback tests

use super::test_utils::Ducked;
use duckt::{AttrProbe, Duck, Error, ErrorKind, Probe, Target};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn test_attr_returns_first_present() {
    let cases: [(&[&str], &str); 3] = [
        (
            &[
                "non_existent",
                "another_non_existent",
                "try_again",
                "prop",
                "prop2",
                "this_should_not_be_even_tried",
            ],
            "prop",
        ),
        (&["foo", "prop", "some_property"], "foo"),
        (&["some_property", "prop2", "prop"], "some_property"),
    ];

    for (attrs, expected) in cases {
        let obj = Ducked::new(42);
        let duck = Duck::new(&obj);
        assert_eq!(
            duck.attr(attrs).unwrap(),
            obj.get_attr(expected).unwrap(),
            "attrs: {attrs:?}"
        );
    }
}

#[test]
fn test_attr_position_does_not_matter() {
    let absent = ["a", "b", "c", "d"];
    for position in 0..=absent.len() {
        let mut names: Vec<&str> = absent.to_vec();
        names.insert(position, "prop2");

        let obj = Ducked::new(1);
        assert_eq!(Duck::new(&obj).attr(&names).unwrap(), json!(12));
    }
}

#[test]
fn test_attr_stops_at_first_present() {
    let obj = Ducked::new(42);
    let duck = Duck::new(&obj);

    let value = duck
        .attr(["non_existent", "prop", "this_should_not_be_even_tried"])
        .unwrap();

    assert_eq!(value, json!(43));
    assert_eq!(obj.touched(), vec!["non_existent", "prop"]);
}

#[test]
fn test_attr_default() {
    let defaults = [
        json!(12345426),
        json!("string"),
        json!({"a": 1}),
        json!(0),
        json!({}),
        json!([]),
        Value::Null,
    ];
    for default in defaults {
        let obj = Ducked::new(42);
        let duck = Duck::new(&obj);
        assert_eq!(
            duck.attr_or(["bad_property", "nope"], default.clone()).unwrap(),
            default
        );
    }
}

#[test]
fn test_attr_raise() {
    let obj = Ducked::new(42);
    let err = Duck::new(&obj).attr(["bad_property", "nope"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingAttribute);
    match err {
        Error::MissingAttribute(miss) => {
            assert_eq!(miss.target, "Ducked(42)");
            assert_eq!(miss.names, vec!["bad_property", "nope"]);
        }
        other => panic!("expected missing attribute, got {other:?}"),
    }
}

#[test]
fn test_attr_single_missing() {
    let obj = Ducked::new(42);
    let err = Duck::new(&obj).attr(["nonexistent"]).unwrap_err();
    assert_eq!(err.to_string(), "Ducked(42) has no attribute 'nonexistent'");
}

#[test]
fn test_attr_computed_failure_aborts() {
    let obj = Ducked::new(42);
    let duck = Duck::new(&obj);

    let err = duck.attr(["nope", "broken", "prop"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Target);
    assert_eq!(err.to_string(), "Ducked(42) failed: computing broken failed");
    assert!(!obj.touched().contains(&"prop".to_string()));

    let err = duck.attr_or(["broken", "prop"], json!(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Target);
}

#[test]
fn test_attr_computed_miss_counts_as_absent() {
    let obj = Ducked::new(42);
    let duck = Duck::new(&obj);

    assert_eq!(duck.attr(["that_one", "prop"]).unwrap(), json!(43));
    assert_eq!(obj.touched(), vec!["that_one", "nonexistent_inner", "prop"]);

    let err = duck.attr(["nope", "that_one"]).unwrap_err();
    match err {
        Error::MissingAttribute(miss) => {
            assert_eq!(miss.target, "Ducked(42)");
            assert_eq!(miss.names, vec!["nope", "that_one"]);
        }
        other => panic!("expected missing attribute, got {other:?}"),
    }

    assert_eq!(duck.attr_or(["that_one"], json!("d")).unwrap(), json!("d"));
}

#[test]
fn test_attr_empty_candidates() {
    let obj = Ducked::new(42);
    let duck = Duck::new(&obj);
    let none: [&str; 0] = [];

    let err = duck.attr(none).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoCandidates);
    assert_eq!(err.to_string(), "no candidates given to attr for Ducked(42)");

    assert_eq!(duck.attr_or(none, json!(false)).unwrap(), json!(false));
}

#[test]
fn test_attr_owned_names() {
    let obj = Ducked::new(42);
    let names = vec![String::from("missing"), String::from("some_property")];
    assert_eq!(Duck::new(&obj).attr(names).unwrap(), json!(42));
}

#[test]
fn test_attr_on_json_document() {
    let doc = json!({"id": 7, "legacy_id": "0007"});
    let duck = Duck::new(&doc);
    assert_eq!(duck.attr(["uuid", "legacy_id", "id"]).unwrap(), json!("0007"));
    assert_eq!(duck.attr_or(["uuid"], Value::Null).unwrap(), Value::Null);
}

#[test]
fn test_attr_probe_identity() {
    let value = json!({"deep": [1, {"x": null}], "n": 1.5});
    let doc = json!({"x": value.clone()});
    assert_eq!(AttrProbe::new("x").apply(&doc).unwrap(), value);
}

#[test]
fn test_attr_through_trait_object() {
    let obj = Ducked::new(42);
    let target: &dyn Target<Value = Value> = &obj;
    let duck = Duck::new(target);
    assert_eq!(duck.attr(["missing", "prop"]).unwrap(), json!(43));
}
