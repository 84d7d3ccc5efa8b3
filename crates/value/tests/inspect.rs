//! Inspect forms of chains and built values.

use insta::assert_snapshot;
use serde_json::json;
use tessera_value::prelude::*;

fn user() -> StructType {
    StructType::builder("User")
        .attribute("first_name")
        .attribute("tags")
        .build()
}

#[test]
fn test_chain_structure() {
    assert_snapshot!(format!("{:?}", user()), @"User");
    assert_snapshot!(format!("{:?}", user().list().maybe()), @"<Either <List User> | null>");
    assert_snapshot!(format!("{:?}", user().valid().list()), @"<List <Valid User>>");
    assert_snapshot!(
        format!("{:?}", user().either_present_or("xxx")),
        @r#"<Either User | <blank> as "xxx">"#
    );
    assert_snapshot!(format!("{:?}", user().guard("xxx")), @r#"<Either User | "xxx">"#);
    assert_snapshot!(
        format!("{:?}", wrap_fn("to_i", Ok).either_present_or_undefined()),
        @"<Either <Base to_i> | <blank> as undefined>"
    );
    assert_snapshot!(format!("{:?}", wrap(Value::from(42))), @"<Base 42>");
}

#[test]
fn test_built_records() {
    let joe = user()
        .new(json!({"first_name": "Joe", "tags": ["a", "b"]}))
        .unwrap();
    assert_snapshot!(format!("{joe:?}"), @r#"User[{"first_name": "Joe", "tags": ["a", "b"]}]"#);

    let empty = user().new(Value::Null).unwrap();
    assert_snapshot!(format!("{empty:?}"), @"User[{}]");
}

#[test]
fn test_built_texts() {
    let name = TextType::new("Name").transform(|s| s.to_uppercase());
    let built = name.list().new(vec!["ann", "bo"]).unwrap();
    assert_snapshot!(format!("{built:?}"), @r#"[Name["ANN"], Name["BO"]]"#);
}

#[test]
fn test_errors() {
    let error = StructType::builder("User")
        .attribute("first_name")
        .validates("first_name", presence())
        .build()
        .valid()
        .new(json!({}))
        .unwrap_err();
    assert_snapshot!(error.to_string(), @"User is invalid: first_name can't be blank");

    let error = user().new(json!("joe")).unwrap_err();
    assert_snapshot!(error.to_string(), @r#"User expected mapping, got "joe""#);
}
