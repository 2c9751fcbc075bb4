//! End-to-end scenarios: rules attached to fields, fields to a collection.

use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn signup() -> Collection {
    let username = rules![is_required(), is_alpha_numeric(), is_length_between(3, 10)];
    Collection::new().append([
        Field::new("username", "wilhelm").append(username),
        Field::new("email", "wilhelm@gmail.com")
            .append(rules![is_required(), is_email()]),
        Field::new("password", "root")
            .append(rules![is_required(), is_length_between(2, 10)]),
        Field::new("password-confirm", "root")
            .append(matches("root")),
    ])
}

fn failing_foo() -> Field {
    let chain = rules![is_length_between(1, 1), is_email()];
    Field::new("foo", "bar").append(chain)
}

#[rstest]
fn valid_signup_passes(mut signup: Collection) {
    assert!(signup.run());
    assert!(signup.errors().is_none());
}

#[rstest]
fn collated_results_match_each_field(mut signup: Collection) {
    signup.push(failing_foo());

    let expected: Vec<(String, bool)> = signup
        .iter()
        .map(|field| (field.title().to_owned(), field.run().passed))
        .collect();
    let actual: Vec<(String, bool)> = signup
        .run_collated()
        .iter()
        .map(|record| (record.field.clone(), record.passed))
        .collect();

    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 5);
}

#[rstest]
fn failing_field_short_circuits(mut signup: Collection) {
    signup.push(failing_foo());

    assert!(!signup.run());
    let foo = signup
        .results()
        .iter()
        .find(|record| record.field == "foo")
        .cloned()
        .expect("foo record");

    assert_eq!(
        foo,
        CollatedRecord {
            field: "foo".into(),
            value: json!("bar"),
            passed: false,
            errors: Some(vec!["String `bar` length is not within `1` and `1`".into()]),
        }
    );
}

#[rstest]
fn errors_view_snapshot(mut signup: Collection) {
    signup.push(failing_foo().stop_on_first_error(false));
    signup.run();

    insta::assert_json_snapshot!(signup.errors(), @r###"
    {
      "foo": [
        "String `bar` length is not within `1` and `1`",
        "This is not a valid email address."
      ]
    }
    "###);
}

#[rstest]
fn repeated_runs_do_not_accumulate(mut signup: Collection) {
    for _ in 0..3 {
        signup.run();
    }
    assert_eq!(signup.results().len(), 4);
    assert_eq!(signup.run_collated().len(), 4);
}

#[rstest]
fn form_reflects_fields_without_running(signup: Collection) {
    let form = signup.form();
    assert_eq!(
        serde_json::to_value(&form).unwrap(),
        json!({
            "username": "wilhelm",
            "email": "wilhelm@gmail.com",
            "password": "root",
            "password-confirm": "root",
        })
    );
    assert!(signup.results().is_empty());
}

#[test]
fn type_mismatch_names_both_kinds() {
    let tags = Field::new("tags", json!({"a": 1}))
        .append(is_type(ValueKind::List));
    let mut collection = Collection::new().append(tags);

    let records = collection.run_collated();
    assert_eq!(
        records[0].errors.as_deref(),
        Some(&["Type of `mapping` is not of type `list`".to_string()][..])
    );
}

#[test]
fn optional_field_with_format_rule() {
    let website = regex("^https?://").unwrap().pass_on_blank();
    let mut collection = Collection::new().append([
        Field::new("nickname", "")
            .append(is_alpha().pass_on_blank()),
        Field::new("website", "   ").append(website),
        Field::new("phone", "abc")
            .append(is_numeric().pass_on_blank()),
    ]);

    assert!(!collection.run());
    let errors = collection.errors().expect("phone fails");
    assert_eq!(errors.keys().collect::<Vec<_>>(), ["phone"]);
}

#[test]
fn custom_messages_flow_into_results() {
    let rule = matches("root").with_message("Passwords do not match");
    let confirm = Field::new("password-confirm", "toor").append(rule);
    let mut collection = Collection::new().append(confirm);

    collection.run();
    assert_eq!(
        collection.errors().unwrap()["password-confirm"],
        ["Passwords do not match"]
    );
}
