//! Get User Tool Tests

use serde_json::json;
use wydln_domain::{Error, Tool, ToolArguments};
use wydln_server::handlers::{GetUserHandler, UserRecord};

use crate::test_utils::args;

fn execute(arguments: serde_json::Value) -> serde_json::Value {
    let output = GetUserHandler::new().execute(&args(arguments)).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn test_no_filters_returns_all_users() {
    assert_eq!(
        execute(json!({})),
        json!([
            {"name": "aaaa", "email": "aaaa@gmail.com"},
            {"name": "bbbb", "email": "bbbb@gmail.com"}
        ])
    );
}

#[test]
fn test_name_filter() {
    assert_eq!(
        execute(json!({"name": "aaaa"})),
        json!([{"name": "aaaa", "email": "aaaa@gmail.com"}])
    );
}

#[test]
fn test_email_filter() {
    assert_eq!(
        execute(json!({"email": "bbbb@gmail.com"})),
        json!([{"name": "bbbb", "email": "bbbb@gmail.com"}])
    );
}

#[test]
fn test_unmatched_name_returns_empty_array() {
    assert_eq!(execute(json!({"name": "zzzz"})), json!([]));
}

#[test]
fn test_filters_match_substrings_and_combine() {
    assert_eq!(execute(json!({"email": "gmail"})).as_array().unwrap().len(), 2);
    assert_eq!(
        execute(json!({"name": "aa", "email": "bbbb"})),
        json!([]),
        "both filters must match the same record"
    );
}

#[test]
fn test_null_and_empty_filters_match_everything() {
    assert_eq!(execute(json!({"name": null})).as_array().unwrap().len(), 2);
    assert_eq!(execute(json!({"email": ""})).as_array().unwrap().len(), 2);
}

#[test]
fn test_output_is_compact_json() {
    let output = GetUserHandler::with_users(vec![UserRecord::new("c", "c@x.io")])
        .execute(&ToolArguments::new())
        .unwrap();
    assert_eq!(output, r#"[{"name":"c","email":"c@x.io"}]"#);
}

#[test]
fn test_wrong_argument_type_is_invalid_argument() {
    let err = GetUserHandler::new()
        .execute(&args(json!({"name": 42})))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_schema_advertises_optional_filters() {
    let schema = GetUserHandler::new().input_schema().unwrap();
    let properties = schema["properties"].as_object().unwrap();

    assert_eq!(properties["name"]["description"], "User name to search");
    assert_eq!(properties["email"]["description"], "User email to search");
    let required = schema
        .get("required")
        .and_then(|r| r.as_array())
        .map_or(0, Vec::len);
    assert_eq!(required, 0);
}
