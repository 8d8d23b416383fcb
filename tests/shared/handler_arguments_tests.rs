use confluence_domain_handlers::shared::interfaces::handlers::{
    handler_arguments::HandlerArguments, handler_error::HandlerError,
};
use serde_json::json;

#[test]
fn parse_treats_null_as_empty_arguments() {
    let arguments = HandlerArguments::parse(json!(null)).expect("null is accepted");

    assert!(arguments.get("pageId").is_none());
    assert_eq!(arguments.limit().expect("no limit"), None);
}

#[test]
fn parse_rejects_non_object_payloads() {
    let result = HandlerArguments::parse(json!(["pageId"]));

    assert!(matches!(
        result,
        Err(HandlerError::InvalidArgument(message)) if message == "arguments must be an object, received object"
    ));
    assert!(matches!(
        HandlerArguments::parse(json!("123")),
        Err(HandlerError::InvalidArgument(_))
    ));
}

#[test]
fn identifier_reports_missing_argument_as_undefined() {
    let arguments = HandlerArguments::parse(json!({})).expect("object");

    let error = arguments
        .identifier("pageId", "Page ID")
        .expect_err("missing id");

    assert_eq!(error.to_string(), "Expected string, received undefined");
}

#[test]
fn optional_identifier_allows_absent_and_null_values() {
    let arguments = HandlerArguments::parse(json!({ "parentId": null })).expect("object");

    assert_eq!(
        arguments
            .optional_identifier("parentId", "Parent ID")
            .expect("null allowed"),
        None
    );
    assert_eq!(
        arguments
            .optional_identifier("spaceKey", "Space key")
            .expect("absent allowed"),
        None
    );
}

#[test]
fn optional_identifier_rejects_blank_values() {
    let arguments = HandlerArguments::parse(json!({ "parentId": "   " })).expect("object");

    let error = arguments
        .optional_identifier("parentId", "Parent ID")
        .expect_err("blank rejected");

    assert_eq!(error.to_string(), "Parent ID cannot be empty");
}

#[test]
fn optional_text_keeps_content_verbatim() {
    let arguments =
        HandlerArguments::parse(json!({ "content": "  <p>hi</p>  ", "cursor": 12 })).expect("object");

    assert_eq!(
        arguments.optional_text("content").expect("string"),
        Some("  <p>hi</p>  ".to_string())
    );
    assert_eq!(
        arguments
            .optional_text("cursor")
            .expect_err("number is not text")
            .to_string(),
        "Expected string, received number"
    );
}

#[test]
fn limit_must_be_within_bounds() {
    let valid = HandlerArguments::parse(json!({ "limit": 25 })).expect("object");
    assert_eq!(valid.limit().expect("valid limit"), Some(25));

    for invalid in [json!(0), json!(251), json!(-1), json!("10"), json!(2.5)] {
        let arguments = HandlerArguments::parse(json!({ "limit": invalid })).expect("object");
        assert!(matches!(
            arguments.limit(),
            Err(HandlerError::InvalidArgument(_))
        ));
    }
}

#[test]
fn start_accepts_zero() {
    let arguments = HandlerArguments::parse(json!({ "start": 0 })).expect("object");

    assert_eq!(arguments.start().expect("valid start"), Some(0));
}
