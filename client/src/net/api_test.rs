use serde_json::json;

use super::*;

#[test]
fn error_from_status_prefers_graphql_envelope() {
    let body = json!({
        "data": null,
        "errors": [{ "message": "no credits", "extensions": { "code": "INSUFFICIENT_CREDITS" } }]
    });
    assert_eq!(
        error_from_status(400, Some(body)),
        ApiError::GraphQl { code: "INSUFFICIENT_CREDITS".to_owned(), message: "no credits".to_owned() }
    );
}

#[test]
fn error_from_status_falls_back_to_status() {
    assert_eq!(error_from_status(502, None), ApiError::Status(502));
    assert_eq!(error_from_status(500, Some(json!({ "data": null }))), ApiError::Status(500));
    assert_eq!(error_from_status(500, Some(json!("gateway"))), ApiError::Status(500));
}

#[test]
fn transport_wraps_display_text() {
    assert_eq!(transport("connection reset"), ApiError::Transport("connection reset".to_owned()));
}
