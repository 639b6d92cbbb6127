use super::*;

#[test]
fn graphql_codes_map_to_lowercase_keys() {
    let err = ApiError::GraphQl { code: "INSUFFICIENT_CREDITS".to_owned(), message: "no credits".to_owned() };
    assert_eq!(err.code(), Some("INSUFFICIENT_CREDITS"));
    assert_eq!(err.translation_key(), "error.insufficient_credits");
    assert_eq!(err.to_string(), "INSUFFICIENT_CREDITS: no credits");
}

#[test]
fn transport_and_status_keys() {
    assert_eq!(ApiError::Transport("offline".to_owned()).translation_key(), "error.network");
    assert_eq!(ApiError::Status(401).translation_key(), "error.unauthorized");
    assert_eq!(ApiError::Status(500).translation_key(), "error.generic");
    assert_eq!(ApiError::Status(500).code(), None);
}

#[test]
fn export_errors_reuse_token_key() {
    let err = ExportError::Token(ApiError::Status(403));
    assert_eq!(err.translation_key(), "error.unauthorized");
    assert_eq!(ExportError::Download("blob".to_owned()).translation_key(), "error.export");
}
