use super::*;
use serde_json::json;

#[test]
fn profile_deserializes_with_optional_organization() {
    let profile: Profile = serde_json::from_value(json!({
        "id": "u-1",
        "name": "Aino",
        "organization": { "id": "o-1", "name": "Metsä Oy", "credits": 4 }
    }))
    .unwrap();
    assert_eq!(profile.email, None);
    let org = profile.organization.unwrap();
    assert_eq!(org.name, "Metsä Oy");
    assert_eq!(org.credits, Some(4));
}

#[test]
fn access_token_response_uses_camel_case() {
    let body: AccessTokenResponse = serde_json::from_value(json!({ "accessToken": "jwt" })).unwrap();
    assert_eq!(body.access_token, "jwt");
}
