use super::*;

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(
        ApiError::from_status(401, Some("jwt expired".to_owned())),
        ApiError::Unauthorized
    );
}

#[test]
fn status_4xx_keeps_server_message() {
    assert_eq!(
        ApiError::from_status(400, Some("Invalid password".to_owned())),
        ApiError::Rejected("Invalid password".to_owned())
    );
}

#[test]
fn status_4xx_without_message_uses_fallback() {
    let err = ApiError::from_status(403, None);
    match err {
        ApiError::Rejected(message) => assert!(!message.is_empty()),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn message_from_body_reads_message_string() {
    let body = serde_json::json!({"message": "Insufficient balance"});
    assert_eq!(message_from_body(&body), Some("Insufficient balance".to_owned()));
}

#[test]
fn message_from_body_ignores_non_string_message() {
    assert_eq!(message_from_body(&serde_json::json!({"message": 42})), None);
    assert_eq!(message_from_body(&serde_json::json!({})), None);
}

#[test]
fn user_message_is_inline_ready_for_every_variant() {
    assert_eq!(
        ApiError::Rejected("Invalid password".to_owned()).user_message(),
        "Invalid password"
    );
    assert!(!ApiError::Unauthorized.user_message().is_empty());
    assert!(!ApiError::Transport("timeout".to_owned()).user_message().is_empty());
    assert!(!ApiError::Protocol("bad json".to_owned()).user_message().is_empty());
}
