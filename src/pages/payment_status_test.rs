use super::*;

#[test]
fn status_message_passes_through_the_server_text() {
    assert_eq!(
        status_message(Some("Transfer successful".to_owned())),
        "Transfer successful"
    );
}

#[test]
fn status_message_falls_back_when_absent_or_empty() {
    let fallback = status_message(None);
    assert_eq!(status_message(Some(String::new())), fallback);
    assert!(!fallback.is_empty());
}
