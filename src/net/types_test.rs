use super::*;

// =============================================================
// getUser shapes
// =============================================================

#[test]
fn current_user_decodes_canonical_id_field() {
    let user: CurrentUser = serde_json::from_str(
        r#"{"id":"u1","firstname":"Alice","lastname":"Iyer","username":"alice"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.username, "alice");
}

#[test]
fn current_user_accepts_mongo_id_alias() {
    let user: CurrentUser = serde_json::from_str(
        r#"{"_id":"507f1f77","firstname":"Alice","lastname":"Iyer","username":"alice"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "507f1f77");
}

// =============================================================
// Directory envelope
// =============================================================

#[test]
fn directory_response_unwraps_singular_user_key() {
    let resp: DirectoryResponse = serde_json::from_str(
        r#"{"user":[{"_id":"u2","firstname":"Bob","lastname":"Rao","username":"bob"}]}"#,
    )
    .unwrap();
    assert_eq!(resp.users.len(), 1);
    assert_eq!(resp.users[0].id, "u2");
}

#[test]
fn directory_response_missing_key_is_empty() {
    let resp: DirectoryResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.users.is_empty());
}

// =============================================================
// Transactions
// =============================================================

#[test]
fn transaction_record_decodes_camel_case_parties() {
    let record: TransactionRecord = serde_json::from_str(
        r#"{
            "_id":"t1",
            "fromUser":{"_id":"u1","firstname":"Alice","lastname":"Iyer"},
            "toUser":{"_id":"u2","firstname":"Bob","lastname":"Rao"},
            "amount":250.5,
            "status":"success"
        }"#,
    )
    .unwrap();
    assert_eq!(record.from_user.id, "u1");
    assert_eq!(record.to_user.id, "u2");
    assert!((record.amount - 250.5).abs() < f64::EPSILON);
    assert!(record.timestamp.is_none());
}

#[test]
fn transaction_page_defaults_when_fields_are_absent() {
    let page: TransactionPage = serde_json::from_str("{}").unwrap();
    assert!(page.transactions.is_empty());
    assert_eq!(page.pagination.pages, 0);
}

#[test]
fn pagination_keeps_pages_and_optional_totals() {
    let page: TransactionPage = serde_json::from_str(
        r#"{"transactions":[],"pagination":{"page":2,"pages":7,"total":61}}"#,
    )
    .unwrap();
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.pages, 7);
    assert_eq!(page.pagination.total, Some(61));
}

// =============================================================
// Signup payload
// =============================================================

#[test]
fn signup_request_serializes_flat_fields() {
    let body = serde_json::to_value(SignupRequest {
        firstname: "Alice".to_owned(),
        lastname: "Iyer".to_owned(),
        username: "alice".to_owned(),
        password: "Secret1!".to_owned(),
    })
    .unwrap();
    assert_eq!(body["firstname"], "Alice");
    assert_eq!(body["password"], "Secret1!");
}
