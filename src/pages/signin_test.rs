use super::*;

#[test]
fn validate_signin_input_trims_the_username() {
    assert_eq!(
        validate_signin_input("  alice  ", "pw"),
        Ok(("alice".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_signin_input_requires_a_username() {
    assert_eq!(validate_signin_input("   ", "pw"), Err("Enter your username."));
}

#[test]
fn validate_signin_input_requires_a_password() {
    assert_eq!(validate_signin_input("alice", ""), Err("Enter your password."));
}

#[test]
fn validate_signin_input_keeps_password_bytes_exact() {
    assert_eq!(
        validate_signin_input("alice", " spaced pw "),
        Ok(("alice".to_owned(), " spaced pw ".to_owned()))
    );
}
