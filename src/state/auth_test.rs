use super::*;

fn sample_user() -> CurrentUser {
    CurrentUser {
        id: "u1".to_owned(),
        firstname: "Alice".to_owned(),
        lastname: "Iyer".to_owned(),
        username: "alice".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_initializing_and_not_authenticated() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Initializing);
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.last_error.is_none());
}

// =============================================================
// Startup token check
// =============================================================

#[test]
fn startup_with_no_token_settles_unauthenticated() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    assert!(state.complete_unauthenticated(op));
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn startup_with_valid_token_settles_authenticated_with_profile() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    assert!(state.complete_authenticated(op, Some(sample_user())));
    assert!(!state.is_loading());
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("alice"));
}

// =============================================================
// Sign-in outcomes
// =============================================================

#[test]
fn rejected_sign_in_surfaces_message_and_stays_signed_out() {
    let mut state = AuthState::default();
    let init = state.begin_operation();
    state.complete_unauthenticated(init);

    let op = state.begin_operation();
    assert!(state.reject(op, "Invalid password".to_owned()));
    assert!(!state.is_authenticated());
    assert_eq!(state.last_error.as_deref(), Some("Invalid password"));
}

#[test]
fn begin_operation_clears_previous_error() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    state.reject(op, "Invalid password".to_owned());

    state.begin_operation();
    assert!(state.last_error.is_none());
}

#[test]
fn successful_sign_in_clears_error_and_authenticates() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    state.reject(op, "Invalid password".to_owned());

    let retry = state.begin_operation();
    assert!(state.complete_authenticated(retry, None));
    assert!(state.is_authenticated());
    assert!(state.last_error.is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn force_logout_signs_out_and_drops_profile() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    state.complete_authenticated(op, Some(sample_user()));

    state.force_logout();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn force_logout_twice_matches_once() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    state.complete_authenticated(op, Some(sample_user()));

    state.force_logout();
    let after_once = state.clone();
    state.force_logout();
    assert_eq!(state.phase, after_once.phase);
    assert_eq!(state.user.is_none(), after_once.user.is_none());
    assert_eq!(state.last_error, after_once.last_error);
}

// =============================================================
// Stale-response suppression
// =============================================================

#[test]
fn logout_during_sign_in_wins_regardless_of_arrival_order() {
    let mut state = AuthState::default();
    let init = state.begin_operation();
    state.complete_unauthenticated(init);

    // Sign-in starts, then the user signs out before the response lands.
    let op = state.begin_operation();
    state.force_logout();

    // The late success must be discarded.
    assert!(!state.complete_authenticated(op, Some(sample_user())));
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn newer_sign_in_supersedes_older_one() {
    let mut state = AuthState::default();
    let first = state.begin_operation();
    let second = state.begin_operation();

    assert!(!state.reject(first, "slow failure".to_owned()));
    assert!(state.complete_authenticated(second, None));
    assert!(state.is_authenticated());
    assert!(state.last_error.is_none());
}

#[test]
fn stale_rejection_does_not_clobber_signed_in_session() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    state.complete_authenticated(op, Some(sample_user()));

    assert!(!state.reject(op.wrapping_sub(1), "stale".to_owned()));
    assert!(state.is_authenticated());
    assert!(state.last_error.is_none());
}

// =============================================================
// Cross-tab storage changes
// =============================================================

#[test]
fn token_cleared_in_another_tab_signs_this_tab_out() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    state.complete_authenticated(op, Some(sample_user()));

    state.external_token_change(false);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn token_written_in_another_tab_signs_this_tab_in() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    state.complete_unauthenticated(op);

    state.external_token_change(true);
    assert!(state.is_authenticated());
}

#[test]
fn external_change_supersedes_in_flight_operation() {
    let mut state = AuthState::default();
    let op = state.begin_operation();
    state.external_token_change(false);

    assert!(!state.complete_authenticated(op, Some(sample_user())));
    assert!(!state.is_authenticated());
}
