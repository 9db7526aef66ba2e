use super::*;

// =============================================================
// Protected guard
// =============================================================

#[test]
fn protected_waits_while_loading() {
    // No redirect decision before the startup token check settles.
    assert_eq!(protected(true, false), GuardDecision::Wait);
    assert_eq!(protected(true, true), GuardDecision::Wait);
}

#[test]
fn protected_redirects_signed_out_users_to_signin() {
    assert_eq!(protected(false, false), GuardDecision::Redirect("/signin"));
}

#[test]
fn protected_renders_for_signed_in_users() {
    assert_eq!(protected(false, true), GuardDecision::Render);
}

// =============================================================
// Auth-only guard
// =============================================================

#[test]
fn auth_only_waits_while_loading() {
    assert_eq!(auth_only(true, false), GuardDecision::Wait);
    assert_eq!(auth_only(true, true), GuardDecision::Wait);
}

#[test]
fn auth_only_redirects_signed_in_users_to_dashboard() {
    assert_eq!(auth_only(false, true), GuardDecision::Redirect("/dashboard"));
}

#[test]
fn auth_only_renders_for_signed_out_users() {
    assert_eq!(auth_only(false, false), GuardDecision::Render);
}

// =============================================================
// Public landing guard
// =============================================================

#[test]
fn public_landing_redirects_signed_in_users() {
    assert_eq!(public_landing(false, true), GuardDecision::Redirect("/dashboard"));
}

#[test]
fn public_landing_renders_for_signed_out_users() {
    assert_eq!(public_landing(false, false), GuardDecision::Render);
}

// =============================================================
// Redirect mechanics
// =============================================================

#[test]
fn guard_redirects_replace_history() {
    assert!(replace_history().replace);
}
