//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is the current user signed in". Route guards,
//! the appbar, and the sign-in/sign-up pages all read this state through one
//! `RwSignal<AuthState>` provided via context; nothing else re-derives it.
//!
//! DESIGN
//! ======
//! Credential operations (sign-in, sign-up, the startup token check) are
//! asynchronous, so every operation takes a ticket from a monotonic counter
//! when it starts and presents it when it completes. A completion whose
//! ticket has been superseded by a later `force_logout`/`begin_operation`
//! call is discarded, so a late-arriving sign-in response can never
//! re-authenticate a user who already signed out. Each transition mutates
//! the state inside a single signal update, so consumers never observe
//! `is_loading() == false` paired with a stale `is_authenticated()`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::CurrentUser;

/// Lifecycle phase of the auth session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// The stored token is still being read/validated after page load.
    #[default]
    Initializing,
    /// A bearer token is persisted and accepted for this session.
    Authenticated,
    /// No usable token; only public and auth-only routes may render.
    Unauthenticated,
}

/// Authentication state tracking the session phase, the signed-in user's
/// profile, and the most recent credential error.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// Profile cached from the last successful `getUser` call. The server
    /// stays authoritative; this copy only feeds identity-dependent chrome.
    pub user: Option<CurrentUser>,
    /// Inline message from the last rejected sign-in/sign-up attempt.
    pub last_error: Option<String>,
    op_seq: u64,
}

impl AuthState {
    /// True while the startup token check has not settled yet.
    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Initializing
    }

    /// True when the session holds an accepted bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    /// Start a credential operation and return its ticket. Any operation
    /// still in flight is superseded from this point on.
    pub fn begin_operation(&mut self) -> u64 {
        self.op_seq += 1;
        self.last_error = None;
        self.op_seq
    }

    /// Complete an operation with an authenticated session. Returns `false`
    /// when the ticket was superseded and nothing was applied.
    pub fn complete_authenticated(&mut self, op: u64, user: Option<CurrentUser>) -> bool {
        if op != self.op_seq {
            return false;
        }
        self.phase = AuthPhase::Authenticated;
        self.user = user;
        self.last_error = None;
        true
    }

    /// Complete an operation with an unauthenticated session (startup check
    /// found no token, or a stored token failed validation).
    pub fn complete_unauthenticated(&mut self, op: u64) -> bool {
        if op != self.op_seq {
            return false;
        }
        self.phase = AuthPhase::Unauthenticated;
        self.user = None;
        true
    }

    /// Complete an operation with a credential rejection. The session stays
    /// signed out and `message` is surfaced inline.
    pub fn reject(&mut self, op: u64, message: String) -> bool {
        if op != self.op_seq {
            return false;
        }
        self.phase = AuthPhase::Unauthenticated;
        self.user = None;
        self.last_error = Some(message);
        true
    }

    /// Sign the session out immediately, superseding any in-flight
    /// credential operation. Safe to call when already signed out.
    pub fn force_logout(&mut self) {
        self.op_seq += 1;
        self.phase = AuthPhase::Unauthenticated;
        self.user = None;
        self.last_error = None;
    }

    /// Re-derive the phase after another tab wrote or cleared the stored
    /// token. Supersedes in-flight operations; the cached profile is only
    /// kept when a token is still present.
    pub fn external_token_change(&mut self, token_present: bool) {
        self.op_seq += 1;
        if token_present {
            self.phase = AuthPhase::Authenticated;
        } else {
            self.phase = AuthPhase::Unauthenticated;
            self.user = None;
        }
    }
}
