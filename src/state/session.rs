//! Session coordinator: the single entry point for credential-changing
//! operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the pure [`AuthState`] machine with the asynchronous glue: API
//! calls, token persistence, and navigation side effects. Pages call these
//! functions; nothing else writes the auth signal or the token store.
//!
//! DESIGN
//! ======
//! The startup check validates a stored token against `getUser` before
//! trusting it; the same strictness applies for the whole session, since
//! every authenticated call already funnels a 401 through [`note_api_error`].
//! Only a definitive auth rejection clears the token — a transport fault
//! during startup cannot prove the token invalid, so the session proceeds
//! and the first authenticated call settles the question.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::SignupRequest;
use crate::state::auth::AuthState;
use crate::util::guard;
use crate::util::session_store;

/// Route shown right after a successful sign-in or sign-up.
pub const LANDING_AFTER_LOGIN: &str = "/dashboard";
/// Route shown after an explicit sign-out.
pub const LANDING_AFTER_LOGOUT: &str = "/";

/// Current bearer token, if any. Views come through here (or the API
/// helpers) instead of reading browser storage themselves.
pub fn bearer_token() -> Option<String> {
    session_store::read()
}

/// Kick off the startup token check. On the server this is a no-op: the
/// state stays `Initializing`, so server-rendered HTML shows the neutral
/// loading view and hydration resolves it.
pub fn init(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let op = auth.try_update(AuthState::begin_operation).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let Some(token) = session_store::read() else {
                auth.update(|s| {
                    s.complete_unauthenticated(op);
                });
                return;
            };
            match api::fetch_current_user(&token).await {
                Ok(user) => auth.update(|s| {
                    s.complete_authenticated(op, Some(user));
                }),
                Err(ApiError::Unauthorized | ApiError::Rejected(_)) => {
                    session_store::clear();
                    auth.update(|s| {
                        s.complete_unauthenticated(op);
                    });
                }
                Err(err) => {
                    leptos::logging::warn!("startup token check unreachable: {err}");
                    auth.update(|s| {
                        s.complete_authenticated(op, None);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Mirror token writes from other same-origin tabs into this tab's state.
pub fn watch_other_tabs(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    session_store::subscribe(move |token| {
        auth.update(|s| s.external_token_change(token.is_some()));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Exchange credentials for a session. On success the token is persisted
/// and navigation moves to the dashboard; on rejection the message lands in
/// `last_error`. A sign-out issued while the request is in flight wins.
pub fn login<F>(auth: RwSignal<AuthState>, username: String, password: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let op = auth.try_update(AuthState::begin_operation).unwrap_or_default();
        leptos::task::spawn_local(async move {
            match api::sign_in(&username, &password).await {
                Ok(token) => {
                    let user = api::fetch_current_user(&token).await.ok();
                    let applied = auth
                        .try_update(|s| s.complete_authenticated(op, user))
                        .unwrap_or(false);
                    if applied {
                        session_store::write(&token);
                        navigate(LANDING_AFTER_LOGIN, guard::replace_history());
                    }
                }
                Err(err) => {
                    auth.update(|s| {
                        s.reject(op, err.user_message());
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, username, password, navigate);
    }
}

/// Create an account. The sign-up response carries a usable token, so the
/// completion contract is identical to [`login`].
pub fn signup<F>(auth: RwSignal<AuthState>, request: SignupRequest, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let op = auth.try_update(AuthState::begin_operation).unwrap_or_default();
        leptos::task::spawn_local(async move {
            match api::sign_up(&request).await {
                Ok(token) => {
                    let user = api::fetch_current_user(&token).await.ok();
                    let applied = auth
                        .try_update(|s| s.complete_authenticated(op, user))
                        .unwrap_or(false);
                    if applied {
                        session_store::write(&token);
                        navigate(LANDING_AFTER_LOGIN, guard::replace_history());
                    }
                }
                Err(err) => {
                    auth.update(|s| {
                        s.reject(op, err.user_message());
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request, navigate);
    }
}

/// Sign out: clear the stored token, end the session, and return to the
/// public landing page. Safe to call when already signed out.
pub fn logout<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    session_store::clear();
    auth.update(AuthState::force_logout);
    navigate(LANDING_AFTER_LOGOUT, guard::replace_history());
}

/// Forced sign-out after a 401. Clears the token and lets the active route
/// guard issue the redirect to sign-in.
pub fn expire(auth: RwSignal<AuthState>) {
    session_store::clear();
    auth.update(AuthState::force_logout);
}

/// Funnel an authenticated-call failure through the session: a 401 ends the
/// session here; every other error is the caller's to surface.
pub fn note_api_error(auth: RwSignal<AuthState>, err: &ApiError) {
    if *err == ApiError::Unauthorized {
        expire(auth);
    }
}
