//! Route guards deciding between rendering a view and redirecting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped in one of three guard components, all pure
//! functions of the coordinator's state. While the startup token check is
//! still loading, guards render a neutral placeholder instead of deciding,
//! which avoids a redirect flash on page reload. Guard redirects replace
//! history so back-navigation cannot land on a page inconsistent with the
//! current session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Outcome of a guard decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state is still loading; show a neutral placeholder.
    Wait,
    /// Render the wrapped view.
    Render,
    /// Replace the current history entry with `path`.
    Redirect(&'static str),
}

/// Navigation options for guard redirects: always replace history.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Guard for views that require a signed-in session.
pub fn protected(loading: bool, authenticated: bool) -> GuardDecision {
    if loading {
        GuardDecision::Wait
    } else if authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect("/signin")
    }
}

/// Guard for the sign-in/sign-up screens; a signed-in user has no business
/// there and bounces to the dashboard.
pub fn auth_only(loading: bool, authenticated: bool) -> GuardDecision {
    if loading {
        GuardDecision::Wait
    } else if authenticated {
        GuardDecision::Redirect("/dashboard")
    } else {
        GuardDecision::Render
    }
}

/// Guard for the public landing page: signed-in users go straight to the
/// dashboard.
pub fn public_landing(loading: bool, authenticated: bool) -> GuardDecision {
    if loading {
        GuardDecision::Wait
    } else if authenticated {
        GuardDecision::Redirect("/dashboard")
    } else {
        GuardDecision::Render
    }
}

fn guarded(decide: fn(bool, bool) -> GuardDecision, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let decision = move || {
        let state = auth.get();
        decide(state.is_loading(), state.is_authenticated())
    };

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision() {
            navigate(path, replace_history());
        }
    });

    view! {
        <Show
            when=move || decision() == GuardDecision::Render
            fallback=|| view! { <div class="route-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}

/// Wrap a view only signed-in users may see.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(protected, children)
}

/// Wrap the sign-in/sign-up screens.
#[component]
pub fn RedirectIfAuthed(children: ChildrenFn) -> impl IntoView {
    guarded(auth_only, children)
}

/// Wrap the public landing page.
#[component]
pub fn LandingGuard(children: ChildrenFn) -> impl IntoView {
    guarded(public_landing, children)
}
