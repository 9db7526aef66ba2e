//! Sign-in page: credentials form feeding the session coordinator.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bottom_warning::BottomWarning;
use crate::components::button::ActionButton;
use crate::components::input_box::InputBox;
use crate::state::auth::AuthState;
use crate::state::session;

/// Trim and require both credential fields. Passwords keep their exact
/// bytes; only the username is trimmed.
fn validate_signin_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter your username.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_signin_input(&username.get(), &password.get()) {
            Ok((user, pass)) => {
                form_error.set(None);
                session::login(auth, user, pass, navigate.clone());
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    // Local validation first, then whatever the coordinator surfaced.
    let message = move || {
        form_error
            .get()
            .map(str::to_owned)
            .or_else(|| auth.with(|s| s.last_error.clone()))
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"KoshPay"</h1>
                <p class="auth-card__slogan">"Your trusted payment partner"</p>

                <h2 class="auth-card__heading">"Welcome Back"</h2>
                <p class="auth-card__subheading">"Enter your credentials to access your account"</p>

                <form class="auth-card__form" on:submit=on_submit>
                    <InputBox
                        label="Username"
                        placeholder="Enter your username"
                        value=username
                    />
                    <InputBox
                        label="Password"
                        placeholder="••••••••"
                        value=password
                        kind="password"
                    />
                    <ActionButton label=String::from("Sign In") submit=true/>
                </form>

                <Show when=move || message().is_some()>
                    <p class="auth-card__error">{move || message().unwrap_or_default()}</p>
                </Show>

                <BottomWarning
                    label="Don't have an account?"
                    link_text="Sign up"
                    to="/signup"
                />
            </div>
        </div>
    }
}
