//! Sign-up page with field validation and a password-strength meter.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bottom_warning::BottomWarning;
use crate::components::button::ActionButton;
use crate::components::input_box::InputBox;
use crate::net::types::SignupRequest;
use crate::state::auth::AuthState;
use crate::state::session;

/// Characters counted toward the "special character" requirement.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Minimum strength score (out of 5) required to submit.
pub(crate) const MIN_PASSWORD_SCORE: u8 = 3;

/// Which password requirements the current input meets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PasswordRequirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordRequirements {
    pub(crate) fn check(password: &str) -> Self {
        Self {
            length: password.len() >= 6,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    /// Strength score: the number of requirements met, 0 to 5.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn score(self) -> u8 {
        [self.length, self.uppercase, self.lowercase, self.digit, self.special]
            .into_iter()
            .filter(|met| *met)
            .count() as u8
    }
}

/// Strength-meter modifier for the current score.
pub(crate) fn strength_class(score: u8) -> &'static str {
    match score {
        0 | 1 => "signup-strength__bar--weak",
        2 | 3 => "signup-strength__bar--fair",
        4 => "signup-strength__bar--good",
        _ => "signup-strength__bar--strong",
    }
}

/// Field-level validation errors; `None` means the field is acceptable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupFieldErrors {
    pub firstname: Option<&'static str>,
    pub lastname: Option<&'static str>,
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl SignupFieldErrors {
    pub(crate) fn any(self) -> bool {
        self.firstname.is_some() || self.lastname.is_some() || self.username.is_some() || self.password.is_some()
    }
}

pub(crate) fn validate_signup_fields(
    firstname: &str,
    lastname: &str,
    username: &str,
    password: &str,
) -> SignupFieldErrors {
    let mut errors = SignupFieldErrors::default();
    if firstname.trim().is_empty() {
        errors.firstname = Some("First name is required");
    }
    if lastname.trim().is_empty() {
        errors.lastname = Some("Last name is required");
    }
    let username = username.trim();
    if username.is_empty() {
        errors.username = Some("Username is required");
    } else if username.len() < 3 {
        errors.username = Some("Username must be at least 3 characters");
    }
    if password.is_empty() {
        errors.password = Some("Password is required");
    } else if PasswordRequirements::check(password).score() < MIN_PASSWORD_SCORE {
        errors.password = Some("Please create a stronger password");
    }
    errors
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let firstname_error = RwSignal::new(None::<String>);
    let lastname_error = RwSignal::new(None::<String>);
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let busy = RwSignal::new(false);

    let requirements = Memo::new(move |_| PasswordRequirements::check(&password.get()));
    let score = Memo::new(move |_| requirements.get().score());

    // A rejection from the server unblocks the form again.
    Effect::new(move || {
        if auth.with(|s| s.last_error.is_some()) {
            busy.set(false);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let errors =
            validate_signup_fields(&firstname.get(), &lastname.get(), &username.get(), &password.get());
        firstname_error.set(errors.firstname.map(str::to_owned));
        lastname_error.set(errors.lastname.map(str::to_owned));
        username_error.set(errors.username.map(str::to_owned));
        password_error.set(errors.password.map(str::to_owned));
        if errors.any() {
            return;
        }

        busy.set(true);
        let request = SignupRequest {
            firstname: firstname.get().trim().to_owned(),
            lastname: lastname.get().trim().to_owned(),
            username: username.get().trim().to_owned(),
            password: password.get(),
        };
        session::signup(auth, request, navigate.clone());
    };

    let requirement_row = move |met: bool, text: &'static str| {
        view! {
            <li class="signup-requirements__item" class:signup-requirements__item--met=met>
                {format!("✓ {text}")}
            </li>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"KoshPay"</h1>
                <p class="auth-card__slogan">"Create your account"</p>

                <h2 class="auth-card__heading">"Sign Up"</h2>
                <p class="auth-card__subheading">"Enter your information to create an account"</p>

                <form class="auth-card__form" on:submit=on_submit>
                    <div class="auth-card__name-row">
                        <InputBox
                            label="First Name"
                            placeholder="John"
                            value=firstname
                            error=firstname_error
                        />
                        <InputBox
                            label="Last Name"
                            placeholder="Doe"
                            value=lastname
                            error=lastname_error
                        />
                    </div>

                    <InputBox
                        label="Username"
                        placeholder="Choose a username"
                        value=username
                        error=username_error
                    />

                    <InputBox
                        label="Password"
                        placeholder="••••••••"
                        value=password
                        kind="password"
                        error=password_error
                    />

                    <div class="signup-strength">
                        <div
                            class=move || format!("signup-strength__bar {}", strength_class(score.get()))
                            style=move || format!("width:{}%", u32::from(score.get()) * 20)
                        ></div>
                    </div>

                    <div class="signup-requirements">
                        <p class="signup-requirements__title">"Password requirements:"</p>
                        <ul>
                            {move || {
                                let reqs = requirements.get();
                                vec![
                                    requirement_row(reqs.length, "At least 6 characters"),
                                    requirement_row(reqs.uppercase, "At least one uppercase letter"),
                                    requirement_row(reqs.lowercase, "At least one lowercase letter"),
                                    requirement_row(reqs.digit, "At least one number"),
                                    requirement_row(reqs.special, "At least one special character (!@#$%^&*)"),
                                ]
                            }}
                        </ul>
                    </div>

                    <ActionButton
                        label=Signal::derive(move || {
                            if busy.get() { "Creating Account...".to_owned() } else { "Create Account".to_owned() }
                        })
                        disabled=Signal::derive(move || busy.get() || score.get() < MIN_PASSWORD_SCORE)
                        submit=true
                    />
                </form>

                <Show when=move || auth.with(|s| s.last_error.is_some())>
                    <p class="auth-card__error">
                        {move || auth.with(|s| s.last_error.clone().unwrap_or_default())}
                    </p>
                </Show>

                <BottomWarning
                    label="Already have an account?"
                    link_text="Sign in"
                    to="/signin"
                />
            </div>
        </div>
    }
}
