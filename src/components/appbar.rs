//! Top application bar for signed-in screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the signed-in profile from the session coordinator for the avatar
//! initials and routes Sign out through `session::logout`; it never touches
//! browser storage itself.

#[cfg(test)]
#[path = "appbar_test.rs"]
mod appbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::users::initials;
use crate::net::types::CurrentUser;
use crate::state::auth::AuthState;
use crate::state::session;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Avatar initials for the profile button; `?` until the profile is known.
pub(crate) fn profile_initials(user: Option<&CurrentUser>) -> String {
    user.map_or_else(|| "?".to_owned(), |u| initials(&u.firstname, &u.lastname))
}

#[component]
pub fn Appbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let show_profile_menu = RwSignal::new(false);

    let on_toggle_theme = move |_| {
        ui.update(|s| s.dark_mode = dark_mode::toggle(s.dark_mode));
    };

    let avatar = move || auth.with(|s| profile_initials(s.user.as_ref()));

    view! {
        <header class="appbar">
            <A href="/" attr:class="appbar__brand">
                <span class="appbar__logo">"✓"</span>
                <span class="appbar__name">"KoshPay"</span>
            </A>

            <nav class="appbar__nav">
                <A href="/" attr:class="appbar__link">"Home"</A>
                <A href="/dashboard" attr:class="appbar__link">"Dashboard"</A>

                <button
                    class="appbar__theme-toggle"
                    aria-label="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <div class="appbar__profile">
                    <button
                        class="appbar__avatar"
                        on:click=move |_| show_profile_menu.update(|open| *open = !*open)
                    >
                        {avatar}
                    </button>
                    <Show when=move || show_profile_menu.get()>
                        <div class="appbar__menu">
                            <button class="appbar__menu-item" on:click={
                                let navigate = navigate.clone();
                                move |_| {
                                    show_profile_menu.set(false);
                                    session::logout(auth, navigate.clone());
                                }
                            }>
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                </div>
            </nav>
        </header>
    }
}
