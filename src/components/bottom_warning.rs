//! Footer prompt linking between the sign-in and sign-up screens.

use leptos::prelude::*;
use leptos_router::components::A;

/// "Don't have an account? Sign up" style footer line.
#[component]
pub fn BottomWarning(label: &'static str, link_text: &'static str, to: &'static str) -> impl IntoView {
    view! {
        <div class="bottom-warning">
            <span>{label}</span>
            <A href=to attr:class="bottom-warning__link">{link_text}</A>
        </div>
    }
}
