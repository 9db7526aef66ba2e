//! Primary action button shared by forms and flow screens.

use leptos::prelude::*;

/// Full-width primary button. `submit` makes it drive the enclosing form;
/// otherwise `on_press` handles the click.
#[component]
pub fn ActionButton(
    #[prop(into)] label: Signal<String>,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] submit: bool,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };
    view! {
        <button
            class="action-button"
            type=button_type
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            {move || label.get()}
        </button>
    }
}
