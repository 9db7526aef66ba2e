//! Labeled text input used by the auth and transfer forms.

use leptos::prelude::*;

/// Labeled input bound to a string signal, with an optional inline
/// field-level error below it.
#[component]
pub fn InputBox(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)] kind: Option<&'static str>,
    #[prop(optional, into)] error: Option<RwSignal<Option<String>>>,
) -> impl IntoView {
    view! {
        <label class="input-box">
            <span class="input-box__label">{label}</span>
            <input
                class="input-box__field"
                class:input-box__field--invalid=move || error.is_some_and(|e| e.get().is_some())
                type=kind.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {error.map(|err| {
                view! {
                    <Show when=move || err.get().is_some()>
                        <p class="input-box__error">{move || err.get().unwrap_or_default()}</p>
                    </Show>
                }
            })}
        </label>
    }
}
