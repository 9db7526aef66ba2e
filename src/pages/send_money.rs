//! Transfer screen: pick an amount and send it to the chosen recipient.
//!
//! The recipient's id and display name arrive through query parameters from
//! the user directory; landing here without them bounces back to the
//! dashboard.

#[cfg(test)]
#[path = "send_money_test.rs"]
mod send_money_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::button::ActionButton;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::api::escape_query_value;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::session;
use crate::util::guard;

/// Parse the amount field: must be a finite number greater than zero.
fn parse_amount(input: &str) -> Result<f64, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter an amount.");
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return Err("Please enter a valid amount.");
    };
    if !value.is_finite() || value <= 0.0 {
        return Err("Please enter a valid amount.");
    }
    Ok(value)
}

/// Avatar letter for the recipient card.
fn recipient_initial(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('U')
}

#[component]
pub fn SendMoneyPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let recipient_id = Memo::new(move |_| query.with(|q| q.get("id")));
    let recipient_name = Memo::new(move |_| query.with(|q| q.get("name")));

    // A transfer needs both recipient fields; bail out otherwise.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if recipient_id.get().is_none() || recipient_name.get().is_none() {
                navigate("/dashboard", guard::replace_history());
            }
        });
    }

    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_transfer = Callback::new({
        let navigate = navigate.clone();
        move |()| {
            if busy.get() {
                return;
            }
            let Some(to) = recipient_id.get() else {
                return;
            };
            match parse_amount(&amount.get()) {
                Err(message) => error.set(Some(message.to_owned())),
                Ok(value) => {
                    busy.set(true);
                    error.set(None);
                    #[cfg(feature = "hydrate")]
                    {
                        let navigate = navigate.clone();
                        leptos::task::spawn_local(async move {
                            let Some(token) = session::bearer_token() else {
                                session::expire(auth);
                                return;
                            };
                            match api::transfer(&token, &to, value).await {
                                Ok(message) => {
                                    navigate(
                                        &format!("/status?message={}", escape_query_value(&message)),
                                        NavigateOptions::default(),
                                    );
                                }
                                Err(err) => {
                                    session::note_api_error(auth, &err);
                                    // The page may have unmounted while the
                                    // request was in flight.
                                    let _ = error.try_set(Some(err.user_message()));
                                    let _ = busy.try_set(false);
                                }
                            }
                        });
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = (to, value, auth, &navigate);
                    }
                }
            }
        }
    });

    let on_cancel = {
        let navigate = navigate.clone();
        Callback::new(move |()| navigate("/dashboard", NavigateOptions::default()))
    };

    view! {
        <div class="send-page">
            <div class="send-card">
                <h2 class="send-card__title">"Send Money"</h2>
                <p class="send-card__subtitle">"Transfer money to another user"</p>

                <div class="send-card__recipient">
                    <span class="send-card__avatar">
                        {move || recipient_name.get().map(|name| recipient_initial(&name)).unwrap_or('U')}
                    </span>
                    <div>
                        <h3 class="send-card__name">
                            {move || recipient_name.get().unwrap_or_default()}
                        </h3>
                        <p class="send-card__role">"Recipient"</p>
                    </div>
                </div>

                <label class="send-card__field">
                    <span>"Amount (in ₹)"</span>
                    <input
                        type="number"
                        placeholder="Enter amount"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="send-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <ActionButton
                    label=Signal::derive(move || {
                        if busy.get() { "Processing...".to_owned() } else { "Send Money".to_owned() }
                    })
                    on_press=on_transfer
                    disabled=Signal::derive(move || busy.get())
                />
                <button class="send-card__cancel" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
