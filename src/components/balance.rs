//! Account balance card for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the balance through the authenticated API on mount; a 401 here
//! ends the session via the coordinator like any other protected call.

#[cfg(test)]
#[path = "balance_test.rs"]
mod balance_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::session;

/// Format rupees with Indian digit grouping: `1234567.5` → `12,34,567.50`.
/// Whole amounts drop the paise entirely.
pub(crate) fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let paise = (value.abs() * 100.0).round() as u64;
    let rupees = paise / 100;
    let fraction = paise % 100;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(&rupees.to_string()));
    if fraction > 0 {
        out.push_str(&format!(".{fraction:02}"));
    }
    out
}

/// Indian grouping: the last three digits form one group, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// "Your Balance" card showing the current available balance.
#[component]
pub fn BalanceCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let balance = LocalResource::new(move || async move {
        let Some(token) = session::bearer_token() else {
            return Err(ApiError::Unauthorized);
        };
        api::fetch_balance(&token).await
    });

    Effect::new(move || {
        if let Some(Err(err)) = balance.get() {
            session::note_api_error(auth, &err);
        }
    });

    view! {
        <div class="balance-card">
            <div>
                <h2 class="balance-card__title">"Your Balance"</h2>
                <p class="balance-card__subtitle">"Current available balance"</p>
            </div>
            <Suspense fallback=move || view! { <p class="balance-card__loading">"Loading balance..."</p> }>
                {move || {
                    balance
                        .get()
                        .map(|result| match result {
                            Ok(value) => {
                                view! {
                                    <div class="balance-card__amount">{format!("₹{}", format_inr(value))}</div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="balance-card__error">{err.user_message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
