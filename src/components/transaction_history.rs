//! Paginated transaction history with a sent/received filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server pages the history; the all/sent/received filter is applied
//! client-side to the fetched page, relative to the signed-in user's id
//! from the session coordinator.

#[cfg(test)]
#[path = "transaction_history_test.rs"]
mod transaction_history_test;

use leptos::prelude::*;

use crate::components::balance::format_inr;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{TransactionParty, TransactionRecord};
use crate::state::auth::AuthState;
use crate::state::session;

const PAGE_SIZE: u32 = 10;

/// Which rows of the fetched page to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum HistoryFilter {
    #[default]
    All,
    Sent,
    Received,
}

impl HistoryFilter {
    pub(crate) fn value(self) -> &'static str {
        match self {
            HistoryFilter::All => "all",
            HistoryFilter::Sent => "sent",
            HistoryFilter::Received => "received",
        }
    }

    /// Parse the `<select>` value; unknown values read as `All`.
    pub(crate) fn from_value(value: &str) -> Self {
        match value {
            "sent" => HistoryFilter::Sent,
            "received" => HistoryFilter::Received,
            _ => HistoryFilter::All,
        }
    }
}

/// True when the signed-in user is the sender of `record`.
pub(crate) fn is_outgoing(record: &TransactionRecord, self_id: &str) -> bool {
    record.from_user.id == self_id
}

pub(crate) fn matches_filter(record: &TransactionRecord, self_id: &str, filter: HistoryFilter) -> bool {
    match filter {
        HistoryFilter::All => true,
        HistoryFilter::Sent => is_outgoing(record, self_id),
        HistoryFilter::Received => record.to_user.id == self_id,
    }
}

/// The other party of the transfer, from the signed-in user's perspective.
pub(crate) fn counterparty<'a>(record: &'a TransactionRecord, self_id: &str) -> &'a TransactionParty {
    if is_outgoing(record, self_id) {
        &record.to_user
    } else {
        &record.from_user
    }
}

/// Signed display amount: debits negative, credits positive.
pub(crate) fn signed_amount(record: &TransactionRecord, self_id: &str) -> f64 {
    if is_outgoing(record, self_id) {
        -record.amount
    } else {
        record.amount
    }
}

/// `+₹…` / `-₹…` label for a signed amount.
pub(crate) fn amount_label(signed: f64) -> String {
    let sign = if signed < 0.0 { '-' } else { '+' };
    format!("{sign}₹{}", format_inr(signed.abs()))
}

/// Collapsible history panel rendered on the dashboard.
#[component]
pub fn TransactionHistory() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let page = RwSignal::new(1_u32);
    let filter = RwSignal::new(HistoryFilter::All);

    let transactions = LocalResource::new(move || {
        let page_number = page.get();
        async move {
            let Some(token) = session::bearer_token() else {
                return Err(ApiError::Unauthorized);
            };
            api::fetch_transactions(&token, page_number, PAGE_SIZE).await
        }
    });

    Effect::new(move || {
        if let Some(Err(err)) = transactions.get() {
            session::note_api_error(auth, &err);
        }
    });

    let self_id = Memo::new(move |_| {
        auth.with(|s| s.user.as_ref().map(|u| u.id.clone()).unwrap_or_default())
    });

    view! {
        <div class="transaction-history">
            <div class="transaction-history__controls">
                <select
                    class="transaction-history__filter"
                    prop:value=move || filter.get().value()
                    on:change=move |ev| filter.set(HistoryFilter::from_value(&event_target_value(&ev)))
                >
                    <option value="all">"All Transactions"</option>
                    <option value="sent">"Money Sent"</option>
                    <option value="received">"Money Received"</option>
                </select>
            </div>

            <Suspense fallback=move || view! { <p class="transaction-history__loading">"Loading transactions..."</p> }>
                {move || {
                    transactions
                        .get()
                        .map(|result| match result {
                            Ok(page_data) => {
                                let id = self_id.get();
                                let visible: Vec<TransactionRecord> = page_data
                                    .transactions
                                    .iter()
                                    .filter(|record| matches_filter(record, &id, filter.get()))
                                    .cloned()
                                    .collect();
                                let pages = page_data.pagination.pages;
                                if visible.is_empty() {
                                    view! { <p class="transaction-history__empty">"No transactions found"</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="transaction-history__rows">
                                            {visible
                                                .into_iter()
                                                .map(|record| {
                                                    view! { <TransactionRow record self_id=id.clone()/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        <Pager page pages/>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! { <p class="transaction-history__error">{err.user_message()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn TransactionRow(record: TransactionRecord, self_id: String) -> impl IntoView {
    let outgoing = is_outgoing(&record, &self_id);
    let other = counterparty(&record, &self_id);
    let heading = format!(
        "{}: {} {}",
        if outgoing { "To" } else { "From" },
        other.firstname,
        other.lastname
    );
    let label = amount_label(signed_amount(&record, &self_id));
    let status = record.status.clone();

    view! {
        <div class="transaction-row">
            <div class="transaction-row__summary">
                <span
                    class="transaction-row__direction"
                    class:transaction-row__direction--out=outgoing
                >
                    {if outgoing { "↑" } else { "↓" }}
                </span>
                <div>
                    <p class="transaction-row__heading">{heading}</p>
                    <span class=format!("transaction-row__status transaction-row__status--{status}")>
                        {record.status.clone()}
                    </span>
                </div>
            </div>
            <span
                class="transaction-row__amount"
                class:transaction-row__amount--debit=outgoing
            >
                {label}
            </span>
        </div>
    }
}

#[component]
fn Pager(page: RwSignal<u32>, pages: u32) -> impl IntoView {
    view! {
        <div class="transaction-history__pager">
            <button
                class="transaction-history__page-btn"
                disabled=move || page.get() <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="transaction-history__page-label">
                {move || format!("Page {}", page.get())}
            </span>
            <button
                class="transaction-history__page-btn"
                disabled=move || pages > 0 && page.get() >= pages
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </div>
    }
}
