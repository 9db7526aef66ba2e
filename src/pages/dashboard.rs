//! Dashboard page: balance, user directory, and transaction history.

use leptos::prelude::*;

use crate::components::appbar::Appbar;
use crate::components::balance::BalanceCard;
use crate::components::transaction_history::TransactionHistory;
use crate::components::users::UserDirectory;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let history_open = RwSignal::new(false);

    view! {
        <div class="dashboard-page">
            <Appbar/>
            <main class="dashboard-page__content">
                <section class="dashboard-page__card">
                    <BalanceCard/>
                </section>

                <section class="dashboard-page__card">
                    <UserDirectory/>
                </section>

                <section class="dashboard-page__card">
                    <button
                        class="dashboard-page__history-toggle"
                        on:click=move |_| history_open.update(|open| *open = !*open)
                    >
                        <span>"Transaction History"</span>
                        <span class="dashboard-page__history-chevron">
                            {move || if history_open.get() { "▲" } else { "▼" }}
                        </span>
                    </button>
                    <Show when=move || history_open.get()>
                        <TransactionHistory/>
                    </Show>
                </section>
            </main>
        </div>
    }
}
