//! Payment confirmation screen with an auto-redirect countdown.

#[cfg(test)]
#[path = "payment_status_test.rs"]
mod payment_status_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::button::ActionButton;

const REDIRECT_SECONDS: u32 = 5;

/// Confirmation text: the server's message when one was passed along,
/// otherwise a generic success line.
fn status_message(param: Option<String>) -> String {
    param
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| "Your payment has been processed successfully.".to_owned())
}

#[component]
pub fn PaymentStatusPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let message = Memo::new(move |_| status_message(query.with(|q| q.get("message"))));
    let countdown = RwSignal::new(REDIRECT_SECONDS);

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Interval;

        let navigate = navigate.clone();
        let ticker = Rc::new(RefCell::new(None::<Interval>));
        let interval = Interval::new(1000, move || {
            let remaining = countdown
                .try_update(|n| {
                    *n = n.saturating_sub(1);
                    *n
                })
                .unwrap_or(0);
            if remaining == 0 {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
        *ticker.borrow_mut() = Some(interval);
        // Dropping the handle cancels the timer once the page unmounts.
        on_cleanup(move || {
            ticker.borrow_mut().take();
        });
    }

    let go_dashboard = Callback::new(move |()| navigate("/dashboard", NavigateOptions::default()));

    view! {
        <div class="status-page">
            <div class="status-card">
                <div class="status-card__badge">"✓"</div>
                <h1 class="status-card__title">"Payment Successful"</h1>
                <p class="status-card__message">{move || message.get()}</p>
                <p class="status-card__countdown">
                    {move || format!("Redirecting to dashboard in {} seconds...", countdown.get())}
                </p>
                <ActionButton label=String::from("Go to Dashboard") on_press=go_dashboard/>
            </div>
        </div>
    }
}
