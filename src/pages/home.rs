//! Public landing page with sign-in/sign-up entry points.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let go_signin = {
        let navigate = navigate.clone();
        move |_| navigate("/signin", NavigateOptions::default())
    };
    let go_signup = {
        let navigate = navigate.clone();
        move |_| navigate("/signup", NavigateOptions::default())
    };
    let get_started = move |_| navigate("/signup", NavigateOptions::default());

    view! {
        <div class="home-page">
            <nav class="home-page__nav">
                <h1 class="home-page__brand">"KoshPay"</h1>
                <div class="home-page__nav-actions">
                    <button class="home-page__nav-link" aria-label="Sign In" on:click=go_signin>
                        "Sign In"
                    </button>
                    <button class="home-page__nav-cta" aria-label="Sign Up" on:click=go_signup>
                        "Sign Up"
                    </button>
                </div>
            </nav>

            <section class="home-page__hero">
                <h1 class="home-page__headline">
                    <span>"Welcome to"</span>
                    <span class="home-page__headline-accent">"KoshPay"</span>
                </h1>
                <p class="home-page__tagline">
                    "Your trusted payment partner. Send and receive money instantly with secure transactions."
                </p>
                <button class="home-page__cta" aria-label="Get Started" on:click=get_started>
                    "Get Started"
                </button>
            </section>

            <section class="home-page__features">
                <div class="home-page__feature">
                    <h3>"Instant Transfers"</h3>
                    <p>"Send money instantly to anyone, anywhere."</p>
                </div>
                <div class="home-page__feature">
                    <h3>"Secure Payments"</h3>
                    <p>"Your transactions are protected with bank-grade security."</p>
                </div>
                <div class="home-page__feature">
                    <h3>"Lightning Fast"</h3>
                    <p>"Experience the speed of modern payment technology."</p>
                </div>
            </section>
        </div>
    }
}
