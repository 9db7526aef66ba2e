//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, payment_status::PaymentStatusPage,
    send_money::SendMoneyPage, signin::SigninPage, signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::state::session;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::guard::{LandingGuard, RedirectIfAuthed, RequireAuth};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, starts the token check, and sets
/// up client-side routing with the auth guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::initial_preference(),
    });
    provide_context(auth);
    provide_context(ui);

    dark_mode::apply(ui.get_untracked().dark_mode);
    session::init(auth);
    session::watch_other_tabs(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/koshpay.css"/>
        <Title text="KoshPay"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <LandingGuard><HomePage/></LandingGuard> }
                />
                <Route
                    path=StaticSegment("signin")
                    view=|| view! { <RedirectIfAuthed><SigninPage/></RedirectIfAuthed> }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| view! { <RedirectIfAuthed><SignupPage/></RedirectIfAuthed> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("send")
                    view=|| view! { <RequireAuth><SendMoneyPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("status")
                    view=|| view! { <RequireAuth><PaymentStatusPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
