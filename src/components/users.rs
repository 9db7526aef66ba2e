//! Searchable user directory with per-row Send Money actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every keystroke in the search box refetches `user/bulk?filter=`; the
//! recipient's id and display name travel to the transfer screen through
//! query parameters.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::api::escape_query_value;
use crate::net::error::ApiError;
use crate::net::types::DirectoryUser;
use crate::state::auth::AuthState;
use crate::state::session;

/// Uppercased avatar initials; `?` when both names are empty.
pub(crate) fn initials(firstname: &str, lastname: &str) -> String {
    let mut out = String::new();
    if let Some(first) = firstname.chars().next() {
        out.extend(first.to_uppercase());
    }
    if let Some(last) = lastname.chars().next() {
        out.extend(last.to_uppercase());
    }
    if out.is_empty() {
        out.push('?');
    }
    out
}

/// Transfer-screen link carrying the recipient id and full display name.
pub(crate) fn send_money_href(user: &DirectoryUser) -> String {
    let full_name = format!("{} {}", user.firstname, user.lastname);
    format!("/send?id={}&name={}", user.id, escape_query_value(&full_name))
}

/// Directory panel: search box plus one row per matching user.
#[component]
pub fn UserDirectory() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let filter = RwSignal::new(String::new());

    let users = LocalResource::new(move || {
        let query = filter.get();
        async move {
            let Some(token) = session::bearer_token() else {
                return Err(ApiError::Unauthorized);
            };
            api::search_users(&token, &query).await
        }
    });

    Effect::new(move || {
        if let Some(Err(err)) = users.get() {
            session::note_api_error(auth, &err);
        }
    });

    view! {
        <div class="user-directory">
            <h2 class="user-directory__title">"Users"</h2>
            <input
                class="user-directory__search"
                type="text"
                placeholder="Search users..."
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
            <Suspense fallback=move || view! { <p class="user-directory__loading">"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="user-directory__empty">"No users found."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="user-directory__rows">
                                        {list
                                            .into_iter()
                                            .map(|user| view! { <UserRow user/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="user-directory__error">{err.user_message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn UserRow(user: DirectoryUser) -> impl IntoView {
    let navigate = use_navigate();
    let href = send_money_href(&user);
    let avatar = initials(&user.firstname, &user.lastname);
    let full_name = format!("{} {}", user.firstname, user.lastname);

    view! {
        <div class="user-directory__row">
            <div class="user-directory__identity">
                <span class="user-directory__avatar">{avatar}</span>
                <div>
                    <p class="user-directory__name">{full_name}</p>
                    <p class="user-directory__username">{user.username.clone()}</p>
                </div>
            </div>
            <button
                class="user-directory__send"
                on:click=move |_| navigate(&href, NavigateOptions::default())
            >
                "Send Money"
            </button>
        </div>
    }
}
