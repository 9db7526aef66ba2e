//! REST API helpers for communicating with the KoshPay server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning `ApiError::Transport` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` so pages can route a 401 into
//! the forced sign-out transition and surface everything else inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::error::message_from_body;
use super::error::ApiError;
use super::types::{CurrentUser, DirectoryUser, SignupRequest, TransactionPage};
#[cfg(feature = "hydrate")]
use super::types::{BalanceResponse, DirectoryResponse};

/// Server base URL baked in at compile time. The empty default keeps every
/// request same-origin relative.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("KOSHPAY_SERVER_URL").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn signin_endpoint() -> String {
    format!("{}/api/v1/user/signin", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint() -> String {
    format!("{}/api/v1/user/signup", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn get_user_endpoint() -> String {
    format!("{}/api/v1/user/getUser", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bulk_endpoint(filter: &str) -> String {
    format!("{}/api/v1/user/bulk?filter={}", api_base(), escape_query_value(filter))
}

#[cfg(any(test, feature = "hydrate"))]
fn balance_endpoint() -> String {
    format!("{}/api/v1/account/balance", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn transfer_endpoint() -> String {
    format!("{}/api/v1/account/transfer", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn transactions_endpoint(page: u32, limit: u32) -> String {
    format!("{}/api/v1/account/transactions?page={page}&limit={limit}", api_base())
}

/// Percent-encode a query-string value. Covers the unreserved set only, so
/// search filters and display names survive `?filter=` and `?name=` slots.
pub(crate) fn escape_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            other => {
                out.push_str(&format!("%{other:02X}"));
            }
        }
    }
    out
}

/// `Authorization` header value for an authenticated call.
#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract a usable token from a 2xx sign-in/sign-up body. Absent,
/// non-string, and empty tokens are all unusable and must not be persisted.
#[cfg(any(test, feature = "hydrate"))]
fn token_from_body(body: &serde_json::Value) -> Option<String> {
    body.get("token")
        .and_then(serde_json::Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

#[cfg(feature = "hydrate")]
const MISSING_TOKEN_MESSAGE: &str = "Sign in failed: the server returned no token.";

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn protocol(err: gloo_net::Error) -> ApiError {
    ApiError::Protocol(err.to_string())
}

/// Classify a non-2xx response, reading the `{message}` body when decodable.
#[cfg(feature = "hydrate")]
async fn reject_from_response(resp: &gloo_net::http::Response) -> ApiError {
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| message_from_body(&body));
    ApiError::from_status(resp.status(), message)
}

/// Exchange credentials for a bearer token via `POST /api/v1/user/signin`.
///
/// # Errors
///
/// `Rejected` on a 4xx or on a 200 body without a usable token,
/// `Transport`/`Protocol` on network or decode failures.
pub async fn sign_in(username: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&signin_endpoint())
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(reject_from_response(&resp).await);
        }
        let body: serde_json::Value = resp.json().await.map_err(protocol)?;
        token_from_body(&body).ok_or_else(|| ApiError::Rejected(MISSING_TOKEN_MESSAGE.to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Transport("not available during server rendering".to_owned()))
    }
}

/// Create an account via `POST /api/v1/user/signup`. The server returns a
/// usable token directly; no follow-up sign-in is attempted.
///
/// # Errors
///
/// Same contract as [`sign_in`].
pub async fn sign_up(request: &SignupRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&signup_endpoint())
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(reject_from_response(&resp).await);
        }
        let body: serde_json::Value = resp.json().await.map_err(protocol)?;
        token_from_body(&body).ok_or_else(|| ApiError::Rejected(MISSING_TOKEN_MESSAGE.to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport("not available during server rendering".to_owned()))
    }
}

/// Validate a token and fetch the signed-in user's profile via
/// `GET /api/v1/user/getUser`.
///
/// # Errors
///
/// `Unauthorized` when the token is invalid or expired.
pub async fn fetch_current_user(token: &str) -> Result<CurrentUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&get_user_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(reject_from_response(&resp).await);
        }
        resp.json::<CurrentUser>().await.map_err(protocol)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available during server rendering".to_owned()))
    }
}

/// Search the user directory via `GET /api/v1/user/bulk?filter=`.
///
/// # Errors
///
/// `Unauthorized` when the token is invalid or expired.
pub async fn search_users(token: &str, filter: &str) -> Result<Vec<DirectoryUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&bulk_endpoint(filter))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(reject_from_response(&resp).await);
        }
        let body: DirectoryResponse = resp.json().await.map_err(protocol)?;
        Ok(body.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, filter);
        Err(ApiError::Transport("not available during server rendering".to_owned()))
    }
}

/// Fetch the account balance via `GET /api/v1/account/balance`.
///
/// # Errors
///
/// `Unauthorized` when the token is invalid or expired.
pub async fn fetch_balance(token: &str) -> Result<f64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&balance_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(reject_from_response(&resp).await);
        }
        let body: BalanceResponse = resp.json().await.map_err(protocol)?;
        Ok(body.balance)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available during server rendering".to_owned()))
    }
}

/// Move money to another user via `POST /api/v1/account/transfer`.
/// Returns the server's confirmation message.
///
/// # Errors
///
/// `Rejected` on insufficient funds or an invalid recipient,
/// `Unauthorized` when the token is invalid or expired.
pub async fn transfer(token: &str, to: &str, amount: f64) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "to": to, "amount": amount });
        let resp = gloo_net::http::Request::post(&transfer_endpoint())
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(reject_from_response(&resp).await);
        }
        let body: serde_json::Value = resp.json().await.map_err(protocol)?;
        Ok(message_from_body(&body).unwrap_or_else(|| "Transfer complete.".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, to, amount);
        Err(ApiError::Transport("not available during server rendering".to_owned()))
    }
}

/// Fetch one page of transaction history via
/// `GET /api/v1/account/transactions?page=&limit=`.
///
/// # Errors
///
/// `Unauthorized` when the token is invalid or expired.
pub async fn fetch_transactions(token: &str, page: u32, limit: u32) -> Result<TransactionPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&transactions_endpoint(page, limit))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(reject_from_response(&resp).await);
        }
        resp.json::<TransactionPage>().await.map_err(protocol)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, page, limit);
        Err(ApiError::Transport("not available during server rendering".to_owned()))
    }
}
