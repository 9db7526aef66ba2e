//! Wire DTOs for the KoshPay REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON (Mongo-style `_id`, camelCase user
//! references) via serde renames so the rest of the client can use ordinary
//! Rust naming. `getUser` responses are decoded as the bare user object;
//! `_id` is accepted as an alias so both server revisions deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `GET /api/v1/user/getUser`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique user identifier.
    #[serde(alias = "_id")]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
}

/// A directory entry from `GET /api/v1/user/bulk`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
}

/// Envelope for the user directory. The server keys the result list under
/// singular `user` even though it holds many entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryResponse {
    #[serde(rename = "user", default)]
    pub users: Vec<DirectoryUser>,
}

/// Request body for `POST /api/v1/user/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub password: String,
}

/// Response body for `GET /api/v1/account/balance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: f64,
}

/// One side of a transfer inside a transaction record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParty {
    #[serde(rename = "_id")]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
}

/// A settled or pending transfer from the transaction history endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fromUser")]
    pub from_user: TransactionParty,
    #[serde(rename = "toUser")]
    pub to_user: TransactionParty,
    pub amount: f64,
    /// Server-reported settlement status (`"success"`, `"failed"`, ...).
    pub status: String,
    /// ISO 8601 creation time, when the server includes it.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Pagination block accompanying the transaction list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    /// Total number of pages available.
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Response body for `GET /api/v1/account/transactions`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}
