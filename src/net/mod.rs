//! Networking modules for the KoshPay REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and
//! `error` is the failure taxonomy the whole client shares.

pub mod api;
pub mod error;
pub mod types;
