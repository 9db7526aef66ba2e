//! Application state modules.
//!
//! ARCHITECTURE
//! ============
//! `auth` is the pure session state machine, `session` wraps it with the
//! asynchronous coordinator operations, and `ui` holds theme chrome. State
//! is provided once via Leptos context from the root component.

pub mod auth;
pub mod session;
pub mod ui;
