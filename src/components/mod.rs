//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and data panels while reading shared
//! session state from Leptos context providers.

pub mod appbar;
pub mod balance;
pub mod bottom_warning;
pub mod button;
pub mod input_box;
pub mod transaction_history;
pub mod users;
