//! Dark theme initialization and toggle.
//!
//! Applies a `data-theme` attribute to the `<html>` element from the stored
//! preference, falling back to `prefers-color-scheme`. Toggling writes the
//! choice back to localStorage. SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "koshpay_dark";

/// Preference stored by a previous toggle, if any.
fn stored_preference() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
        Some(value == "true")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// OS-level preference via the `prefers-color-scheme` media query.
fn system_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Preference to apply on startup: an explicit stored choice wins over the
/// system default.
pub fn initial_preference() -> bool {
    stored_preference().unwrap_or_else(system_preference)
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, persist the choice, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
