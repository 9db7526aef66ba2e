//! Durable browser-storage slot for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! One well-known localStorage key is the only durable client state. The
//! session coordinator owns every read/write; pages and components never
//! touch browser storage directly. Writes are visible to other same-origin
//! tabs through the `storage` event, which [`subscribe`] taps so a sign-out
//! in one tab signs out all of them.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "koshpay_token";

/// Read the stored token. Unavailable or inaccessible storage reads as
/// "no token".
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token`, overwriting any previous value.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Invoke `on_change` with the current token whenever another same-origin
/// execution context writes or clears it. The listener lives for the whole
/// page, so the callback closure is intentionally leaked.
#[cfg(feature = "hydrate")]
pub fn subscribe<F>(on_change: F)
where
    F: Fn(Option<String>) + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
        // A null key means the whole store was cleared.
        let relevant = event.key().is_none_or(|key| key == TOKEN_KEY);
        if relevant {
            on_change(read());
        }
    });
    let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    closure.forget();
}
