//! Handing the login referrer to the host's login screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login screens live outside this crate. The header navigates there
//! with `{ referrer }` as history state, which is where those screens read
//! it. A copy is also left in `localStorage` under [`REFERRER_KEY`] for login
//! flows that leave the single-page app and come back.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use leptos_router::NavigateOptions;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::routing::LoginRedirect;

pub const REFERRER_KEY: &str = "shell_navbar_login_referrer";

/// What the login flow reads back after a guard redirect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerState {
    pub referrer: String,
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to encode storage value");
                return;
            }
        };
        if storage.set_item(key, &raw).is_err() {
            tracing::warn!(key, "localStorage write rejected");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.remove_item(key).is_err() {
                tracing::warn!(key, "localStorage remove rejected");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

pub fn referrer_state(redirect: &LoginRedirect) -> ReferrerState {
    ReferrerState { referrer: redirect.referrer.clone() }
}

/// History state for the login route: `{ "referrer": ... }`.
pub fn referrer_state_json(redirect: &LoginRedirect) -> serde_json::Value {
    serde_json::json!({ "referrer": redirect.referrer })
}

/// Router options carrying the referrer as history state.
pub fn referrer_navigate_options(redirect: &LoginRedirect) -> NavigateOptions {
    #[cfg(feature = "hydrate")]
    {
        let json = referrer_state_json(redirect).to_string();
        let state = match js_sys::JSON::parse(&json) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(referrer = %redirect.referrer, "could not build history state");
                None
            }
        };
        NavigateOptions {
            state: leptos_router::location::State::new(state),
            ..NavigateOptions::default()
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = redirect;
        NavigateOptions::default()
    }
}

/// Leave the redirect's referrer for the login flow.
pub fn store_referrer(redirect: &LoginRedirect) {
    save_json(REFERRER_KEY, &referrer_state(redirect));
}

/// Read and clear the stored referrer.
pub fn take_referrer() -> Option<String> {
    let state = load_json::<ReferrerState>(REFERRER_KEY)?;
    remove(REFERRER_KEY);
    Some(state.referrer)
}
