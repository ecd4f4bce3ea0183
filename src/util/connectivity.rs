//! Browser connectivity, as reported by `navigator.onLine`.

#[cfg(test)]
#[path = "connectivity_test.rs"]
mod connectivity_test;

/// Current connectivity. Always online outside the browser.
pub fn is_online() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(true, |w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// Banner text for the given connectivity; `None` while online.
pub fn offline_message(online: bool) -> Option<&'static str> {
    (!online).then_some("You are offline. Changes will not be saved until the connection returns.")
}
