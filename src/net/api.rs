//! REST helpers for the host session endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns [`ShellError::Unavailable`]; the host is
//! expected to provide the session snapshot itself there.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ShellError` so the caller can treat them as "no
//! session" and let the guard redirect to login.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ShellError;
use crate::state::session::Session;

/// Custom representation requesting only the fields the header reads.
pub const SESSION_REPRESENTATION: &str =
    "custom:(uuid,authenticated,sessionId,user:(uuid,display,username,person:(uuid,display)),sessionLocation:(uuid,display),allowedLocales,locale)";

#[cfg(any(test, feature = "hydrate"))]
fn session_url(endpoint: &str) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}v={SESSION_REPRESENTATION}")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

/// Fetch the current session snapshot.
///
/// # Errors
///
/// Returns [`ShellError::Http`] on transport, status or decoding failures.
pub async fn fetch_session(endpoint: &str) -> Result<Session, ShellError> {
    #[cfg(feature = "hydrate")]
    {
        let url = session_url(endpoint);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ShellError::Http(e.to_string()))?;
        if !resp.ok() {
            return Err(ShellError::Http(session_failed_message(resp.status())));
        }
        resp.json::<Session>()
            .await
            .map_err(|e| ShellError::Http(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ShellError::Unavailable)
    }
}
