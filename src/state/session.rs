//! Read-only snapshot of the host's auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns the session and may replace the snapshot at any time. The
//! header reads it once per render pass to pick between redirecting and
//! rendering, and to fill the user menu.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Session payload as returned by the host's REST session endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user: Option<LoggedInUser>,
    /// Locale codes the user may switch between, in host order.
    #[serde(default)]
    pub allowed_locales: Option<Vec<String>>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub session_location: Option<SessionLocation>,
}

/// Identity of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    pub uuid: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub person: Option<PersonRef>,
}

impl LoggedInUser {
    /// Preferred name for the header: person name, then account display.
    pub fn display_name(&self) -> &str {
        self.person
            .as_ref()
            .map(|p| p.display.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.display.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub display: String,
}

/// Login location chosen for this session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionLocation {
    pub uuid: String,
    #[serde(default)]
    pub display: String,
}

/// Session snapshot plus the host's loading flag.
///
/// The header only renders once `loading` is false; it has no loading state
/// of its own.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    pub fn loaded(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }
}

/// User shown in the account panel.
///
/// Logging out only changes what the panel displays. Signing out against
/// the host and any redirect belong to the host's own logout flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UserDisplay {
    #[default]
    Unknown,
    Known(LoggedInUser),
    LoggedOut,
}

impl UserDisplay {
    pub fn from_session(session: Option<&Session>) -> Self {
        session
            .and_then(|s| s.user.clone())
            .map_or(Self::Unknown, Self::Known)
    }

    pub fn user(&self) -> Option<&LoggedInUser> {
        match self {
            Self::Known(user) => Some(user),
            Self::Unknown | Self::LoggedOut => None,
        }
    }

    pub fn logout(&mut self) {
        *self = Self::LoggedOut;
    }
}
