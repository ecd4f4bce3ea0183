//! Session guard and login redirect targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every render of the header first decides whether the session may see the
//! shell at all. Sessions without a user go to `{base}login`; sessions with a
//! user but no location go to `{base}login/location`. Both carry the path the
//! user was on so the login flow can send them back.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::state::session::Session;

/// Placeholder the host substitutes with the SPA base in configured links.
pub const SPA_BASE_PLACEHOLDER: &str = "${openmrsSpaBase}";

/// Mount path of the single-page app, always `/`-prefixed and `/`-terminated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidBasePath`] unless `raw` starts with `/`.
    pub fn new(raw: &str) -> Result<Self, ShellError> {
        let raw = raw.trim();
        if !raw.starts_with('/') {
            return Err(ShellError::InvalidBasePath(raw.to_owned()));
        }
        let mut path = raw.to_owned();
        if !path.ends_with('/') {
            path.push('/');
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn login_route(&self) -> String {
        format!("{}login", self.0)
    }

    pub fn location_route(&self) -> String {
        format!("{}login/location", self.0)
    }

    /// Whether `pathname` is the login route or one of its sub-routes.
    pub fn is_login_path(&self, pathname: &str) -> bool {
        let login = self.login_route();
        pathname
            .strip_prefix(login.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self("/openmrs/spa/".to_owned())
    }
}

/// Path relative to the app root, keeping the base's trailing `/`.
///
/// `/openmrs/spa/patient/123` under `/openmrs/spa/` becomes `/patient/123`:
/// the slice starts one character before the end of the base. When the base
/// does not occur in `pathname` the whole pathname is returned.
pub fn referrer_path(pathname: &str, base: &BasePath) -> String {
    let base = base.as_str();
    let Some(index) = pathname.find(base) else {
        return pathname.to_owned();
    };
    let last_char = base.chars().next_back().map_or(0, char::len_utf8);
    pathname[index + base.len() - last_char..].to_owned()
}

/// Substitute the SPA base into a configured link.
pub fn interpolate_link(link: &str, base: &BasePath) -> String {
    link.replace(SPA_BASE_PLACEHOLDER, base.as_str())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
    NoUser,
    NoLocation,
}

/// Where to send the browser and what to hand the login flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRedirect {
    pub to: String,
    pub referrer: String,
    pub reason: RedirectReason,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(LoginRedirect),
}

impl GuardDecision {
    pub fn redirect(&self) -> Option<&LoginRedirect> {
        match self {
            Self::Render => None,
            Self::Redirect(redirect) => Some(redirect),
        }
    }
}

/// The redirect to perform from `pathname`, if any.
///
/// Nothing happens once the browser is already on a login route; otherwise
/// the guard re-running after navigation would replace the real referrer
/// with the login path itself.
pub fn pending_redirect<'a>(
    decision: &'a GuardDecision,
    pathname: &str,
    base: &BasePath,
) -> Option<&'a LoginRedirect> {
    decision.redirect().filter(|_| !base.is_login_path(pathname))
}

/// Three-way branch: no user, no location, or render.
pub fn evaluate_guard(session: Option<&Session>, pathname: &str, base: &BasePath) -> GuardDecision {
    let reason = match session {
        Some(s) if s.user.is_some() => {
            if s.session_location.is_some() {
                return GuardDecision::Render;
            }
            RedirectReason::NoLocation
        }
        _ => RedirectReason::NoUser,
    };
    let to = match reason {
        RedirectReason::NoUser => base.login_route(),
        RedirectReason::NoLocation => base.location_route(),
    };
    GuardDecision::Redirect(LoginRedirect {
        to,
        referrer: referrer_path(pathname, base),
        reason,
    })
}
