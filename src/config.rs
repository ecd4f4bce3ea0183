//! Host-supplied shell configuration.
//!
//! DESIGN
//! ======
//! Every field has a default so a host can ship a partial JSON document (or
//! none at all). Browser builds read the document from the
//! `#shell-navbar-config` element rendered by the host page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::routing::BasePath;

/// DOM id of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "shell-navbar-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    pub logo: LogoConfig,
    /// Mount path of the single-page app.
    pub spa_base: String,
    /// REST endpoint returning the current session.
    pub session_endpoint: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            logo: LogoConfig::default(),
            spa_base: "/openmrs/spa/".to_owned(),
            session_endpoint: "/openmrs/ws/rest/v1/session".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Link target; may contain `${openmrsSpaBase}`.
    pub link: String,
    /// Image URL. The text logo is used when absent.
    pub src: Option<String>,
    pub alt: String,
    pub name: Option<String>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            link: "${openmrsSpaBase}home".to_owned(),
            src: None,
            alt: "Logo".to_owned(),
            name: None,
        }
    }
}

impl ShellConfig {
    /// # Errors
    ///
    /// Returns [`ShellError::Config`] for malformed JSON and
    /// [`ShellError::InvalidBasePath`] for a relative `spaBase`.
    pub fn from_json(raw: &str) -> Result<Self, ShellError> {
        let config: Self = serde_json::from_str(raw)?;
        config.base_path()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ShellError::InvalidBasePath`] if `spa_base` is relative.
    pub fn base_path(&self) -> Result<BasePath, ShellError> {
        BasePath::new(&self.spa_base)
    }

    /// Read the config embedded in the host page, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = read_config_element() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring shell config");
                Self::default()
            }
        }
    }
}

fn read_config_element() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window().and_then(|w| w.document())?;
        document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
