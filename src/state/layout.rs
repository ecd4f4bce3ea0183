//! Responsive layout classification supplied by the host.
//!
//! Breakpoint detection is the host's job; this module only names the
//! classes and answers whether one of them counts as desktop.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Coarse layout classes reported by the host shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    Phone,
    Tablet,
    SmallDesktop,
    #[default]
    LargeDesktop,
}

impl LayoutType {
    pub fn is_desktop(self) -> bool {
        matches!(self, Self::SmallDesktop | Self::LargeDesktop)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::SmallDesktop => "small-desktop",
            Self::LargeDesktop => "large-desktop",
        }
    }
}

impl FromStr for LayoutType {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "phone" => Ok(Self::Phone),
            "tablet" => Ok(Self::Tablet),
            "small-desktop" => Ok(Self::SmallDesktop),
            "large-desktop" => Ok(Self::LargeDesktop),
            other => Err(ShellError::UnknownLayout(other.to_owned())),
        }
    }
}
