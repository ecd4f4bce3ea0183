//! Exclusive header-panel selection.
//!
//! DESIGN
//! ======
//! The open panel is a single `Option<PanelId>` rather than one flag per
//! panel, so two panels can never be expanded at once.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::fmt;

/// A collapsible region of the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// Hamburger-driven navigation drawer (non-desktop layouts only).
    SideMenu,
    /// Account panel behind the avatar button.
    UserMenu,
    /// Notifications dropdown.
    NotificationsMenu,
    /// App launcher opened from the search icon.
    AppMenu,
    /// Panel contributed by an extension, keyed by its label.
    Extension(&'static str),
}

impl PanelId {
    /// Stable label used in DOM ids and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SideMenu => "sideMenu",
            Self::UserMenu => "userMenu",
            Self::NotificationsMenu => "notificationsMenu",
            Self::AppMenu => "appMenu",
            Self::Extension(label) => label,
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which panel, if any, is expanded.
///
/// Lives as a `RwSignal<PanelSelector>` owned by the header component; it is
/// created collapsed on mount and dropped with the component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelSelector {
    active: Option<PanelId>,
}

impl PanelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently expanded panel.
    pub fn active(&self) -> Option<PanelId> {
        self.active
    }

    pub fn is_active(&self, panel: PanelId) -> bool {
        self.active == Some(panel)
    }

    /// Collapse `panel` if it is open, otherwise open it in place of
    /// whatever was open before.
    pub fn toggle(&mut self, panel: PanelId) {
        let previous = self.active;
        self.active = if previous == Some(panel) { None } else { Some(panel) };
        tracing::debug!(
            panel = %panel,
            previous = previous.map(PanelId::as_str),
            open = self.active.is_some(),
            "header panel toggled"
        );
    }

    /// Collapse everything.
    pub fn hide(&mut self) {
        if let Some(previous) = self.active.take() {
            tracing::debug!(panel = %previous, "header panel hidden");
        }
    }
}
