//! Named extension slots and the registry that fills them.
//!
//! ARCHITECTURE
//! ============
//! The host registers render functions under a slot name; the header asks
//! the registry what is connected to a slot both to render it and to decide
//! whether an affordance (hamburger, app search, user menu) shows at all.
//! Registration order is render order.

#[cfg(test)]
#[path = "extension_test.rs"]
mod extension_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::error::ShellError;
use crate::state::panel::PanelSelector;

/// Navigation items; non-empty enables the hamburger on compact layouts.
pub const NAV_MENU_SLOT: &str = "patient-chart-dashboard-slot";
/// App launcher items; non-empty enables app search.
pub const APP_MENU_SLOT: &str = "app-menu-slot";
/// Account panel items; non-empty enables the user menu.
pub const USER_PANEL_SLOT: &str = "user-panel-slot";
pub const TOP_NAV_INFO_SLOT: &str = "top-nav-info-slot";
pub const TOP_NAV_ACTIONS_SLOT: &str = "top-nav-actions-slot";
pub const NOTIFICATIONS_MENU_BUTTON_SLOT: &str = "notifications-menu-button-slot";
pub const NOTIFICATIONS_MENU_PANEL_SLOT: &str = "notifications-menu-panel-slot";

/// State a slot hands to its extensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlotState {
    /// Header panel selector, for extensions that open their own panel.
    pub panels: Option<RwSignal<PanelSelector>>,
}

pub type ExtensionRender = Arc<dyn Fn(SlotState) -> AnyView + Send + Sync>;

#[derive(Clone)]
pub struct Extension {
    pub id: String,
    pub render: ExtensionRender,
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Slot name to ordered extensions.
#[derive(Clone, Debug, Default)]
pub struct ExtensionRegistry {
    slots: HashMap<String, Vec<Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extension to `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::DuplicateExtension`] if `id` is already in `slot`.
    pub fn register<F>(&mut self, slot: &str, id: &str, render: F) -> Result<(), ShellError>
    where
        F: Fn(SlotState) -> AnyView + Send + Sync + 'static,
    {
        let entries = self.slots.entry(slot.to_owned()).or_default();
        if entries.iter().any(|e| e.id == id) {
            return Err(ShellError::DuplicateExtension {
                slot: slot.to_owned(),
                id: id.to_owned(),
            });
        }
        entries.push(Extension {
            id: id.to_owned(),
            render: Arc::new(render),
        });
        tracing::debug!(slot, id, "extension registered");
        Ok(())
    }

    /// Remove `id` from `slot`. Returns whether anything was removed.
    pub fn unregister(&mut self, slot: &str, id: &str) -> bool {
        let Some(entries) = self.slots.get_mut(slot) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|e| e.id != id);
        entries.len() != before
    }

    pub fn connected(&self, slot: &str) -> &[Extension] {
        self.slots.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn connected_ids(&self, slot: &str) -> Vec<String> {
        self.connected(slot).iter().map(|e| e.id.clone()).collect()
    }

    pub fn count(&self, slot: &str) -> usize {
        self.connected(slot).len()
    }

    pub fn has_connected(&self, slot: &str) -> bool {
        self.count(slot) > 0
    }
}

/// Reactive count of extensions connected to `slot`.
pub fn use_connected_count(slot: &'static str) -> Memo<usize> {
    let registry = expect_context::<RwSignal<ExtensionRegistry>>();
    Memo::new(move |_| registry.with(|r| r.count(slot)))
}

/// Reactive "anything connected to `slot`" flag.
pub fn use_slot_occupied(slot: &'static str) -> Memo<bool> {
    let registry = expect_context::<RwSignal<ExtensionRegistry>>();
    Memo::new(move |_| registry.with(|r| r.has_connected(slot)))
}

/// Renders every extension connected to `name`, in registration order.
#[component]
pub fn ExtensionSlot(
    name: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional)] state: SlotState,
) -> impl IntoView {
    let registry = expect_context::<RwSignal<ExtensionRegistry>>();
    let extensions = move || registry.with(|r| r.connected(name).to_vec());

    view! {
        <div class=format!("extension-slot {class}") data-extension-slot=name>
            {move || {
                extensions()
                    .into_iter()
                    .map(|extension| {
                        view! {
                            <div data-extension-id=extension.id.clone()>
                                {(extension.render)(state)}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
