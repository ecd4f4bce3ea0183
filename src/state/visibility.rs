//! Which header affordances render, derived from layout and slot contents.
//!
//! These flags gate rendering only. A panel stays open in `PanelSelector`
//! even if the button that opened it stops rendering.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use super::layout::LayoutType;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderVisibility {
    pub show_hamburger: bool,
    pub show_app_menu: bool,
    pub show_user_menu: bool,
}

impl HeaderVisibility {
    pub fn derive(layout: LayoutType, nav_items: usize, app_items: usize, user_items: usize) -> Self {
        Self {
            show_hamburger: !layout.is_desktop() && nav_items > 0,
            show_app_menu: app_items > 0,
            show_user_menu: user_items > 0,
        }
    }
}
