use super::*;

// =============================================================
// show_hamburger
// =============================================================

#[test]
fn hamburger_hidden_on_desktop_even_with_items() {
    assert!(!HeaderVisibility::derive(LayoutType::LargeDesktop, 3, 0, 0).show_hamburger);
    assert!(!HeaderVisibility::derive(LayoutType::SmallDesktop, 1, 0, 0).show_hamburger);
}

#[test]
fn hamburger_hidden_without_nav_items() {
    assert!(!HeaderVisibility::derive(LayoutType::Tablet, 0, 0, 0).show_hamburger);
    assert!(!HeaderVisibility::derive(LayoutType::Phone, 0, 5, 5).show_hamburger);
}

#[test]
fn hamburger_shown_on_compact_layout_with_items() {
    assert!(HeaderVisibility::derive(LayoutType::Tablet, 1, 0, 0).show_hamburger);
    assert!(HeaderVisibility::derive(LayoutType::Phone, 4, 0, 0).show_hamburger);
}

// =============================================================
// app / user menus
// =============================================================

#[test]
fn app_and_user_menus_follow_item_counts() {
    let none = HeaderVisibility::derive(LayoutType::LargeDesktop, 0, 0, 0);
    assert_eq!(none, HeaderVisibility::default());

    let both = HeaderVisibility::derive(LayoutType::LargeDesktop, 0, 2, 1);
    assert!(both.show_app_menu);
    assert!(both.show_user_menu);
}

#[test]
fn app_and_user_menus_ignore_layout() {
    for layout in [LayoutType::Phone, LayoutType::Tablet, LayoutType::SmallDesktop] {
        let flags = HeaderVisibility::derive(layout, 0, 1, 0);
        assert!(flags.show_app_menu);
        assert!(!flags.show_user_menu);
    }
}

// =============================================================
// Decoupling from panel selection
// =============================================================

#[test]
fn open_panel_survives_its_gate_turning_false() {
    use crate::state::panel::{PanelId, PanelSelector};

    let mut panels = PanelSelector::new();
    let before = HeaderVisibility::derive(LayoutType::Tablet, 2, 0, 1);
    assert!(before.show_user_menu);
    panels.toggle(PanelId::UserMenu);

    // Last user-panel extension goes away while the menu is open.
    let after = HeaderVisibility::derive(LayoutType::Tablet, 2, 0, 0);
    assert!(!after.show_user_menu);
    assert!(panels.is_active(PanelId::UserMenu));
}

#[test]
fn side_menu_stays_selected_when_layout_becomes_desktop() {
    use crate::state::panel::{PanelId, PanelSelector};

    let mut panels = PanelSelector::new();
    assert!(HeaderVisibility::derive(LayoutType::Phone, 1, 0, 0).show_hamburger);
    panels.toggle(PanelId::SideMenu);

    assert!(!HeaderVisibility::derive(LayoutType::LargeDesktop, 1, 0, 0).show_hamburger);
    assert_eq!(panels.active(), Some(PanelId::SideMenu));
}
