//! Logo, buttons and collapsible panels composed by the navigation header.
//!
//! DESIGN
//! ======
//! Panels never own their open/closed state. They read `expanded` from the
//! header's `PanelSelector` and close through it, which keeps at most one of
//! them visible.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::config::ShellConfig;
use crate::extension::{
    APP_MENU_SLOT, ExtensionSlot, NAV_MENU_SLOT, NOTIFICATIONS_MENU_PANEL_SLOT, USER_PANEL_SLOT,
    use_slot_occupied,
};
use crate::state::panel::{PanelId, PanelSelector};
use crate::state::session::{SessionState, UserDisplay};

/// Click handler that toggles `panel` without letting the click reach the
/// outside-click listener, which would close it again.
pub(crate) fn toggle_on_click(
    panels: RwSignal<PanelSelector>,
    panel: PanelId,
) -> impl Fn(MouseEvent) + Copy + Send + Sync + 'static {
    move |ev: MouseEvent| {
        ev.stop_propagation();
        panels.update(|p| p.toggle(panel));
    }
}

/// Keeps clicks inside a panel from counting as outside clicks.
fn contain_click(ev: MouseEvent) {
    ev.stop_propagation();
}

/// Configured image logo, or the product name as text.
#[component]
pub fn Logo() -> impl IntoView {
    let config = expect_context::<RwSignal<ShellConfig>>();

    move || {
        let logo = config.with(|c| c.logo.clone());
        match logo.src {
            Some(src) => view! { <img class="navbar__logo-image" src=src alt=logo.alt/> }.into_any(),
            None => {
                let name = logo.name.unwrap_or_else(|| "OpenMRS".to_owned());
                view! { <span class="navbar__logo-text">{name}</span> }.into_any()
            }
        }
    }
}

/// Navigation drawer for compact layouts. Any click inside closes it.
#[component]
pub fn SideMenuPanel(#[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelSelector>>();

    view! {
        <Show when=move || expanded.get()>
            <nav
                class="side-menu-panel"
                aria-label="Side menu"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    panels.update(PanelSelector::hide);
                }
            >
                <ExtensionSlot name=NAV_MENU_SLOT class="side-menu-panel__items"/>
            </nav>
        </Show>
    }
}

/// Bell button for the notifications panel; hidden while nothing is
/// connected to the panel slot.
#[component]
pub fn NotificationsMenuButton() -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelSelector>>();
    let occupied = use_slot_occupied(NOTIFICATIONS_MENU_PANEL_SLOT);
    let active = move || panels.with(|p| p.is_active(PanelId::NotificationsMenu));

    view! {
        <Show when=move || occupied.get()>
            <button
                class="navbar__action"
                class:navbar__action--active=active
                aria-label="Notifications"
                on:click=toggle_on_click(panels, PanelId::NotificationsMenu)
            >
                {move || if active() { "✕" } else { "🔔" }}
            </button>
        </Show>
    }
}

#[component]
pub fn NotificationsMenuPanel(#[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || expanded.get()>
            <div class="header-panel notifications-panel" aria-label="Notifications" on:click=contain_click>
                <ExtensionSlot name=NOTIFICATIONS_MENU_PANEL_SLOT/>
            </div>
        </Show>
    }
}

/// Search icon opening the app launcher.
#[component]
pub fn AppSearchLaunch() -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelSelector>>();
    let active = move || panels.with(|p| p.is_active(PanelId::AppMenu));

    view! {
        <button
            class="navbar__action"
            class:navbar__action--active=active
            aria-label="App menu"
            on:click=toggle_on_click(panels, PanelId::AppMenu)
        >
            {move || if active() { "✕" } else { "⌕" }}
        </button>
        <Show when=active>
            <div class="header-panel app-menu-panel" on:click=contain_click>
                <ExtensionSlot name=APP_MENU_SLOT class="app-menu-panel__items"/>
            </div>
        </Show>
    }
}

/// Account panel: who is signed in, where, in which locale, plus whatever
/// the host connected to the user panel slot.
#[component]
pub fn UserMenuPanel(user: RwSignal<UserDisplay>, #[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelSelector>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let user_name = move || {
        user.with(|u| {
            u.user()
                .map_or_else(|| "—".to_owned(), |u| u.display_name().to_owned())
        })
    };
    let location_name = move || {
        session.with(|s| {
            s.session
                .as_ref()
                .and_then(|s| s.session_location.as_ref())
                .map(|l| l.display.clone())
                .unwrap_or_default()
        })
    };
    let locales = move || {
        session.with(|s| {
            let current = s.session.as_ref().and_then(|s| s.locale.clone());
            let allowed = s
                .session
                .as_ref()
                .and_then(|s| s.allowed_locales.clone())
                .unwrap_or_default();
            (current, allowed)
        })
    };

    let on_logout = move |ev: MouseEvent| {
        ev.stop_propagation();
        user.update(UserDisplay::logout);
        panels.update(PanelSelector::hide);
    };

    view! {
        <Show when=move || expanded.get()>
            <div class="header-panel user-menu-panel" aria-label="User menu" on:click=contain_click>
                <div class="user-menu-panel__identity">
                    <span class="user-menu-panel__name">{user_name}</span>
                    <span class="user-menu-panel__location">{location_name}</span>
                </div>
                <ul class="user-menu-panel__locales">
                    {move || {
                        let (current, allowed) = locales();
                        allowed
                            .into_iter()
                            .map(|code| {
                                let selected = current.as_deref() == Some(code.as_str());
                                view! {
                                    <li class:user-menu-panel__locale--current=selected>{code}</li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <ExtensionSlot name=USER_PANEL_SLOT class="user-menu-panel__items"/>
                <button class="btn user-menu-panel__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </Show>
    }
}
