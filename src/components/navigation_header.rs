//! Top navigation header for the application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once above every route. Before rendering anything it checks the
//! session snapshot and sends sessions without a user or a login location to
//! the login screens. Otherwise it composes the logo, extension slots and
//! header panels around a single `PanelSelector`.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::header_panels::{
    AppSearchLaunch, Logo, NotificationsMenuButton, NotificationsMenuPanel, SideMenuPanel,
    UserMenuPanel, toggle_on_click,
};
use crate::components::offline_banner::OfflineBanner;
use crate::config::ShellConfig;
use crate::extension::{
    APP_MENU_SLOT, ExtensionSlot, NAV_MENU_SLOT, NOTIFICATIONS_MENU_BUTTON_SLOT, SlotState,
    TOP_NAV_ACTIONS_SLOT, TOP_NAV_INFO_SLOT, USER_PANEL_SLOT, use_connected_count,
};
use crate::routing::{GuardDecision, evaluate_guard, interpolate_link, pending_redirect};
use crate::state::layout::LayoutType;
use crate::state::panel::{PanelId, PanelSelector};
use crate::state::session::{SessionState, UserDisplay};
use crate::state::visibility::HeaderVisibility;
use crate::util::persistence::{referrer_navigate_options, store_referrer};

/// Navigation header. Redirects to `{base}login` or `{base}login/location`
/// instead of rendering when the session is not usable.
#[component]
pub fn NavigationHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<RwSignal<ShellConfig>>();
    let layout = expect_context::<RwSignal<LayoutType>>();
    let location = use_location();
    let navigate = use_navigate();

    let base = Memo::new(move |_| config.with(|c| c.base_path().unwrap_or_default()));
    let guard = Memo::new(move |_| {
        let pathname = location.pathname.get();
        session.with(|s| evaluate_guard(s.session.as_ref(), &pathname, &base.get()))
    });

    // Once on a login route the guard recomputes with that route as the
    // referrer; `pending_redirect` keeps it from navigating a second time.
    Effect::new(move || {
        let decision = guard.get();
        let pathname = location.pathname.get_untracked();
        let Some(redirect) = pending_redirect(&decision, &pathname, &base.get_untracked()) else {
            return;
        };
        tracing::info!(
            to = %redirect.to,
            referrer = %redirect.referrer,
            reason = ?redirect.reason,
            "session not usable, redirecting to login"
        );
        store_referrer(redirect);
        navigate(&redirect.to, referrer_navigate_options(redirect));
    });

    let panels = RwSignal::new(PanelSelector::new());
    provide_context(panels);

    // Seeded once from the session; only the local logout action changes it.
    let user = RwSignal::new(session.with_untracked(|s| UserDisplay::from_session(s.session.as_ref())));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::click, move |_| panels.update(PanelSelector::hide));
        on_cleanup(move || handle.remove());
    }

    let nav_items = use_connected_count(NAV_MENU_SLOT);
    let app_items = use_connected_count(APP_MENU_SLOT);
    let user_items = use_connected_count(USER_PANEL_SLOT);
    let visibility = Memo::new(move |_| {
        HeaderVisibility::derive(layout.get(), nav_items.get(), app_items.get(), user_items.get())
    });

    let is_active = move |panel: PanelId| panels.with(|p| p.is_active(panel));
    let logo_href = move || config.with(|c| interpolate_link(&c.logo.link, &base.get()));

    view! {
        <Show when=move || guard.get() == GuardDecision::Render>
            <OfflineBanner/>
            <header class="navbar" aria-label="OpenMRS">
                <Show when=move || visibility.get().show_hamburger>
                    <button
                        class="navbar__menu-button"
                        class:navbar__menu-button--active=move || is_active(PanelId::SideMenu)
                        aria-label="Open menu"
                        on:click=toggle_on_click(panels, PanelId::SideMenu)
                    >
                        {move || if is_active(PanelId::SideMenu) { "✕" } else { "☰" }}
                    </button>
                </Show>
                <a href=logo_href class="navbar__logo-link">
                    <div class=move || {
                        if visibility.get().show_hamburger { "" } else { "navbar__logo--spaced" }
                    }>
                        <Logo/>
                    </div>
                </a>
                <ExtensionSlot name=TOP_NAV_INFO_SLOT class="navbar__divider"/>
                <div class="navbar__global-bar">
                    <ExtensionSlot name=TOP_NAV_ACTIONS_SLOT class="navbar__actions"/>
                    <ExtensionSlot
                        name=NOTIFICATIONS_MENU_BUTTON_SLOT
                        state=SlotState { panels: Some(panels) }
                    />
                    <Show when=move || visibility.get().show_user_menu>
                        <button
                            class="navbar__action"
                            class:navbar__action--active=move || is_active(PanelId::UserMenu)
                            aria-label="Users"
                            name="Users"
                            on:click=toggle_on_click(panels, PanelId::UserMenu)
                        >
                            {move || if is_active(PanelId::UserMenu) { "✕" } else { "👤" }}
                        </button>
                    </Show>
                </div>
                <Show when=move || !layout.get().is_desktop()>
                    <SideMenuPanel expanded=Signal::derive(move || is_active(PanelId::SideMenu))/>
                </Show>
                <NotificationsMenuButton/>
                <Show when=move || visibility.get().show_app_menu>
                    <AppSearchLaunch/>
                </Show>
                <NotificationsMenuPanel expanded=Signal::derive(move || is_active(PanelId::NotificationsMenu))/>
                <Show when=move || visibility.get().show_user_menu>
                    <UserMenuPanel user=user expanded=Signal::derive(move || is_active(PanelId::UserMenu))/>
                </Show>
            </header>
        </Show>
    }
}
