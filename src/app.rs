//! Root component and host context wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::navigation_header::NavigationHeader;
use crate::config::ShellConfig;
use crate::extension::ExtensionRegistry;
use crate::state::layout::LayoutType;
use crate::state::session::SessionState;

/// Host-owned state the header reads. Every field is a context-provided
/// signal; hosts update them and the header follows.
#[derive(Clone, Copy, Debug)]
pub struct HostContext {
    pub session: RwSignal<SessionState>,
    pub config: RwSignal<ShellConfig>,
    pub layout: RwSignal<LayoutType>,
    pub registry: RwSignal<ExtensionRegistry>,
}

/// Provide the contexts `NavigationHeader` expects. Hosts embedding the
/// header in their own tree call this above it instead of using [`App`].
pub fn provide_host_context(config: ShellConfig, registry: ExtensionRegistry) -> HostContext {
    let host = HostContext {
        session: RwSignal::new(SessionState::default()),
        config: RwSignal::new(config),
        layout: RwSignal::new(LayoutType::default()),
        registry: RwSignal::new(registry),
    };
    provide_context(host.session);
    provide_context(host.config);
    provide_context(host.layout);
    provide_context(host.registry);
    host
}

/// Standalone shell: loads config and session, then mounts the header.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let host = provide_host_context(ShellConfig::load(), ExtensionRegistry::new());
    let session = host.session;

    // Off the browser the host sets `HostContext::session` itself; the
    // header renders from whatever snapshot it provides.
    #[cfg(feature = "hydrate")]
    {
        session.update(|s| s.loading = true);
        let endpoint = host.config.with_untracked(|c| c.session_endpoint.clone());
        leptos::task::spawn_local(async move {
            let snapshot = match crate::net::api::fetch_session(&endpoint).await {
                Ok(s) => Some(s),
                Err(e) => {
                    tracing::warn!(error = %e, "session fetch failed, treating as signed out");
                    None
                }
            };
            session.set(SessionState::loaded(snapshot));
        });
    }

    view! {
        <Title text="OpenMRS"/>
        <Router>
            <Show when=move || !session.get().loading>
                <NavigationHeader/>
            </Show>
        </Router>
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
