//! Banner shown above the header while the browser is offline.

use leptos::prelude::*;

use crate::util::connectivity::{is_online, offline_message};

#[component]
pub fn OfflineBanner() -> impl IntoView {
    let online = RwSignal::new(is_online());

    #[cfg(feature = "hydrate")]
    {
        let on = window_event_listener(leptos::ev::online, move |_| {
            tracing::info!("connection restored");
            online.set(true);
        });
        let off = window_event_listener(leptos::ev::offline, move |_| {
            tracing::warn!("connection lost");
            online.set(false);
        });
        on_cleanup(move || {
            on.remove();
            off.remove();
        });
    }

    move || {
        offline_message(online.get()).map(|message| {
            view! { <div class="offline-banner" role="status">{message}</div> }
        })
    }
}
