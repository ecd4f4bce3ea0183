#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::routing::RedirectReason;

fn redirect() -> LoginRedirect {
    LoginRedirect {
        to: "/openmrs/spa/login".to_owned(),
        referrer: "/patient/123".to_owned(),
        reason: RedirectReason::NoUser,
    }
}

#[test]
fn referrer_state_carries_only_the_referrer() {
    let state = referrer_state(&redirect());
    assert_eq!(state.referrer, "/patient/123");
    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        serde_json::json!({ "referrer": "/patient/123" })
    );
}

#[test]
fn storage_is_noop_outside_browser() {
    store_referrer(&redirect());
    assert_eq!(take_referrer(), None);
    assert_eq!(load_json::<ReferrerState>(REFERRER_KEY), None);
    remove(REFERRER_KEY);
}

#[test]
fn history_state_matches_stored_state() {
    let redirect = redirect();
    assert_eq!(
        referrer_state_json(&redirect),
        serde_json::to_value(referrer_state(&redirect)).unwrap()
    );
}

#[test]
fn navigate_options_push_a_new_entry() {
    let options = referrer_navigate_options(&redirect());
    assert!(!options.replace);
}
