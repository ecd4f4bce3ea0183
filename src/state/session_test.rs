use super::*;

fn user(name: &str) -> LoggedInUser {
    LoggedInUser {
        uuid: "u-1".to_owned(),
        display: "admin".to_owned(),
        username: Some("admin".to_owned()),
        person: Some(PersonRef { uuid: None, display: name.to_owned() }),
    }
}

// =============================================================
// Session payload decoding
// =============================================================

#[test]
fn decodes_host_session_payload() {
    let raw = r#"{
        "sessionId": "ABC",
        "authenticated": true,
        "user": {
            "uuid": "45ce6c2e",
            "display": "admin",
            "username": "admin",
            "person": { "uuid": "24252571", "display": "Super User" },
            "privileges": []
        },
        "locale": "en_GB",
        "allowedLocales": ["en", "es", "fr"],
        "sessionLocation": { "uuid": "44c3efb0", "display": "Outpatient Clinic" }
    }"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert!(session.authenticated);
    assert_eq!(session.session_id.as_deref(), Some("ABC"));
    let user = session.user.as_ref().unwrap();
    assert_eq!(user.uuid, "45ce6c2e");
    assert_eq!(user.display_name(), "Super User");
    assert_eq!(
        session.allowed_locales,
        Some(vec!["en".to_owned(), "es".to_owned(), "fr".to_owned()])
    );
    assert_eq!(session.locale.as_deref(), Some("en_GB"));
    assert_eq!(
        session.session_location.map(|l| l.display),
        Some("Outpatient Clinic".to_owned())
    );
}

#[test]
fn decodes_anonymous_session() {
    let session: Session = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
    assert!(!session.authenticated);
    assert!(session.user.is_none());
    assert!(session.allowed_locales.is_none());
    assert!(session.session_location.is_none());
}

#[test]
fn display_name_falls_back_to_account_display() {
    let mut u = user("");
    assert_eq!(u.display_name(), "admin");
    u.person = None;
    assert_eq!(u.display_name(), "admin");
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_is_empty_and_not_loading() {
    let state = SessionState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
}

#[test]
fn loaded_clears_loading_flag() {
    let state = SessionState::loaded(Some(Session::default()));
    assert!(!state.loading);
    assert!(state.session.is_some());
}

// =============================================================
// UserDisplay
// =============================================================

#[test]
fn user_display_from_session_with_user() {
    let session = Session { user: Some(user("Jane")), ..Session::default() };
    let display = UserDisplay::from_session(Some(&session));
    assert_eq!(display.user().map(LoggedInUser::display_name), Some("Jane"));
}

#[test]
fn user_display_unknown_without_user() {
    assert_eq!(UserDisplay::from_session(None), UserDisplay::Unknown);
    assert_eq!(
        UserDisplay::from_session(Some(&Session::default())),
        UserDisplay::Unknown
    );
}

#[test]
fn logout_only_clears_local_display() {
    let session = Session { user: Some(user("Jane")), ..Session::default() };
    let mut display = UserDisplay::from_session(Some(&session));
    display.logout();
    assert_eq!(display, UserDisplay::LoggedOut);
    assert!(display.user().is_none());
    assert!(session.user.is_some());
}
