use super::*;

#[test]
fn session_url_appends_representation() {
    assert_eq!(
        session_url("/openmrs/ws/rest/v1/session"),
        format!("/openmrs/ws/rest/v1/session?v={SESSION_REPRESENTATION}")
    );
}

#[test]
fn session_url_extends_existing_query() {
    assert!(session_url("/session?lang=en").starts_with("/session?lang=en&v=custom:("));
}

#[test]
fn session_failed_message_includes_status() {
    assert_eq!(session_failed_message(401), "session request failed: 401");
}
