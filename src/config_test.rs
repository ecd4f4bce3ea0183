use super::*;

#[test]
fn defaults_point_at_host_endpoints() {
    let config = ShellConfig::default();
    assert_eq!(config.spa_base, "/openmrs/spa/");
    assert_eq!(config.session_endpoint, "/openmrs/ws/rest/v1/session");
    assert_eq!(config.logo.link, "${openmrsSpaBase}home");
    assert!(config.logo.src.is_none());
}

#[test]
fn partial_document_keeps_defaults() {
    let config = ShellConfig::from_json(r#"{ "logo": { "link": "/home" } }"#).unwrap();
    assert_eq!(config.logo.link, "/home");
    assert_eq!(config.logo.alt, "Logo");
    assert_eq!(config.spa_base, "/openmrs/spa/");
}

#[test]
fn full_document_uses_camel_case_keys() {
    let raw = r#"{
        "logo": { "link": "/", "src": "/logo.svg", "alt": "Clinic", "name": "Clinic" },
        "spaBase": "/app",
        "sessionEndpoint": "/api/session"
    }"#;
    let config = ShellConfig::from_json(raw).unwrap();
    assert_eq!(config.logo.src.as_deref(), Some("/logo.svg"));
    assert_eq!(config.logo.name.as_deref(), Some("Clinic"));
    assert_eq!(config.session_endpoint, "/api/session");
    assert_eq!(config.base_path().unwrap().as_str(), "/app/");
}

#[test]
fn malformed_json_is_config_error() {
    let err = ShellConfig::from_json("{ logo: ").unwrap_err();
    assert!(matches!(err, ShellError::Config(_)));
}

#[test]
fn relative_base_is_rejected() {
    let err = ShellConfig::from_json(r#"{ "spaBase": "spa/" }"#).unwrap_err();
    assert!(matches!(err, ShellError::InvalidBasePath(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_falls_back_to_defaults_outside_browser() {
    assert_eq!(ShellConfig::load(), ShellConfig::default());
}
