use super::*;

#[test]
fn default_layout_is_large_desktop() {
    assert_eq!(LayoutType::default(), LayoutType::LargeDesktop);
}

#[test]
fn desktop_classes() {
    assert!(LayoutType::SmallDesktop.is_desktop());
    assert!(LayoutType::LargeDesktop.is_desktop());
    assert!(!LayoutType::Tablet.is_desktop());
    assert!(!LayoutType::Phone.is_desktop());
}

#[test]
fn parses_host_labels() {
    for layout in [
        LayoutType::Phone,
        LayoutType::Tablet,
        LayoutType::SmallDesktop,
        LayoutType::LargeDesktop,
    ] {
        assert_eq!(layout.as_str().parse::<LayoutType>().ok(), Some(layout));
    }
    assert_eq!(" tablet ".parse::<LayoutType>().ok(), Some(LayoutType::Tablet));
}

#[test]
fn rejects_unknown_label() {
    let err = "watch".parse::<LayoutType>().unwrap_err();
    assert!(matches!(err, ShellError::UnknownLayout(ref s) if s == "watch"));
}

#[test]
fn serde_uses_kebab_case() {
    let json = serde_json::to_string(&LayoutType::SmallDesktop).unwrap();
    assert_eq!(json, "\"small-desktop\"");
    let parsed: LayoutType = serde_json::from_str("\"phone\"").unwrap();
    assert_eq!(parsed, LayoutType::Phone);
}
