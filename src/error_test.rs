use super::*;

#[test]
fn missing_element_names_the_id() {
    let err = PageError::MissingElement("contact".to_owned());
    assert_eq!(err.to_string(), "element not found: #contact");
}

#[test]
fn config_parse_wraps_serde_error() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = PageError::from(source);
    assert!(matches!(err, PageError::ConfigParse(_)));
    assert!(err.to_string().starts_with("config parse failed: "));
}

#[test]
fn unit_variants_have_stable_messages() {
    assert_eq!(PageError::NoWindow.to_string(), "browser window unavailable");
    assert_eq!(PageError::NoDocument.to_string(), "document unavailable");
    assert_eq!(PageError::NoStorage.to_string(), "localStorage unavailable");
}
