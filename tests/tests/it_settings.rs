//! Integration tests for loading settings and parameter declarations from configuration.

use paramguard::{Arity, Parameter, ParameterKind, Settings};

#[derive(Debug, serde::Deserialize)]
struct Config {
    #[serde(default)]
    constraints: Settings,
}

#[test]
fn settings_deserialize_from_config() {
    //* Given
    let json = r#"{ "constraints": { "show_constraints": true } }"#;

    //* When
    let config = serde_json::from_str::<Config>(json).expect("config should be valid");

    //* Then
    assert!(config.constraints.must_show_constraints());
    assert_eq!(config.constraints.check_consistency, None);
}

#[test]
fn missing_settings_use_defaults() {
    //* When
    let config = serde_json::from_str::<Config>("{}").expect("config should be valid");

    //* Then
    assert_eq!(config.constraints, Settings::default());
    assert!(!config.constraints.must_show_constraints());
}

#[test]
fn parameter_declaration_deserializes_with_defaults() {
    //* Given
    let json = r#"{
        "name": "files",
        "kind": "option",
        "arity": "multiple",
        "opts": ["-f", "--files"]
    }"#;

    //* When
    let param = serde_json::from_str::<Parameter>(json).expect("declaration should be valid");

    //* Then
    assert_eq!(param.kind, ParameterKind::Option);
    assert_eq!(param.arity, Arity::Multiple);
    assert!(!param.required);
    assert_eq!(param.label(), "--files");
}
