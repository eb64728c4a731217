use oauth2_request::config::{Config, ScopeConfig};
use oauth2_request::request_factory;
use std::collections::HashMap;

fn query(q: &str) -> HashMap<String, String> {
    serde_urlencoded::from_str(q).unwrap()
}

#[test]
fn builds_request_from_query_string() {
    let factory = request_factory(&ScopeConfig::default());
    let request = factory
        .create_authorization_request(query(
            "client_id=app&scope=read%20write&response_type=code&state=xyz&redirect_uri=https%3A%2F%2Fapp.example%2Fcb",
        ))
        .unwrap();

    assert_eq!(request.client_id(), "app");
    assert_eq!(request.scope().to_string(), "[read, write]");
    assert_eq!(request.redirect_uri(), Some("https://app.example/cb"));
    assert_eq!(request.request_parameters()["scope"], "read write");

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["client_id"], "app");
    assert_eq!(json["scope"], serde_json::json!(["read", "write"]));
    assert_eq!(json["approved"], false);
}

#[test]
fn default_config_accepts_any_scope() {
    let config = Config::default();
    let factory = request_factory(&config.scope);

    let request = factory
        .create_authorization_request(query("client_id=app&scope=anything"))
        .unwrap();
    assert!(request.scope().contains("anything"));
}

#[test]
fn errors_serialize_as_oauth2_error_response() {
    let factory = request_factory(&ScopeConfig {
        default_scopes: vec![],
        allowed_scopes: vec!["read".to_string()],
    });

    let err = factory
        .create_authorization_request(query("client_id=app&scope=write"))
        .unwrap_err();

    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["error"], "invalid_scope");
    assert_eq!(json["error_description"], "Invalid scope: write");
}

#[test]
fn configured_defaults_fill_empty_scope() {
    let factory = request_factory(&ScopeConfig {
        default_scopes: vec!["read".to_string(), "profile".to_string()],
        allowed_scopes: vec![],
    });

    let request = factory
        .create_authorization_request(query("client_id=app"))
        .unwrap();
    assert_eq!(request.scope().to_string(), "[profile, read]");
}
