// Integration tests for the query-string-to-JSON entry point used by the binary

use oauth2_request::config::{Config, ScopeConfig};
use oauth2_request::{run, OAuth2Error};

#[test]
fn renders_request_as_json() {
    let output = run(
        "client_id=app&scope=write%20read&state=xyz&response_type=code&redirect_uri=https%3A%2F%2Fapp.example%2Fcb",
        &Config::default(),
    )
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["client_id"], "app");
    assert_eq!(json["scope"], serde_json::json!(["read", "write"]));
    assert_eq!(json["response_types"], serde_json::json!(["code"]));
    assert_eq!(json["state"], "xyz");
    assert_eq!(json["redirect_uri"], "https://app.example/cb");
    assert_eq!(json["approved"], false);
    assert_eq!(json["request_parameters"]["scope"], "write read");
    assert!(output.contains('\n'));
}

#[test]
fn leading_question_mark_is_ignored() {
    let output = run("?client_id=app&state=s1", &Config::default()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["client_id"], "app");
    assert_eq!(json["state"], "s1");
    assert!(json["request_parameters"].get("?client_id").is_none());
}

#[test]
fn missing_client_id_is_invalid_request() {
    let err = run("scope=read", &Config::default()).unwrap_err();

    let oauth_err = err
        .downcast_ref::<OAuth2Error>()
        .expect("factory error should surface unchanged");
    assert_eq!(oauth_err.error, "invalid_request");
}

#[test]
fn empty_query_is_invalid_request() {
    let err = run("", &Config::default()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<OAuth2Error>().map(|e| e.error.as_str()),
        Some("invalid_request")
    );
}

#[test]
fn configured_scope_rules_apply() {
    let config = Config {
        scope: ScopeConfig {
            default_scopes: vec![],
            allowed_scopes: vec!["read".to_string()],
        },
        ..Config::default()
    };

    let err = run("client_id=app&scope=admin", &config).unwrap_err();
    assert_eq!(err.to_string(), "invalid_scope: Invalid scope: admin");
}
