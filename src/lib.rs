//! Library exports.
//!
//! The domain types live in the extracted `oauth2-core` crate; configuration and
//! logging setup live in `oauth2-config` and `oauth2-observability`. This crate
//! re-exports them so applications and integration tests need a single
//! dependency, and holds the glue the binary runs.

use std::collections::HashMap;

pub use oauth2_config as config;
pub use oauth2_core::*;
pub use oauth2_observability as observability;

use config::{Config, ScopeConfig};

/// Factory applying the configured default and allowed scopes.
pub fn request_factory(scope: &ScopeConfig) -> AuthorizationRequestFactory {
    AuthorizationRequestFactory::new(
        scope.default_scopes.iter().collect(),
        scope.allowed_scopes.iter().collect(),
    )
}

/// Build an authorization request from a URL-encoded query string (a leading
/// `?` is ignored) and render it as pretty JSON.
pub fn run(query: &str, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    let parameters: HashMap<String, String> =
        serde_urlencoded::from_str(query.trim_start_matches('?'))?;

    let request = request_factory(&config.scope).create_authorization_request(parameters)?;
    tracing::info!(client_id = request.client_id(), "Authorization request parsed");

    Ok(serde_json::to_string_pretty(&request)?)
}
