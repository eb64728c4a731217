use std::collections::HashMap;

use crate::params::CLIENT_ID;
use crate::{OAuth2Error, OAuth2Request, ScopeSet};

/// Builds authorization requests from inbound parameters, applying default
/// and allowed scopes.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationRequestFactory {
    default_scopes: ScopeSet,
    allowed_scopes: ScopeSet,
}

impl AuthorizationRequestFactory {
    /// `default_scopes` fill in for a request without scope; a non-empty
    /// `allowed_scopes` rejects anything outside it.
    pub fn new(default_scopes: ScopeSet, allowed_scopes: ScopeSet) -> Self {
        Self {
            default_scopes,
            allowed_scopes,
        }
    }

    pub fn create_authorization_request(
        &self,
        parameters: HashMap<String, String>,
    ) -> Result<OAuth2Request, OAuth2Error> {
        let has_client_id = parameters
            .get(CLIENT_ID)
            .is_some_and(|id| !id.trim().is_empty());
        if !has_client_id {
            tracing::debug!("Rejecting authorization request without client_id");
            return Err(OAuth2Error::invalid_request("A client id must be provided"));
        }

        let mut request = OAuth2Request::from_parameters(parameters);

        // An empty request scope falls back to the defaults; the parameter
        // snapshot still shows what the client actually sent.
        if request.scope().is_empty() && !self.default_scopes.is_empty() {
            request.set_scope(self.default_scopes.clone());
        }

        if !self.allowed_scopes.is_empty() && !request.scope().is_subset(&self.allowed_scopes) {
            let rejected = request.scope().difference(&self.allowed_scopes).format();
            tracing::warn!(
                client_id = request.client_id(),
                rejected = %rejected,
                "Requested scope is not allowed"
            );
            return Err(OAuth2Error::invalid_scope(&format!(
                "Invalid scope: {}",
                rejected
            )));
        }

        tracing::debug!(
            client_id = request.client_id(),
            scope = %request.scope().format(),
            "Created authorization request"
        );

        Ok(request)
    }
}
