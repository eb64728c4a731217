use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::params::{
    parse_parameter_list, CLIENT_ID, GRANT_TYPE, REDIRECT_URI, RESPONSE_TYPE, SCOPE, STATE,
};
use crate::{OAuth2Error, ScopeSet};

/// The parameters of an OAuth2 authorization request.
///
/// `request_parameters` is a snapshot of the inbound parameters taken at
/// construction. The typed fields (`client_id`, `scope`, ...) are derived from
/// it once and then owned separately: `set_scope` never writes into the
/// parameter map, and `set_request_parameters` never re-derives the client id
/// or scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuth2Request {
    request_parameters: HashMap<String, String>,
    #[serde(default)]
    approval_parameters: HashMap<String, String>,
    client_id: String,
    #[serde(default)]
    scope: ScopeSet,
    #[serde(default)]
    resource_ids: ScopeSet,
    #[serde(default)]
    authorities: ScopeSet,
    #[serde(default)]
    approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<String>,
    #[serde(default)]
    response_types: ScopeSet,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    extensions: HashMap<String, serde_json::Value>,
}

impl OAuth2Request {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        request_parameters: HashMap<String, String>,
        approval_parameters: HashMap<String, String>,
        client_id: impl Into<String>,
        scope: ScopeSet,
        resource_ids: Option<ScopeSet>,
        authorities: Option<ScopeSet>,
        approved: bool,
        state: Option<String>,
        redirect_uri: Option<String>,
        response_types: ScopeSet,
    ) -> Self {
        Self {
            request_parameters,
            approval_parameters,
            client_id: client_id.into(),
            scope,
            resource_ids: resource_ids.unwrap_or_default(),
            authorities: authorities.unwrap_or_default(),
            approved,
            state,
            redirect_uri,
            response_types,
            extensions: HashMap::new(),
        }
    }

    /// Build a request from raw inbound parameters.
    ///
    /// Recognized keys are copied into the typed fields; every key, recognized
    /// or not, is kept in the parameter snapshot. The request starts
    /// unapproved whatever the parameters say.
    pub fn from_parameters(request_parameters: HashMap<String, String>) -> Self {
        let client_id = request_parameters
            .get(CLIENT_ID)
            .cloned()
            .unwrap_or_default();
        let scope = parse_parameter_list(request_parameters.get(SCOPE).map(String::as_str));
        let response_types =
            parse_parameter_list(request_parameters.get(RESPONSE_TYPE).map(String::as_str));
        let state = request_parameters.get(STATE).cloned();
        let redirect_uri = request_parameters.get(REDIRECT_URI).cloned();

        Self::new(
            request_parameters,
            HashMap::new(),
            client_id,
            scope,
            None,
            None,
            false,
            state,
            redirect_uri,
            response_types,
        )
    }

    /// A request carrying only a client id and scope; the parameter snapshot
    /// is empty.
    pub fn with_scope<I, S>(client_id: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client_id: client_id.into(),
            scope: scopes.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn request_parameters(&self) -> &HashMap<String, String> {
        &self.request_parameters
    }

    /// Replace the parameter snapshot. Derived fields are left as they are.
    pub fn set_request_parameters(&mut self, request_parameters: HashMap<String, String>) {
        self.request_parameters = request_parameters;
    }

    pub fn approval_parameters(&self) -> &HashMap<String, String> {
        &self.approval_parameters
    }

    pub fn set_approval_parameters(&mut self, approval_parameters: HashMap<String, String>) {
        self.approval_parameters = approval_parameters;
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn scope(&self) -> &ScopeSet {
        &self.scope
    }

    pub fn set_scope(&mut self, scope: ScopeSet) {
        self.scope = scope;
    }

    pub fn resource_ids(&self) -> &ScopeSet {
        &self.resource_ids
    }

    pub fn authorities(&self) -> &ScopeSet {
        &self.authorities
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    pub fn set_approved(&mut self, approved: bool) {
        self.approved = approved;
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    pub fn response_types(&self) -> &ScopeSet {
        &self.response_types
    }

    pub fn grant_type(&self) -> Option<&str> {
        self.request_parameters.get(GRANT_TYPE).map(String::as_str)
    }

    pub fn extensions(&self) -> &HashMap<String, serde_json::Value> {
        &self.extensions
    }

    pub fn set_extension(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.extensions.insert(key.into(), value);
    }

    /// Copy of this request with a different scope.
    pub fn narrow_scope(&self, scope: ScopeSet) -> Self {
        Self {
            scope,
            ..self.clone()
        }
    }

    /// Copy of this request with a different parameter snapshot.
    pub fn with_request_parameters(&self, request_parameters: HashMap<String, String>) -> Self {
        Self {
            request_parameters,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), OAuth2Error> {
        if self.client_id.trim().is_empty() {
            return Err(OAuth2Error::invalid_request("A client id must be provided"));
        }
        Ok(())
    }
}
