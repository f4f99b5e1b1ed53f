//! Per-call request options.

use secrecy::SecretString;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;

/// Overrides applied to a single API call.
///
/// Nothing is validated here; conflicts are settled when the request is
/// resolved. A header set to `None` removes that header from the final
/// request, and a `null` query or body parameter is dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    additional_headers: HashMap<String, Option<String>>,
    additional_query_parameters: Map<String, Value>,
    additional_body_parameters: Map<String, Value>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send this call to `base_url` regardless of the client's environment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Authenticate this call with `api_key` instead of the client's key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers
            .insert(name.into(), Some(value.into()));
        self
    }

    /// Drop `name` from the request even if the client would send it.
    pub fn without_header(mut self, name: impl Into<String>) -> Self {
        self.additional_headers.insert(name.into(), None);
        self
    }

    pub fn with_query_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_query_parameters
            .insert(name.into(), value.into());
        self
    }

    pub fn with_body_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_body_parameters
            .insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    pub fn additional_headers(&self) -> &HashMap<String, Option<String>> {
        &self.additional_headers
    }

    pub fn additional_query_parameters(&self) -> &Map<String, Value> {
        &self.additional_query_parameters
    }

    pub fn additional_body_parameters(&self) -> &Map<String, Value> {
        &self.additional_body_parameters
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
