//! Request preparation and resolution.
//!
//! Endpoint methods describe a call as a [`PreparedRequest`]: method,
//! logical API, path, the declared query and body, and the caller's
//! [`RequestOptions`]. Resolving it against a [`ClientConfig`] yields the
//! concrete [`ResolvedRequest`] both transports send. Resolution is pure, so
//! the merge rules are tested without a server.

use super::http::headers::{HttpHeaderBuilder, masked_headers};
use crate::config::ClientConfig;
use crate::environment::ApiScope;
use crate::options::RequestOptions;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use trophy_spec::{RequestInfo, TrophyError};

/// Percent-encode one path segment.
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[derive(Debug, Clone, Default)]
enum RequestBody {
    #[default]
    Empty,
    /// Named fields declared by the endpoint; they win over call-level
    /// body parameters.
    Fields(Map<String, Value>),
    /// A caller-supplied request record; call-level body parameters are
    /// layered on top of it.
    Payload(Value),
}

/// An API call described by an endpoint method, not yet bound to a client.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    method: Method,
    scope: ApiScope,
    path: String,
    query: Vec<(String, Value)>,
    body: RequestBody,
    options: RequestOptions,
    /// Encoding failure captured while building; reported on resolve.
    error: Option<TrophyError>,
}

impl PreparedRequest {
    pub fn new(method: Method, scope: ApiScope, path: impl Into<String>) -> Self {
        Self {
            method,
            scope,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            options: RequestOptions::default(),
            error: None,
        }
    }

    pub fn get(scope: ApiScope, path: impl Into<String>) -> Self {
        Self::new(Method::GET, scope, path)
    }

    pub fn post(scope: ApiScope, path: impl Into<String>) -> Self {
        Self::new(Method::POST, scope, path)
    }

    pub fn put(scope: ApiScope, path: impl Into<String>) -> Self {
        Self::new(Method::PUT, scope, path)
    }

    pub fn patch(scope: ApiScope, path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, scope, path)
    }

    pub fn delete(scope: ApiScope, path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, scope, path)
    }

    /// Declare a query parameter; `None` leaves it out.
    pub fn query<V: Into<Value>>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_string(), value.into()));
        }
        self
    }

    /// Declare a body field.
    pub fn body_field<V: Serialize + ?Sized>(mut self, name: &str, value: &V) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                let mut fields = match std::mem::take(&mut self.body) {
                    RequestBody::Fields(fields) => fields,
                    _ => Map::new(),
                };
                fields.insert(name.to_string(), value);
                self.body = RequestBody::Fields(fields);
            }
            Err(e) => self.fail(e),
        }
        self
    }

    /// Use `payload` as the whole request body.
    pub fn body<V: Serialize + ?Sized>(mut self, payload: &V) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => self.body = RequestBody::Payload(value),
            Err(e) => self.fail(e),
        }
        self
    }

    pub fn with_options(mut self, options: Option<RequestOptions>) -> Self {
        if let Some(options) = options {
            self.options = options;
        }
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn scope(&self) -> ApiScope {
        self.scope
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    fn fail(&mut self, error: serde_json::Error) {
        self.error
            .get_or_insert(TrophyError::JsonError(format!(
                "failed to encode request: {error}"
            )));
    }

    /// Bind the call to a client configuration.
    pub fn resolve(&self, config: &ClientConfig) -> Result<ResolvedRequest, TrophyError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let base_url = config
            .resolve_base_url(self.scope, &self.options)
            .ok_or_else(|| {
                TrophyError::ConfigurationError(format!(
                    "no base URL configured for the {} API",
                    self.scope
                ))
            })?;

        let api_key = match self.options.api_key() {
            Some(key) => Some(key.clone()),
            None => match config.api_key() {
                Some(key) => key.resolve()?,
                None => None,
            },
        };

        let headers = HttpHeaderBuilder::new()
            .with_sdk_headers()
            .with_api_key(api_key.as_ref())?
            .with_headers(config.headers())
            .with_overrides(self.options.additional_headers())?
            .build();

        Ok(ResolvedRequest {
            method: self.method.clone(),
            scope: self.scope,
            url: join_url(&base_url, &self.path),
            headers,
            query: self.merged_query(),
            body: self.merged_body(),
            timeout: self.options.timeout().or(config.timeout()),
        })
    }

    /// Declared parameters in declaration order, then call-level extras
    /// whose names are not declared.
    fn merged_query(&self) -> Vec<(String, String)> {
        let extra = self
            .options
            .additional_query_parameters()
            .iter()
            .filter(|(name, _)| !self.query.iter().any(|(declared, _)| declared == *name));

        let mut pairs = Vec::new();
        for (name, value) in self
            .query
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .chain(extra.map(|(name, value)| (name.as_str(), value)))
        {
            push_query_value(&mut pairs, name, value);
        }
        pairs
    }

    fn merged_body(&self) -> Option<Value> {
        let extra = self.options.additional_body_parameters();
        let merged = match &self.body {
            RequestBody::Empty if extra.is_empty() => return None,
            RequestBody::Empty => extra.clone(),
            RequestBody::Fields(fields) => {
                let mut merged = extra.clone();
                merged.extend(fields.clone());
                merged
            }
            RequestBody::Payload(Value::Object(payload)) => {
                let mut merged = payload.clone();
                merged.extend(extra.clone());
                merged
            }
            RequestBody::Payload(other) => return Some(other.clone()),
        };
        Some(Value::Object(
            merged.into_iter().filter(|(_, v)| !v.is_null()).collect(),
        ))
    }
}

fn push_query_value(pairs: &mut Vec<(String, String)>, name: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((name.to_string(), s.clone())),
        Value::Array(items) => {
            for item in items {
                push_query_value(pairs, name, item);
            }
        }
        other => pairs.push((name.to_string(), other.to_string())),
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// A fully resolved request, ready to send.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub method: Method,
    pub scope: ApiScope,
    /// Base URL joined with the path, without the query string.
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub timeout: Option<Duration>,
}

impl ResolvedRequest {
    /// URL with the encoded query string appended.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, query)
    }

    /// Summary attached to API errors, API key masked.
    pub fn info(&self) -> RequestInfo {
        RequestInfo {
            method: self.method.to_string(),
            url: self.full_url(),
            headers: masked_headers(&self.headers),
        }
    }
}

/// A prepared request paired with the decoder for its response body.
pub struct ApiCall<T> {
    request: PreparedRequest,
    decode: fn(&[u8]) -> Result<T, TrophyError>,
}

impl<T: DeserializeOwned> ApiCall<T> {
    /// Decode the response body as JSON.
    pub fn json(request: PreparedRequest) -> Self {
        Self {
            request,
            decode: decode_json::<T>,
        }
    }
}

impl ApiCall<()> {
    /// Ignore the response body.
    pub fn no_content(request: PreparedRequest) -> Self {
        Self {
            request,
            decode: |_| Ok(()),
        }
    }
}

impl<T> ApiCall<T> {
    pub fn request(&self) -> &PreparedRequest {
        &self.request
    }

    pub fn into_parts(self) -> (PreparedRequest, fn(&[u8]) -> Result<T, TrophyError>) {
        (self.request, self.decode)
    }
}

fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, TrophyError> {
    Ok(serde_json::from_slice(bytes)?)
}
