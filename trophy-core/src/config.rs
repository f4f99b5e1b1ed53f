//! Client configuration shared by both transports.

use crate::auth::ApiKey;
use crate::environment::{ApiScope, Environment};
use crate::execution::http::headers::parse_headers;
use crate::execution::http::interceptor::{HttpInterceptor, HttpRequestContext};
use crate::options::RequestOptions;
use crate::retry::RetryPolicy;
use reqwest::header::HeaderMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use trophy_spec::TrophyError;

/// Immutable settings of a built client.
#[derive(Clone)]
pub struct ClientConfig {
    environment: Option<Environment>,
    base_url: Option<String>,
    api_key: Option<ApiKey>,
    headers: HeaderMap,
    timeout: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Some(Environment::production()),
            base_url: None,
            api_key: None,
            headers: HeaderMap::new(),
            timeout: None,
            retry_policy: None,
            interceptors: Vec::new(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .field("retry_policy", &self.retry_policy)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl ClientConfig {
    /// Production environment, no key, no retries, no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Resolve URLs from the fallback base URL only.
    pub fn without_environment(mut self) -> Self {
        self.environment = None;
        self
    }

    /// Fallback base URL, used when no environment is set.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Default headers sent on every call.
    pub fn with_headers(mut self, headers: &HashMap<String, String>) -> Result<Self, TrophyError> {
        self.headers.extend(parse_headers(headers)?);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry_policy.as_ref()
    }

    pub fn interceptors(&self) -> &[Arc<dyn HttpInterceptor>] {
        &self.interceptors
    }

    /// Base URL for an endpoint of `scope`: the call-level base URL, then
    /// the environment's URL for the scope, then the fallback base URL.
    pub fn resolve_base_url(&self, scope: ApiScope, options: &RequestOptions) -> Option<String> {
        options
            .base_url()
            .or_else(|| self.environment.as_ref().map(|env| env.url(scope)))
            .or(self.base_url.as_deref())
            .map(str::to_string)
    }

    pub(crate) fn notify_error(&self, ctx: &HttpRequestContext, error: &TrophyError) {
        for interceptor in &self.interceptors {
            interceptor.on_error(ctx, error);
        }
    }

    pub(crate) fn notify_retry(
        &self,
        ctx: &HttpRequestContext,
        retry: u32,
        delay: Duration,
        error: &TrophyError,
    ) {
        tracing::warn!(
            target: crate::defaults::HTTP_LOG_TARGET,
            method = %ctx.method,
            url = %ctx.url,
            retry,
            delay_ms = delay.as_millis() as u64,
            err = %error,
            "retrying request"
        );
        for interceptor in &self.interceptors {
            interceptor.on_retry(ctx, retry, delay, error);
        }
    }
}
