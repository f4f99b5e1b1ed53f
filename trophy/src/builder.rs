//! Client builder.
//!
//! ```rust,ignore
//! let client = TrophyClient::builder()
//!     .api_key("your-api-key")
//!     .timeout(Duration::from_secs(10))
//!     .max_retries(2)
//!     .build()?;
//! ```

use crate::client::{BlockingTrophyClient, Client, TrophyClient};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use trophy_core::defaults;
use trophy_core::{
    ApiKey, AsyncTransport, BlockingTransport, ClientConfig, CredentialProvider, Environment,
    HttpInterceptor, LoggingInterceptor, RetryPolicy, TrophyError,
};

/// Configures and builds [`TrophyClient`] and [`BlockingTrophyClient`].
#[derive(Clone, Default)]
pub struct ClientBuilder {
    api_key: Option<ApiKey>,
    environment: Option<Environment>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
    headers: HashMap<String, String>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
    http_debug: bool,
    http_client: Option<reqwest::Client>,
    blocking_http_client: Option<reqwest::blocking::Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key. Without one, `TROPHY_API_KEY` is read at build time.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::from(api_key.into()));
        self
    }

    /// Ask `provider` for the API key on every call.
    pub fn api_key_provider(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.api_key = Some(ApiKey::provider(provider));
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Send every request to `base_url`, for both the api and admin areas,
    /// unless an environment is also set.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retry failed requests up to `retries` times with exponential backoff.
    /// POST and PATCH calls are never retried.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.retry_policy = Some(RetryPolicy::with_retries(retries));
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Add a header sent on every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Add a custom HTTP interceptor. Interceptors run in insertion order.
    pub fn with_http_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Log every request and response through `tracing` (target `trophy::http`).
    pub fn http_debug(mut self, enabled: bool) -> Self {
        self.http_debug = enabled;
        self
    }

    /// Set custom HTTP client for [`build`](Self::build).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set custom HTTP client for [`build_blocking`](Self::build_blocking).
    pub fn with_blocking_http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.blocking_http_client = Some(client);
        self
    }

    /// Build the async client.
    pub fn build(self) -> Result<TrophyClient, TrophyError> {
        let http = match self.http_client.clone() {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(user_agent())
                .build()
                .map_err(|e| {
                    TrophyError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?,
        };
        let config = self.into_config()?;
        Ok(Client::from_transport(AsyncTransport::new(config, http)))
    }

    /// Build the blocking client. Must not be called from async code.
    pub fn build_blocking(self) -> Result<BlockingTrophyClient, TrophyError> {
        let http = match self.blocking_http_client.clone() {
            Some(client) => client,
            None => reqwest::blocking::Client::builder()
                .user_agent(user_agent())
                .build()
                .map_err(|e| {
                    TrophyError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?,
        };
        let config = self.into_config()?;
        Ok(Client::from_transport(BlockingTransport::new(config, http)))
    }

    fn into_config(self) -> Result<ClientConfig, TrophyError> {
        let mut config = ClientConfig::new().with_headers(&self.headers)?;

        config = match (self.environment, self.base_url) {
            (Some(environment), base_url) => {
                let config = config.with_environment(environment);
                match base_url {
                    Some(url) => config.with_base_url(url),
                    None => config,
                }
            }
            (None, Some(base_url)) => config.without_environment().with_base_url(base_url),
            (None, None) => config.with_environment(Environment::production()),
        };

        // Priority: builder > environment variable
        let api_key = self.api_key.or_else(|| {
            std::env::var(defaults::API_KEY_ENV_VAR)
                .ok()
                .filter(|k| !k.is_empty())
                .map(ApiKey::from)
        });
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }

        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(policy) = self.retry_policy {
            config = config.with_retry_policy(policy);
        }
        if self.http_debug {
            config = config.with_interceptor(Arc::new(LoggingInterceptor));
        }
        for interceptor in self.interceptors {
            config = config.with_interceptor(interceptor);
        }

        tracing::debug!(
            target: defaults::HTTP_LOG_TARGET,
            environment = ?config.environment(),
            base_url = ?config.base_url(),
            retries = ?config.retry_policy().map(|p| p.max_attempts.saturating_sub(1)),
            "trophy client configured"
        );
        Ok(config)
    }
}

fn user_agent() -> String {
    format!("{}-rust/{}", defaults::sdk::NAME, defaults::sdk::VERSION)
}
