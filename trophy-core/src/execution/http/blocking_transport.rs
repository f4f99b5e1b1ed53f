//! Blocking backend on `reqwest::blocking::Client`.
//!
//! Behaves exactly like the async backend but returns on the calling thread.
//! Do not use it from inside an async runtime.

use super::interceptor::HttpRequestContext;
use super::transport::{Transport, after_response, before_send, check_status};
use crate::config::ClientConfig;
use crate::execution::request::{ApiCall, ResolvedRequest};
use crate::retry::RetryExecutor;
use std::sync::Arc;
use trophy_spec::TrophyError;

#[derive(Clone, Debug)]
pub struct BlockingTransport {
    config: Arc<ClientConfig>,
    http: reqwest::blocking::Client,
}

impl BlockingTransport {
    pub fn new(config: ClientConfig, http: reqwest::blocking::Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }

    pub fn http_client(&self) -> &reqwest::blocking::Client {
        &self.http
    }

    fn run<T>(&self, call: ApiCall<T>) -> Result<T, TrophyError> {
        let (request, decode) = call.into_parts();
        let resolved = request.resolve(&self.config)?;

        // Only idempotent methods are retried.
        let policy = self
            .config
            .retry_policy()
            .filter(|_| resolved.method.is_idempotent());
        let body = match policy {
            None => self.send_once(&resolved, 1)?,
            Some(policy) => {
                let mut attempt = 0;
                RetryExecutor::new(policy.clone()).execute_blocking_with_observer(
                    || {
                        attempt += 1;
                        self.send_once(&resolved, attempt)
                    },
                    |retry, delay, error| {
                        let ctx = HttpRequestContext::new(&resolved, retry);
                        self.config.notify_retry(&ctx, retry, delay, error);
                    },
                )?
            }
        };

        decode(&body)
    }

    fn send_once(&self, resolved: &ResolvedRequest, attempt: u32) -> Result<Vec<u8>, TrophyError> {
        let mut request = resolved.clone();
        let ctx = HttpRequestContext::new(&request, attempt);
        before_send(&self.config, &ctx, &mut request)?;

        let result = self.send(&ctx, &request);
        if let Err(error) = &result {
            self.config.notify_error(&ctx, error);
        }
        result
    }

    fn send(
        &self,
        ctx: &HttpRequestContext,
        request: &ResolvedRequest,
    ) -> Result<Vec<u8>, TrophyError> {
        let mut builder = self
            .http
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send()?;
        let status = response.status();
        after_response(&self.config, ctx, status, response.headers())?;
        let body = response.bytes()?;
        check_status(status, body.to_vec(), request)
    }
}

impl Transport for BlockingTransport {
    type Output<T: Send + 'static> = Result<T, TrophyError>;

    fn execute<T: Send + 'static>(&self, call: ApiCall<T>) -> Self::Output<T> {
        self.run(call)
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
