//! Async backend on `reqwest::Client`.

use super::interceptor::HttpRequestContext;
use super::transport::{Transport, after_response, before_send, check_status};
use crate::config::ClientConfig;
use crate::execution::request::{ApiCall, ResolvedRequest};
use crate::retry::RetryExecutor;
use futures::future::BoxFuture;
use std::sync::Arc;
use trophy_spec::TrophyError;

#[derive(Clone, Debug)]
pub struct AsyncTransport {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
}

impl AsyncTransport {
    pub fn new(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    async fn run<T>(&self, call: ApiCall<T>) -> Result<T, TrophyError> {
        let (request, decode) = call.into_parts();
        let resolved = request.resolve(&self.config)?;

        // Only idempotent methods are retried.
        let policy = self
            .config
            .retry_policy()
            .filter(|_| resolved.method.is_idempotent());
        let body = match policy {
            None => self.send_once(&resolved, 1).await?,
            Some(policy) => {
                let mut attempt = 0;
                RetryExecutor::new(policy.clone())
                    .execute_with_observer(
                        || {
                            attempt += 1;
                            self.send_once(&resolved, attempt)
                        },
                        |retry, delay, error| {
                            let ctx = HttpRequestContext::new(&resolved, retry);
                            self.config.notify_retry(&ctx, retry, delay, error);
                        },
                    )
                    .await?
            }
        };

        decode(&body)
    }

    async fn send_once(
        &self,
        resolved: &ResolvedRequest,
        attempt: u32,
    ) -> Result<Vec<u8>, TrophyError> {
        let mut request = resolved.clone();
        let ctx = HttpRequestContext::new(&request, attempt);
        before_send(&self.config, &ctx, &mut request)?;

        let result = self.send(&ctx, &request).await;
        if let Err(error) = &result {
            self.config.notify_error(&ctx, error);
        }
        result
    }

    async fn send(
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

        let response = builder.send().await?;
        let status = response.status();
        after_response(&self.config, ctx, status, response.headers())?;
        let body = response.bytes().await?;
        check_status(status, body.to_vec(), request)
    }
}

impl Transport for AsyncTransport {
    type Output<T: Send + 'static> = BoxFuture<'static, Result<T, TrophyError>>;

    fn execute<T: Send + 'static>(&self, call: ApiCall<T>) -> Self::Output<T> {
        let this = self.clone();
        Box::pin(async move { this.run(call).await })
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
