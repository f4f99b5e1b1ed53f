//! HTTP Interceptor interfaces
//!
//! Interceptors observe every request the transport sends. They can adjust
//! the resolved request before it goes out, see response statuses, and are
//! told about errors and retries. Hooks run on the calling task or thread
//! and should stay cheap.

use crate::defaults::HTTP_LOG_TARGET;
use crate::environment::ApiScope;
use crate::execution::request::ResolvedRequest;
use reqwest::header::HeaderMap;
use std::time::Duration;
use trophy_spec::TrophyError;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub method: String,
    /// Full URL, query string included.
    pub url: String,
    pub scope: ApiScope,
    /// 1 for the first attempt, incremented on each retry.
    pub attempt: u32,
}

impl HttpRequestContext {
    pub fn new(request: &ResolvedRequest, attempt: u32) -> Self {
        Self {
            method: request.method.to_string(),
            url: request.full_url(),
            scope: request.scope,
            attempt,
        }
    }
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before each attempt is sent. Changes to `request` apply to
    /// this attempt only; an error aborts the call without sending.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        _request: &mut ResolvedRequest,
    ) -> Result<(), TrophyError> {
        Ok(())
    }

    /// Called when a response arrives, whatever its status.
    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _status: u16,
        _headers: &HeaderMap,
    ) -> Result<(), TrophyError> {
        Ok(())
    }

    /// Called when an attempt fails.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &TrophyError) {}

    /// Called before sleeping ahead of retry number `retry`.
    fn on_retry(
        &self,
        _ctx: &HttpRequestContext,
        _retry: u32,
        _delay: Duration,
        _error: &TrophyError,
    ) {
    }
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Debug, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        _request: &mut ResolvedRequest,
    ) -> Result<(), TrophyError> {
        tracing::debug!(target: HTTP_LOG_TARGET, method=%ctx.method, url=%ctx.url, scope=%ctx.scope, attempt=ctx.attempt, "sending request");
        Ok(())
    }

    fn on_response(
        &self,
        ctx: &HttpRequestContext,
        status: u16,
        _headers: &HeaderMap,
    ) -> Result<(), TrophyError> {
        tracing::debug!(target: HTTP_LOG_TARGET, method=%ctx.method, url=%ctx.url, status=status, "response received");
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &TrophyError) {
        tracing::debug!(target: HTTP_LOG_TARGET, method=%ctx.method, url=%ctx.url, err=%error, "request error");
    }
}
