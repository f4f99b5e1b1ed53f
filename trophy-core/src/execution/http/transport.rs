//! Transport abstraction.
//!
//! Endpoint methods are written once against [`Transport`]. The associated
//! `Output` type decides how results are delivered: a boxed future for the
//! async backend, the result itself for the blocking backend.

use super::interceptor::HttpRequestContext;
use crate::config::ClientConfig;
use crate::execution::request::{ApiCall, ResolvedRequest};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use trophy_spec::TrophyError;

pub trait Transport: Clone + Send + Sync + 'static {
    /// What an endpoint method returns for a call producing `T`.
    type Output<T: Send + 'static>;

    fn execute<T: Send + 'static>(&self, call: ApiCall<T>) -> Self::Output<T>;

    fn config(&self) -> &ClientConfig;
}

/// Run the `on_before_send` hooks for one attempt.
pub(crate) fn before_send(
    config: &ClientConfig,
    ctx: &HttpRequestContext,
    request: &mut ResolvedRequest,
) -> Result<(), TrophyError> {
    for interceptor in config.interceptors() {
        interceptor.on_before_send(ctx, request)?;
    }
    Ok(())
}

/// Run the `on_response` hooks.
pub(crate) fn after_response(
    config: &ClientConfig,
    ctx: &HttpRequestContext,
    status: StatusCode,
    headers: &HeaderMap,
) -> Result<(), TrophyError> {
    for interceptor in config.interceptors() {
        interceptor.on_response(ctx, status.as_u16(), headers)?;
    }
    Ok(())
}

/// Turn a received response into its body, or an API error for non-2xx.
pub(crate) fn check_status(
    status: StatusCode,
    body: Vec<u8>,
    request: &ResolvedRequest,
) -> Result<Vec<u8>, TrophyError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(TrophyError::api_error(
            status.as_u16(),
            String::from_utf8_lossy(&body).into_owned(),
            request.info(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ApiScope;
    use crate::execution::request::PreparedRequest;

    #[test]
    fn non_success_status_becomes_api_error_with_request() {
        let request = PreparedRequest::get(ApiScope::Api, "/users/18")
            .resolve(&ClientConfig::new())
            .unwrap();

        let err = check_status(
            StatusCode::NOT_FOUND,
            br#"{"error":"User not found"}"#.to_vec(),
            &request,
        )
        .unwrap_err();

        assert!(err.is_not_found());
        let info = err.request().unwrap();
        assert_eq!(info.url, "https://api.trophy.so/v1/users/18");
        assert!(err.to_string().contains("User not found"));

        let ok = check_status(StatusCode::CREATED, b"{}".to_vec(), &request).unwrap();
        assert_eq!(ok, b"{}");
    }
}
