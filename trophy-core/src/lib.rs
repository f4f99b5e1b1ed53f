//! trophy-core
//!
//! Transport layer for the Trophy SDK: per-call options, environments,
//! credentials, request preparation, retry and the async and blocking HTTP
//! backends.
#![deny(unsafe_code)]

pub mod auth;
pub mod config;
pub mod defaults;
pub mod environment;
pub mod execution;
pub mod options;
pub mod retry;

pub use auth::{ApiKey, CredentialProvider, EnvCredentialProvider};
pub use config::ClientConfig;
pub use environment::{ApiScope, Environment};
pub use execution::{
    ApiCall, AsyncTransport, BlockingTransport, HttpInterceptor, HttpRequestContext,
    LoggingInterceptor, PreparedRequest, ResolvedRequest, Transport,
};
pub use options::RequestOptions;
pub use retry::{RetryExecutor, RetryPolicy};
pub use trophy_spec::{RequestInfo, TrophyError, ValidationError};
