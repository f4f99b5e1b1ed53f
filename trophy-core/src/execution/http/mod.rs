//! HTTP Utilities
//!
//! - Header building and masking
//! - HTTP interceptors
//! - The `Transport` trait and its async and blocking backends

pub mod async_transport;
pub mod blocking_transport;
pub mod headers;
pub mod interceptor;
pub mod transport;

pub use async_transport::AsyncTransport;
pub use blocking_transport::BlockingTransport;
pub use headers::{HttpHeaderBuilder, masked_headers};
pub use interceptor::{HttpInterceptor, HttpRequestContext, LoggingInterceptor};
pub use transport::Transport;
