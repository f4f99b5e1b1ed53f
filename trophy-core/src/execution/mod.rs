//! Request execution: preparation, resolution and the HTTP backends.

pub mod http;
pub mod request;

pub use http::*;
pub use request::{ApiCall, PreparedRequest, ResolvedRequest, encode_path_segment};
