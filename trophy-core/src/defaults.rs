//! Default Configuration Values
//!
//! Header names, environment URLs and retry defaults used across the SDK.

use std::time::Duration;

/// Values sent on every request to identify the SDK.
pub mod sdk {
    /// `X-Fern-Language` header value.
    pub const LANGUAGE: &str = "Rust";

    /// `X-Fern-SDK-Name` header value.
    pub const NAME: &str = "trophy";

    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Header names, lowercase as `HeaderName::from_static` requires.
pub mod headers {
    pub const API_KEY: &str = "x-api-key";
    pub const FERN_LANGUAGE: &str = "x-fern-language";
    pub const FERN_SDK_NAME: &str = "x-fern-sdk-name";
}

/// Hosted environment base URLs.
pub mod environment {
    pub const PRODUCTION_API: &str = "https://api.trophy.so/v1";
    pub const PRODUCTION_ADMIN: &str = "https://admin.trophy.so/v1";
}

/// Environment variable read when no API key is configured.
pub const API_KEY_ENV_VAR: &str = "TROPHY_API_KEY";

/// Retry defaults for a policy built from `max_retries`.
pub mod retry {
    use super::*;

    pub const INITIAL_DELAY: Duration = Duration::from_millis(500);

    pub const MAX_DELAY: Duration = Duration::from_secs(10);

    pub const BACKOFF_MULTIPLIER: f64 = 2.0;

    /// Maximum jitter as a share of the computed delay.
    pub const JITTER_FACTOR: f64 = 0.2;
}

/// Logging target for HTTP events.
pub const HTTP_LOG_TARGET: &str = "trophy::http";
