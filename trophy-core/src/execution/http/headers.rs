//! HTTP Headers Utility
//!
//! Builds the header set of a Trophy request: SDK identification, the API
//! key, client defaults and call-level overrides, in that order.

use crate::defaults;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use trophy_spec::TrophyError;

/// Placeholder stored instead of the API key in error reports.
pub const MASKED_VALUE: &str = "[REDACTED]";

/// HTTP header builder for API requests
#[derive(Debug, Default)]
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `X-Fern-Language` and `X-Fern-SDK-Name`.
    pub fn with_sdk_headers(mut self) -> Self {
        self.headers.insert(
            HeaderName::from_static(defaults::headers::FERN_LANGUAGE),
            HeaderValue::from_static(defaults::sdk::LANGUAGE),
        );
        self.headers.insert(
            HeaderName::from_static(defaults::headers::FERN_SDK_NAME),
            HeaderValue::from_static(defaults::sdk::NAME),
        );
        self
    }

    /// `X-API-KEY`, only when a key is present.
    pub fn with_api_key(mut self, api_key: Option<&SecretString>) -> Result<Self, TrophyError> {
        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(key.expose_secret()).map_err(|e| {
                TrophyError::ConfigurationError(format!("Invalid API key format: {e}"))
            })?;
            value.set_sensitive(true);
            self.headers
                .insert(HeaderName::from_static(defaults::headers::API_KEY), value);
        }
        Ok(self)
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, TrophyError> {
        self.headers
            .insert(parse_name(name)?, parse_value(name, value)?);
        Ok(self)
    }

    /// Merge already-validated headers, replacing same-named entries.
    pub fn with_headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Apply call-level overrides: `Some` sets the header, `None` removes it.
    pub fn with_overrides(
        mut self,
        overrides: &HashMap<String, Option<String>>,
    ) -> Result<Self, TrophyError> {
        for (name, value) in overrides {
            let header_name = parse_name(name)?;
            match value {
                Some(value) => {
                    self.headers
                        .insert(header_name, parse_value(name, value)?);
                }
                None => {
                    self.headers.remove(header_name);
                }
            }
        }
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

/// Validate a name/value map into a `HeaderMap`.
pub fn parse_headers(headers: &HashMap<String, String>) -> Result<HeaderMap, TrophyError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        map.insert(parse_name(name)?, parse_value(name, value)?);
    }
    Ok(map)
}

/// Header pairs for diagnostics, with the API key masked.
pub fn masked_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if name.as_str().eq_ignore_ascii_case(defaults::headers::API_KEY)
                || value.is_sensitive()
            {
                MASKED_VALUE.to_string()
            } else {
                value.to_str().unwrap_or_default().to_string()
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}

fn parse_name(name: &str) -> Result<HeaderName, TrophyError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
        TrophyError::ConfigurationError(format!("Invalid header name '{name}': {e}"))
    })
}

fn parse_value(name: &str, value: &str) -> Result<HeaderValue, TrophyError> {
    HeaderValue::from_str(value).map_err(|e| {
        TrophyError::ConfigurationError(format!("Invalid value for header '{name}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builder() {
        let key = SecretString::from("secret-key".to_string());
        let headers = HttpHeaderBuilder::new()
            .with_sdk_headers()
            .with_api_key(Some(&key))
            .unwrap()
            .build();

        assert_eq!(headers.get("X-Fern-Language").unwrap(), "Rust");
        assert_eq!(headers.get("X-Fern-SDK-Name").unwrap(), "trophy");
        assert_eq!(headers.get("X-API-KEY").unwrap(), "secret-key");
        assert!(headers.get("X-API-KEY").unwrap().is_sensitive());
        for name in [
            defaults::headers::FERN_LANGUAGE,
            defaults::headers::FERN_SDK_NAME,
            defaults::headers::API_KEY,
        ] {
            assert!(headers.contains_key(name), "{name}");
        }
    }

    #[test]
    fn missing_api_key_sends_no_header() {
        let headers = HttpHeaderBuilder::new()
            .with_sdk_headers()
            .with_api_key(None)
            .unwrap()
            .build();
        assert!(headers.get("X-API-KEY").is_none());
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn overrides_replace_and_remove_headers() {
        let mut client_defaults = HeaderMap::new();
        client_defaults.insert("x-team", HeaderValue::from_static("growth"));
        client_defaults.insert("x-region", HeaderValue::from_static("eu"));

        let overrides = HashMap::from([
            ("X-Team".to_string(), Some("retention".to_string())),
            ("X-Region".to_string(), None),
            ("X-Fern-SDK-Name".to_string(), None),
        ]);

        let headers = HttpHeaderBuilder::new()
            .with_sdk_headers()
            .with_headers(&client_defaults)
            .with_overrides(&overrides)
            .unwrap()
            .build();

        assert_eq!(headers.get("x-team").unwrap(), "retention");
        assert!(headers.get("x-region").is_none());
        assert!(headers.get("x-fern-sdk-name").is_none());
        assert_eq!(headers.get("x-fern-language").unwrap(), "Rust");
    }

    #[test]
    fn invalid_header_is_a_configuration_error() {
        let err = HttpHeaderBuilder::new()
            .with_header("bad header", "v")
            .unwrap_err();
        assert!(matches!(err, TrophyError::ConfigurationError(_)));

        let err = parse_headers(&HashMap::from([("x-ok".to_string(), "line\nbreak".to_string())]))
            .unwrap_err();
        assert!(matches!(err, TrophyError::ConfigurationError(_)));
    }

    #[test]
    fn masked_headers_hide_the_api_key() {
        let key = SecretString::from("secret-key".to_string());
        let headers = HttpHeaderBuilder::new()
            .with_api_key(Some(&key))
            .unwrap()
            .with_header("x-trace", "abc")
            .unwrap()
            .build();

        let masked = masked_headers(&headers);
        assert!(masked.contains(&("x-api-key".to_string(), MASKED_VALUE.to_string())));
        assert!(masked.contains(&("x-trace".to_string(), "abc".to_string())));
    }
}
