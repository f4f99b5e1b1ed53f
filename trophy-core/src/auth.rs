//! API key sources.
//!
//! A client holds either a fixed key or a [`CredentialProvider`] that is
//! asked for the key on every call, so rotated keys take effect without
//! rebuilding the client.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;
use trophy_spec::TrophyError;

/// Supplies the API key at call time.
///
/// `Ok(None)` means no key is available; the request is then sent without an
/// `X-API-KEY` header.
pub trait CredentialProvider: Send + Sync {
    fn resolve(&self) -> Result<Option<SecretString>, TrophyError>;
}

impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn resolve(&self) -> Result<Option<SecretString>, TrophyError> {
        Ok(self().map(SecretString::from))
    }
}

/// Reads the key from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(crate::defaults::API_KEY_ENV_VAR)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn resolve(&self) -> Result<Option<SecretString>, TrophyError> {
        Ok(std::env::var(&self.var)
            .ok()
            .filter(|k| !k.is_empty())
            .map(SecretString::from))
    }
}

/// Client-level API key.
#[derive(Clone)]
pub enum ApiKey {
    Static(SecretString),
    Provider(Arc<dyn CredentialProvider>),
}

impl ApiKey {
    pub fn provider(provider: impl CredentialProvider + 'static) -> Self {
        Self::Provider(Arc::new(provider))
    }

    pub fn resolve(&self) -> Result<Option<SecretString>, TrophyError> {
        match self {
            Self::Static(key) if key.expose_secret().is_empty() => Ok(None),
            Self::Static(key) => Ok(Some(key.clone())),
            Self::Provider(provider) => provider.resolve(),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => f.write_str("ApiKey::Static([REDACTED])"),
            Self::Provider(_) => f.write_str("ApiKey::Provider(..)"),
        }
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::Static(SecretString::from(key.to_string()))
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::Static(SecretString::from(key))
    }
}

impl From<SecretString> for ApiKey {
    fn from(key: SecretString) -> Self {
        Self::Static(key)
    }
}
