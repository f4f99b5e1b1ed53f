//! Hosted environments and the logical API each endpoint targets.

use crate::defaults;
use std::fmt;

/// Which of the two Trophy APIs an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiScope {
    /// The application API (users, metrics, achievements, ...).
    Api,
    /// The admin API (points boosts, streak freezes).
    Admin,
}

impl fmt::Display for ApiScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Api => "api",
            Self::Admin => "admin",
        })
    }
}

/// Base URLs for both logical APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    api: String,
    admin: String,
}

impl Environment {
    pub fn production() -> Self {
        Self::custom(
            defaults::environment::PRODUCTION_API,
            defaults::environment::PRODUCTION_ADMIN,
        )
    }

    /// An environment with explicit base URLs, e.g. a staging deployment or a
    /// local mock server.
    pub fn custom(api: impl Into<String>, admin: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            admin: admin.into(),
        }
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn admin(&self) -> &str {
        &self.admin
    }

    pub fn url(&self, scope: ApiScope) -> &str {
        match scope {
            ApiScope::Api => &self.api,
            ApiScope::Admin => &self.admin,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_urls() {
        let env = Environment::production();
        assert_eq!(env.url(ApiScope::Api), "https://api.trophy.so/v1");
        assert_eq!(env.url(ApiScope::Admin), "https://admin.trophy.so/v1");
        assert_eq!(Environment::default(), env);
    }

    #[test]
    fn custom_environment_selects_by_scope() {
        let env = Environment::custom("http://localhost:1", "http://localhost:2");
        assert_eq!(env.url(ApiScope::Api), "http://localhost:1");
        assert_eq!(env.url(ApiScope::Admin), "http://localhost:2");
        assert_eq!(ApiScope::Admin.to_string(), "admin");
    }
}
