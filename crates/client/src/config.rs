//! Client configuration.
//!
//! Values come from the environment and may be overridden by CLI flags. A
//! missing API base URL is not a startup error: the register still runs and
//! every lookup reports the configuration problem in the log.

use serde::{Deserialize, Serialize};

/// Primary environment variable holding the API base URL.
pub const API_URL_ENV: &str = "TILLDESK_API_URL";
/// Fallback variable, shared with the web front-end deployment.
pub const LEGACY_API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

pub const DEFAULT_CURRENCY_SUFFIX: &str = "円";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the product API, e.g. `http://localhost:8000`.
    pub api_url: Option<String>,
    /// Appended to every rendered price.
    pub currency_suffix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = non_empty(lookup(API_URL_ENV)).or_else(|| non_empty(lookup(LEGACY_API_URL_ENV)));
        Self {
            api_url,
            ..Self::default()
        }
    }

    /// Override the API base URL (an empty value clears it).
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = non_empty(Some(url));
        }
        self
    }

    pub fn with_currency_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.currency_suffix = suffix.into();
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn primary_variable_wins_over_fallback() {
        let cfg = ClientConfig::from_lookup(env(&[
            (API_URL_ENV, "http://primary"),
            (LEGACY_API_URL_ENV, "http://legacy"),
        ]));
        assert_eq!(cfg.api_url.as_deref(), Some("http://primary"));
    }

    #[test]
    fn fallback_variable_is_used_when_primary_is_blank() {
        let cfg = ClientConfig::from_lookup(env(&[
            (API_URL_ENV, "  "),
            (LEGACY_API_URL_ENV, "http://legacy"),
        ]));
        assert_eq!(cfg.api_url.as_deref(), Some("http://legacy"));
    }

    #[test]
    fn missing_variables_leave_url_unset() {
        let cfg = ClientConfig::from_lookup(env(&[]));
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(cfg.currency_suffix, "円");
    }

    #[test]
    fn flag_override_replaces_env_value() {
        let cfg = ClientConfig::from_lookup(env(&[(API_URL_ENV, "http://env")]))
            .with_api_url(Some("http://flag".into()));
        assert_eq!(cfg.api_url.as_deref(), Some("http://flag"));

        let unchanged = cfg.clone().with_api_url(None);
        assert_eq!(unchanged.api_url.as_deref(), Some("http://flag"));
    }
}
