//! Configuration loading and resolution.

use crate::types::{GformError, GformResult, UnsetValue};

/// Default form URL used when a request does not name one.
pub const FORM_URL_ENV: &str = "GFORM_QUICK_SUBMIT_FORM_URL";

/// Request timeout override in milliseconds.
pub const TIMEOUT_ENV: &str = "GFORM_QUICK_SUBMIT_TIMEOUT_MS";

/// Placeholder form URL meaning "use the configured default".
pub const DEFAULT_FORM_URL_SENTINEL: &str = "default";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

/// Settings for a [`GformClient`](crate::GformClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub default_form_url: Option<String>,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub unset_value: UnsetValue,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_form_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            unset_value: UnsetValue::default(),
        }
    }
}

impl ClientConfig {
    /// Read the default form URL and timeout from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_form_url = lookup(FORM_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let timeout_ms = lookup(TIMEOUT_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            default_form_url,
            timeout_ms,
            ..Self::default()
        }
    }

    pub fn with_default_form_url(mut self, url: impl Into<String>) -> Self {
        self.default_form_url = Some(url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_unset_value(mut self, unset_value: UnsetValue) -> Self {
        self.unset_value = unset_value;
        self
    }
}

/// Pick the form URL for a submission.
///
/// An explicit URL wins unless it is blank or `"default"`; then the
/// configured default; otherwise [`GformError::MissingFormUrl`].
pub fn resolve_form_url(explicit: Option<&str>, default: Option<&str>) -> GformResult<String> {
    let explicit = explicit
        .map(str::trim)
        .filter(|u| !u.is_empty() && *u != DEFAULT_FORM_URL_SENTINEL);

    explicit
        .or_else(|| default.map(str::trim).filter(|u| !u.is_empty()))
        .map(str::to_string)
        .ok_or(GformError::MissingFormUrl)
}
