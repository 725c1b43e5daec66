//! Core data types for form submissions and scraped form entries.

use serde::{Deserialize, Serialize};

/// One field of a form submission, keyed by its entry ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormItem {
    /// Entry ID, sent as `entry.<key>`.
    pub key: String,
    pub value: Option<String>,
}

impl FormItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A field with no value.
    pub fn unset(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// A complete submission: target form plus its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// Base form URL (`https://docs.google.com/forms/d/e/<id>`).
    /// `None` or `"default"` falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_url: Option<String>,
    pub data: Vec<FormItem>,
}

impl SubmitRequest {
    pub fn new(data: Vec<FormItem>) -> Self {
        Self {
            form_url: None,
            data,
        }
    }

    pub fn with_form_url(mut self, url: impl Into<String>) -> Self {
        self.form_url = Some(url.into());
        self
    }
}

/// Outcome of a submission, flattened for callers that only need a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

impl From<GformResult<()>> for SubmitResponse {
    fn from(result: GformResult<()>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// A question discovered on a public form page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    /// Numeric entry ID.
    pub id: String,
    pub label: String,
}

/// How a [`FormItem`] without a value is written into the request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsetValue {
    /// Send the literal text `undefined`.
    #[default]
    Undefined,
    /// Send the key with an empty value.
    Empty,
    /// Leave the key out of the body.
    Skip,
}

impl std::str::FromStr for UnsetValue {
    type Err = GformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "undefined" => Ok(Self::Undefined),
            "empty" => Ok(Self::Empty),
            "skip" => Ok(Self::Skip),
            other => Err(GformError::InvalidInput(format!(
                "unknown unset-value policy '{other}' (expected undefined, empty or skip)"
            ))),
        }
    }
}

/// Errors that can occur while submitting or scraping a form.
#[derive(thiserror::Error, Debug)]
pub enum GformError {
    #[error("Form URL is not defined in environment variables.")]
    MissingFormUrl,

    #[error("Invalid form URL: {0}")]
    InvalidFormUrl(String),

    #[error("Failed to submit the form. (HTTP {status})")]
    SubmitRejected { status: u16 },

    #[error("Failed to fetch form HTML: {reason}")]
    FetchFailed { status: u16, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience result type.
pub type GformResult<T> = Result<T, GformError>;
