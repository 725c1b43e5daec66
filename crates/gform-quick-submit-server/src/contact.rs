//! Demo contact form: input validation and mapping onto form entries.

use std::sync::OnceLock;

use gform_quick_submit::FormItem;
use regex::Regex;
use serde::Deserialize;

use crate::config::ContactEntryIds;
use crate::error::{ApiError, ApiResult};

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"))
}

impl ContactForm {
    /// Check required fields, returning the first problem found.
    pub fn validate(&self) -> ApiResult<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation {
                field: "name",
                message: "Name is required",
            });
        }
        if !email_re().is_match(self.email.trim()) {
            return Err(ApiError::Validation {
                field: "email",
                message: "Invalid email address",
            });
        }
        if self.message.trim().is_empty() {
            return Err(ApiError::Validation {
                field: "message",
                message: "Message is required",
            });
        }
        Ok(())
    }

    /// Validate and convert into submission items.
    pub fn into_items(self, ids: &ContactEntryIds) -> ApiResult<Vec<FormItem>> {
        self.validate()?;
        Ok(ids.items(
            self.company,
            self.name,
            self.email.trim().to_string(),
            self.message,
        ))
    }
}
