//! Entry-ID discovery from a public form page.
//!
//! Google Forms embeds each question's configuration as a JavaScript array
//! literal in a `data-params` attribute, HTML-escaped:
//!
//! ```text
//! data-params="%.@.[1402911216,&quot;Company&quot;,null,0,[[1037971436,null,0]],...]"
//! ```
//!
//! The entry ID is the first number followed by `,null` after an opening
//! bracket; the label is the first `&quot;`-quoted string after a comma.
//! This is a best-effort scrape of markup we do not control: anything that
//! does not fit the pattern is skipped rather than reported.

use std::sync::OnceLock;

use regex::Regex;

use crate::submit::GformClient;
use crate::types::{FormEntry, GformError, GformResult};

fn data_params_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"data-params="[^"]*"(?:[^>]*>)"#).expect("data-params regex is valid")
    })
}

fn entry_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([0-9]+),null").expect("entry id regex is valid"))
}

fn label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",&quot;([^&]+)&quot;").expect("label regex is valid"))
}

fn form_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"https://docs\.google\.com/forms/d/e/\S+/viewform")
            .expect("form url regex is valid")
    })
}

/// Extract `(id, label)` pairs from form HTML in document order.
pub fn parse_entries(html: &str) -> Vec<FormEntry> {
    data_params_re()
        .find_iter(html)
        .filter_map(|m| parse_data_params(m.as_str()))
        .collect()
}

/// Parse one matched `data-params="..."` attribute.
fn parse_data_params(params: &str) -> Option<FormEntry> {
    let id = entry_id_re().captures(params)?.get(1)?.as_str();
    let label = label_re().captures(params)?.get(1)?.as_str();
    Some(FormEntry {
        id: id.to_string(),
        label: label.to_string(),
    })
}

/// Whether `url` looks like a public form's `viewform` link.
pub fn is_google_form_url(url: &str) -> bool {
    url::Url::parse(url).is_ok() && form_url_re().is_match(url)
}

impl GformClient {
    /// Fetch a form page and scrape its entries.
    pub async fn fetch_entries(&self, form_url: &str) -> GformResult<Vec<FormEntry>> {
        let result = self.fetch_entries_inner(form_url).await;
        if let Err(e) = &result {
            tracing::error!(url = %form_url, error = %e, "Failed to parse Google Form entries");
        }
        result
    }

    async fn fetch_entries_inner(&self, form_url: &str) -> GformResult<Vec<FormEntry>> {
        url::Url::parse(form_url).map_err(|e| GformError::InvalidFormUrl(e.to_string()))?;

        let resp = self.http().get(form_url).await?;
        if !resp.is_success() {
            return Err(GformError::FetchFailed {
                status: resp.status,
                reason: resp.reason,
            });
        }

        let entries = parse_entries(&resp.body);
        tracing::debug!(url = %form_url, count = entries.len(), "scraped form entries");
        Ok(entries)
    }
}
