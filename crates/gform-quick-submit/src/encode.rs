//! `application/x-www-form-urlencoded` body construction.
//!
//! Google Forms accepts responses as `entry.<id>=<value>` pairs posted to the
//! form's `formResponse` endpoint. Encoding uses the WHATWG serializer from
//! the `url` crate, so spaces become `+` and everything outside
//! `[A-Za-z0-9*-._]` is percent-encoded.

use url::form_urlencoded;

use crate::types::{FormItem, UnsetValue};

/// Text sent for a field with no value under [`UnsetValue::Undefined`].
pub const UNDEFINED_LITERAL: &str = "undefined";

/// Path suffix that accepts responses.
pub const FORM_RESPONSE_PATH: &str = "formResponse";

/// Parameter name for an entry ID.
pub fn entry_param(key: &str) -> String {
    format!("entry.{key}")
}

/// Build the `(name, value)` pairs for a submission, in input order.
pub fn entry_pairs(items: &[FormItem], unset: UnsetValue) -> Vec<(String, String)> {
    items
        .iter()
        .filter_map(|item| {
            let value = match (&item.value, unset) {
                (Some(v), _) => v.clone(),
                (None, UnsetValue::Undefined) => UNDEFINED_LITERAL.to_string(),
                (None, UnsetValue::Empty) => String::new(),
                (None, UnsetValue::Skip) => return None,
            };
            Some((entry_param(&item.key), value))
        })
        .collect()
}

/// Encode a submission body.
pub fn encode_items(items: &[FormItem], unset: UnsetValue) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in entry_pairs(items, unset) {
        serializer.append_pair(&name, &value);
    }
    serializer.finish()
}

/// Resolve the response endpoint for a form base URL.
///
/// Accepts the bare form URL as well as a pasted `.../viewform?usp=...` link.
pub fn form_response_url(base: &str) -> String {
    format!("{}/{FORM_RESPONSE_PATH}", form_base_url(base))
}

/// Strip query, fragment, trailing slashes, and a trailing `viewform` or
/// `formResponse` segment from a form URL.
pub fn form_base_url(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let mut base = url[..end].trim().trim_end_matches('/');
    for suffix in ["/viewform", "/formResponse"] {
        if let Some(stripped) = base.strip_suffix(suffix) {
            base = stripped.trim_end_matches('/');
            break;
        }
    }
    base
}
