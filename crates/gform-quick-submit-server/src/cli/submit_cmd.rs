//! `gform-quick-submit submit`: send one response from the command line.

use anyhow::Result;
use gform_quick_submit::{
    ClientConfig, FormItem, GformClient, SubmitRequest, SubmitResponse, UnsetValue,
};

/// Parse a `KEY=VALUE` argument. `KEY` may carry an `entry.` prefix.
pub fn parse_entry_arg(arg: &str) -> Result<FormItem, String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    Ok(FormItem::new(parse_entry_key(key)?, value))
}

/// Parse a bare entry ID argument.
pub fn parse_entry_key(key: &str) -> Result<String, String> {
    let key = key.trim();
    let key = key.strip_prefix("entry.").unwrap_or(key);
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("entry ID must be numeric, got '{key}'"));
    }
    Ok(key.to_string())
}

/// Build the request from parsed arguments. Unset keys follow the valued ones.
pub fn build_request(
    form_url: Option<String>,
    entries: Vec<FormItem>,
    unset: Vec<String>,
) -> SubmitRequest {
    let mut data = entries;
    data.extend(unset.into_iter().map(FormItem::unset));
    SubmitRequest { form_url, data }
}

/// Run the submit command.
pub async fn run(
    form_url: Option<String>,
    entries: Vec<FormItem>,
    unset: Vec<String>,
    unset_as: UnsetValue,
) -> Result<SubmitResponse> {
    let client = GformClient::new(ClientConfig::from_env().with_unset_value(unset_as))?;
    let request = build_request(form_url, entries, unset);
    Ok(client.submit(&request).await)
}
