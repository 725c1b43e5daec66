//! Async HTTP client wrapping reqwest.
//!
//! One request per call: no retries, no backoff. Callers decide what a
//! non-2xx status means.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::types::GformResult;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Response from an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase for the status, if known.
    pub reason: String,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client shared by submission and scraping.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with the given timeout and user agent.
    ///
    /// Fails if the user agent is not a valid header value or the TLS
    /// backend cannot be initialized.
    pub fn new(timeout_ms: u64, user_agent: &str) -> GformResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Perform a single GET request.
    pub async fn get(&self, url: &str) -> GformResult<HttpResponse> {
        tracing::debug!(%url, "GET");
        let r = self.client.get(url).send().await?;
        Self::collect(url, r).await
    }

    /// POST an already-encoded form body.
    pub async fn post_form(&self, url: &str, body: String) -> GformResult<HttpResponse> {
        tracing::debug!(%url, bytes = body.len(), "POST form");
        let r = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        Self::collect(url, r).await
    }

    async fn collect(url: &str, r: reqwest::Response) -> GformResult<HttpResponse> {
        let status = r.status();
        let final_url = r.url().to_string();
        let body = r.text().await?;

        Ok(HttpResponse {
            url: url.to_string(),
            final_url,
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        assert!(HttpClient::new(1000, crate::config::DEFAULT_USER_AGENT).is_ok());
    }

    #[test]
    fn test_invalid_user_agent_is_error() {
        let result = HttpClient::new(1000, "gform\nquick-submit");
        assert!(matches!(result, Err(crate::types::GformError::Http(_))));
    }

    #[test]
    fn test_is_success_range() {
        let mut resp = HttpResponse {
            url: "https://example.com".to_string(),
            final_url: "https://example.com".to_string(),
            status: 204,
            reason: "No Content".to_string(),
            body: String::new(),
        };
        assert!(resp.is_success());
        resp.status = 302;
        assert!(!resp.is_success());
        resp.status = 199;
        assert!(!resp.is_success());
    }
}
