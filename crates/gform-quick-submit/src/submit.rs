//! Response submission to a form's `formResponse` endpoint.

use crate::config::{resolve_form_url, ClientConfig};
use crate::encode::{encode_items, form_response_url};
use crate::http::HttpClient;
use crate::types::{GformError, GformResult, SubmitRequest, SubmitResponse};

/// Client for submitting responses and discovering entry IDs.
#[derive(Clone)]
pub struct GformClient {
    http: HttpClient,
    config: ClientConfig,
}

impl GformClient {
    /// Build a client. Fails if the HTTP client cannot be constructed,
    /// e.g. for a user agent that is not a valid header value.
    pub fn new(config: ClientConfig) -> GformResult<Self> {
        Ok(Self {
            http: HttpClient::new(config.timeout_ms, &config.user_agent)?,
            config,
        })
    }

    /// Client configured from `GFORM_QUICK_SUBMIT_*` environment variables.
    pub fn from_env() -> GformResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Submit a response, returning a flag instead of an error.
    ///
    /// Failures are logged and reported in [`SubmitResponse::error`].
    pub async fn submit(&self, request: &SubmitRequest) -> SubmitResponse {
        let result = self.try_submit(request).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Form submission error");
        }
        result.into()
    }

    /// Submit a response, propagating any failure.
    ///
    /// The form URL is resolved before anything is sent; with neither an
    /// explicit URL nor a configured default no request is made.
    pub async fn try_submit(&self, request: &SubmitRequest) -> GformResult<()> {
        let form_url = resolve_form_url(
            request.form_url.as_deref(),
            self.config.default_form_url.as_deref(),
        )?;
        let endpoint = form_response_url(&form_url);
        let body = encode_items(&request.data, self.config.unset_value);

        let resp = self.http.post_form(&endpoint, body).await?;
        if !resp.is_success() {
            return Err(GformError::SubmitRejected {
                status: resp.status,
            });
        }

        tracing::debug!(%endpoint, fields = request.data.len(), "form submitted");
        Ok(())
    }
}
