use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{ValidatedConfig, WidgetConfig};
use crate::error::{SubmitError, TokenError, SUBMIT_FALLBACK_TEXT};
use crate::fields::FormFields;
use crate::transport::CsrfTransport;

/// Both widget requests run under the same timeout and are aborted when it
/// elapses.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// An opaque CSRF token. Acquired once per widget lifetime and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shape of a rejection response from the submit endpoint
#[derive(Debug, Deserialize)]
struct RejectionBody {
    message: Option<String>,
}

/// HTTP client for the widget's two endpoints
#[derive(Debug)]
pub struct FormClient {
    http: reqwest::Client,
    config: ValidatedConfig,
    timeout: Duration,
}

impl FormClient {
    /// Validate the configuration and build the client. Misconfiguration is
    /// fatal here, before any request is made.
    pub fn new(config: &WidgetConfig) -> Result<Self> {
        let config = config.validate()?;
        // Cookie store keeps session cookies across the token fetch and the
        // submit, the same-origin credentials the token endpoint relies on.
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            config,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Override the request timeout. Tests use this to avoid waiting the
    /// full production timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn transport(&self) -> &CsrfTransport {
        &self.config.transport
    }

    /// GET the token endpoint and extract the token through the configured
    /// transport. Every failure path maps to the same user-visible message.
    pub async fn fetch_csrf_token(&self) -> Result<CsrfToken, TokenError> {
        let response = self
            .http
            .get(&self.config.csrf_url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "token endpoint returned an error status");
            return Err(TokenError::BadStatus(status));
        }

        match &self.config.transport {
            CsrfTransport::Header(name) => {
                let value = response
                    .headers()
                    .get(name.as_str())
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                if value.is_empty() {
                    return Err(TokenError::MissingHeader(name.clone()));
                }
                debug!("token acquired from response header");
                Ok(CsrfToken::new(value))
            }
            CsrfTransport::Field(name) => {
                let body: serde_json::Value =
                    response.json().await.map_err(TokenError::BadBody)?;
                let value = body
                    .get(name)
                    .and_then(|v| v.as_str())
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| TokenError::MissingField(name.clone()))?;
                debug!("token acquired from response body");
                Ok(CsrfToken::new(value))
            }
        }
    }

    /// POST the filled form. The token rides in the configured header, or as
    /// an extra body field, never both.
    pub async fn submit(&self, fields: &FormFields, token: &CsrfToken) -> Result<(), SubmitError> {
        let body = build_submit_body(fields, token, &self.config.transport);

        let mut request = self
            .http
            .post(&self.config.submit_url)
            .timeout(self.timeout);
        if let CsrfTransport::Header(name) = &self.config.transport {
            request = request.header(name.as_str(), token.as_str());
        }

        let response = request.json(&body).send().await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "submission accepted");
            return Ok(());
        }

        // Non-2xx: surface the server's message verbatim, falling back to a
        // generic text when the body does not have the expected shape.
        let message = response
            .json::<RejectionBody>()
            .await
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| SUBMIT_FALLBACK_TEXT.to_string());
        warn!(%status, %message, "submission rejected");
        Err(SubmitError::Rejected { message })
    }
}

/// Serialize the five fields, injecting the token under the configured field
/// name in field mode. Header mode leaves the body untouched.
fn build_submit_body(
    fields: &FormFields,
    token: &CsrfToken,
    transport: &CsrfTransport,
) -> serde_json::Value {
    let mut body = serde_json::to_value(fields).unwrap_or_default();
    if let (Some(name), Some(map)) = (transport.field_name(), body.as_object_mut()) {
        map.insert(
            name.to_string(),
            serde_json::Value::String(token.as_str().to_string()),
        );
    }
    body
}
