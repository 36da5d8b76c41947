use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::transport::CsrfTransport;

/// Widget configuration, loadable from a camelCase JSON file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Endpoint the CSRF token is fetched from (GET)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_url: Option<String>,

    /// Endpoint the filled form is posted to (POST)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_url: Option<String>,

    /// Header carrying the CSRF token (header mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_header_name: Option<String>,

    /// JSON body field carrying the CSRF token (field mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_field_name: Option<String>,
}

impl WidgetConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: WidgetConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration and resolve it into the form the client
    /// consumes. Misconfiguration is fatal at construction time, before any
    /// network or terminal work starts.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let transport = CsrfTransport::resolve(
            self.csrf_header_name.as_deref(),
            self.csrf_field_name.as_deref(),
        )
        .ok_or(ConfigError::MissingTransport)?;
        let csrf_url = non_empty(self.csrf_url.as_deref()).ok_or(ConfigError::MissingCsrfUrl)?;
        let submit_url =
            non_empty(self.submit_url.as_deref()).ok_or(ConfigError::MissingSubmitUrl)?;
        Ok(ValidatedConfig {
            csrf_url,
            submit_url,
            transport,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Configuration after validation: both URLs present, exactly one transport
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub csrf_url: String,
    pub submit_url: String,
    pub transport: CsrfTransport,
}
