use reqwest::StatusCode;

/// User-visible text for any token acquisition failure
pub const TOKEN_FAILURE_TEXT: &str = "Unable to load contact form";

/// User-visible text for a network/timeout failure during submission
pub const SUBMIT_NETWORK_TEXT: &str = "Unable to connect to server";

/// Fallback text when a rejection response has no usable message field
pub const SUBMIT_FALLBACK_TEXT: &str = "Form submission failed";

/// Misconfiguration detected when the widget is constructed. These are
/// programmer errors and are surfaced before any terminal or network work.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Must provide a value for either csrfHeaderName or csrfFieldName; cannot both be empty")]
    MissingTransport,

    #[error("Must provide a value for csrfUrl")]
    MissingCsrfUrl,

    #[error("Must provide a value for submitUrl")]
    MissingSubmitUrl,
}

/// Why token acquisition failed. The cause is kept for logs; the user sees
/// the same text for every variant.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token endpoint returned {0}")]
    BadStatus(StatusCode),

    #[error("Token endpoint response is missing header '{0}'")]
    MissingHeader(String),

    #[error("Token endpoint response is missing field '{0}'")]
    MissingField(String),

    #[error("Token endpoint response is not valid JSON: {0}")]
    BadBody(#[source] reqwest::Error),

    #[error("Token request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl TokenError {
    pub fn user_message(&self) -> &'static str {
        TOKEN_FAILURE_TEXT
    }
}

/// Why a submission attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Non-2xx response; `message` is the server's text, or the generic
    /// fallback when the body had no `message` field.
    #[error("Submission rejected: {message}")]
    Rejected { message: String },

    #[error("Submit request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message } => message.clone(),
            SubmitError::Transport(_) => SUBMIT_NETWORK_TEXT.to_string(),
        }
    }
}
