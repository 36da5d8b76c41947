use tracing::warn;

use crate::client::CsrfToken;
use crate::error::TOKEN_FAILURE_TEXT;
use crate::fields::FormFields;

/// Lifecycle of the widget, as an explicit tagged state.
///
/// Transitions are one-directional: `Loading` resolves into `Ready` or
/// `Failed` exactly once, `Ready` can absorb any number of submit rejections
/// and finally become `Success`. Nothing ever returns to `Loading`, and a
/// form without a token is unrepresentable (`Ready` owns the token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    /// Token acquisition in flight; no form yet
    Loading,
    /// Token acquisition failed; terminal, no form
    Failed { error: String },
    /// Form is editable; `error` holds the last submit failure, if any
    Ready {
        token: CsrfToken,
        fields: FormFields,
        error: Option<String>,
    },
    /// Submission accepted; terminal, form discarded
    Success,
}

impl WidgetState {
    pub fn new() -> Self {
        WidgetState::Loading
    }

    /// Loading -> Ready. A token applied in any other state is dropped, so a
    /// stray second result can never replace a token already held.
    pub fn token_acquired(&mut self, token: CsrfToken) {
        match self {
            WidgetState::Loading => {
                *self = WidgetState::Ready {
                    token,
                    fields: FormFields::default(),
                    error: None,
                };
            }
            other => warn!(state = ?other, "ignoring token outside of Loading"),
        }
    }

    /// Loading -> Failed
    pub fn token_failed(&mut self) {
        match self {
            WidgetState::Loading => {
                *self = WidgetState::Failed {
                    error: TOKEN_FAILURE_TEXT.to_string(),
                };
            }
            other => warn!(state = ?other, "ignoring token failure outside of Loading"),
        }
    }

    /// Ready -> Ready with the new error; entered field values are kept
    pub fn submit_rejected(&mut self, message: String) {
        match self {
            WidgetState::Ready { error, .. } => *error = Some(message),
            other => warn!(state = ?other, "ignoring submit rejection outside of Ready"),
        }
    }

    /// Ready -> Success
    pub fn submit_accepted(&mut self) {
        match self {
            WidgetState::Ready { .. } => *self = WidgetState::Success,
            other => warn!(state = ?other, "ignoring submit success outside of Ready"),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, WidgetState::Ready { .. })
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}
