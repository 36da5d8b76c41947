pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod state;
pub mod tracing_setup;
pub mod transport;

pub use client::{CsrfToken, FormClient};
pub use config::WidgetConfig;
pub use error::{ConfigError, SubmitError, TokenError};
pub use fields::{FieldId, FormFields};
pub use state::WidgetState;
pub use transport::CsrfTransport;
