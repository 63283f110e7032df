//! HTTP client for the World Builder module store.
//!
//! [`ApiClient`] wraps the three module endpoints and unwraps the
//! `{status, data, message}` envelope. The `wb` binary and the server's
//! end-to-end tests both drive the API through it.

pub mod api;

pub use api::{ApiClient, endpoint_url};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("reading input failed: {0}")]
    Io(#[from] std::io::Error),
}
