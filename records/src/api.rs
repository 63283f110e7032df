//! HTTP envelope and listing types shared by the backend and the API client.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

/// Envelope wrapping every JSON response: `{status, data?, message?}`.
///
/// `status` mirrors the HTTP status code so clients that only look at the
/// body still see the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn ok(status: u16, data: T) -> Self {
        Self { status, data: Some(data), message: None }
    }

    #[must_use]
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self { status, data: None, message: Some(message.into()) }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One row of the module catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Acknowledgement for a newly stored module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedModule {
    pub id: String,
}
