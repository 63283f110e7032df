#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{ApiResponse, CreatedModule, ModuleRecord, ModuleSummary};
use serde::de::DeserializeOwned;

use crate::CliError;

const HTTP_NOT_FOUND: u16 = 404;

/// Join `base_url` and an absolute API `path`.
///
/// # Errors
///
/// Returns [`CliError::InvalidBaseUrl`] unless the base starts with `http://` or `https://`.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<String, CliError> {
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
    }
    Ok(format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/')))
}

/// Decode a response body and pull `data` out of the envelope.
///
/// # Errors
///
/// Non-2xx responses become [`CliError::Server`] carrying the envelope's
/// message (or the raw body if it is not an envelope). A 2xx body that is
/// not valid JSON is [`CliError::InvalidJson`]; one without `data` is
/// [`CliError::MissingField`].
pub fn decode_envelope<T: DeserializeOwned>(http_status: u16, body: &str) -> Result<T, CliError> {
    let success = (200..300).contains(&http_status);
    let envelope = match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) => envelope,
        Err(e) if success => return Err(CliError::InvalidJson(e)),
        Err(_) => return Err(CliError::Server { status: http_status, message: body.trim().to_owned() }),
    };
    if !success || !envelope.is_success() {
        return Err(CliError::Server {
            status: http_status,
            message: envelope.message.unwrap_or_else(|| "no message".to_owned()),
        });
    }
    envelope.data.ok_or(CliError::MissingField("data"))
}

/// Typed client for the module store API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] for a base URL without an HTTP scheme.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CliError> {
        let base_url = base_url.into();
        endpoint_url(&base_url, "/")?;
        Ok(Self { base_url, http: reqwest::Client::new() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<(u16, String), CliError> {
        let response = self.http.get(endpoint_url(&self.base_url, path)?).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.text().await?))
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Fails if the server is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), CliError> {
        let (status, body) = self.get("/healthz").await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(CliError::Server { status, message: body })
        }
    }

    /// `GET /api/get-modules`: id, name and type of every stored module.
    ///
    /// # Errors
    ///
    /// See [`decode_envelope`].
    pub async fn list_modules(&self) -> Result<Vec<ModuleSummary>, CliError> {
        let (status, body) = self.get("/api/get-modules").await?;
        decode_envelope(status, &body)
    }

    /// `GET /api/get-module-data/{id}`. Unknown ids are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// See [`decode_envelope`].
    pub async fn get_module(&self, id: &str) -> Result<Option<ModuleRecord>, CliError> {
        let (status, body) = self.get(&format!("/api/get-module-data/{id}")).await?;
        if status == HTTP_NOT_FOUND {
            return Ok(None);
        }
        decode_envelope(status, &body).map(Some)
    }

    /// `POST /api/add-new-module`; returns the new module's id.
    ///
    /// # Errors
    ///
    /// See [`decode_envelope`].
    pub async fn create_module(&self, record: &ModuleRecord) -> Result<String, CliError> {
        let url = endpoint_url(&self.base_url, "/api/add-new-module")?;
        let response = self.http.post(url).json(record).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let created: CreatedModule = decode_envelope(status, &body)?;
        Ok(created.id)
    }
}
