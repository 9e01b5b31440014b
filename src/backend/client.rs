//! HTTP client wiring shared by every backend call.
//!
//! A single [`reqwest::Client`] is configured with the API base address. The
//! session token, when present, is attached as a bearer header on every
//! request. Failures are mapped onto [`ApiError`] and returned as-is.

use std::time::Duration;

use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::auth::Session;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client for `base_url`. `timeout` of `None` disables the per-request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>, session: Session) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!("hazy/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for an API path such as `/words`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request, attaching the session token if one is set.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");

        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and turn transport failures and non-success statuses into errors.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url().path());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), extract_detail(&body)))
    }

    /// Send a request and decode its JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let body = response.text().await.map_err(map_transport_error)?;
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidData(format!("Unexpected response body: {e}")))
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Network(format!("Request timed out: {error}"))
    } else if error.is_decode() {
        ApiError::InvalidData(error.to_string())
    } else {
        ApiError::Network(error.to_string())
    }
}

/// Pull the `detail` string out of an error body such as `{"detail": "Word not found"}`.
///
/// Structured details (lists of validation errors) are not user-facing text and are ignored.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|detail| detail.as_str())
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .map(String::from)
}
