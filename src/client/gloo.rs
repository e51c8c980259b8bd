//! WASM HTTP client implementation using gloo_net
//!
//! This module provides the enrollment endpoint for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::error::{ErrorKind, Result};
use gloo_net::http::{Request, Response};
use web_sys::{RequestCredentials, RequestMode};

use super::{join_url, ENROLL_PATH};
use crate::interface::{EnrollApi, HttpClient};
use crate::model::dtos::{EnrollParams, EnrollRequestBody, ErrorBody};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    base_url: String,
}

impl HttpClient for WasmClient {
    async fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }
}

impl WasmClient {
    /// Fetch mode for `base_url`: relative bases stay on the page's origin,
    /// absolute ones may point at another origin and need CORS.
    fn request_mode(base_url: &str) -> RequestMode {
        if base_url.is_empty() || base_url.starts_with('/') {
            RequestMode::SameOrigin
        } else {
            RequestMode::Cors
        }
    }

    /// Map a non-2xx response to `RequestFailed`, keeping the server message
    async fn handle_failure(resp: Response) -> Result<()> {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&text);

        log::debug!("Response status: {status}");
        log::debug!("Response body length: {}", text.len());

        Err(ErrorKind::RequestFailed { status, message }.into())
    }
}

impl EnrollApi for WasmClient {
    async fn enroll(&self, params: EnrollParams) -> Result<()> {
        let url = join_url(&self.base_url, ENROLL_PATH);
        let body = EnrollRequestBody::from(&params);

        let resp = Request::post(&url)
            .mode(Self::request_mode(&self.base_url))
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
            .json(&body)?
            .send()
            .await?;

        if resp.ok() {
            log::info!("Enrolled in course {}", body.course_id);
            return Ok(());
        }

        Self::handle_failure(resp).await
    }
}
