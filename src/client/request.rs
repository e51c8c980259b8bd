//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides the enrollment endpoint for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::error::{ErrorKind, Result};
use reqwest::Client;

use super::{join_url, ENROLL_PATH};
use crate::interface::{EnrollApi, HttpClient};
use crate::model::dtos::{EnrollParams, EnrollRequestBody, ErrorBody};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    base_url: String,
}

impl NoWasmClient {
    /// Wrap an existing reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }
}

impl HttpClient for NoWasmClient {
    async fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }
}

impl EnrollApi for NoWasmClient {
    async fn enroll(&self, params: EnrollParams) -> Result<()> {
        let url = join_url(&self.base_url, ENROLL_PATH);
        let body = EnrollRequestBody::from(&params);
        log::debug!("POST {url} courseId={}", body.course_id);

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if status.is_success() {
            log::info!("Enrolled in course {}", body.course_id);
            return Ok(());
        }

        // 失败时尝试读取服务端给出的 message
        let text = resp.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&text);
        log::warn!(
            "Enrollment in course {} rejected: {} {:?}",
            body.course_id,
            status.as_u16(),
            message
        );

        Err(ErrorKind::RequestFailed {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

pub async fn create_client(base_url: &str) -> Result<NoWasmClient> {
    NoWasmClient::new(base_url).await
}
