//! HTTP implementation of [`ResourceClient`] over reqwest.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;

use super::client::ResourceClient;
use super::types::{ApiResponse, Method, ResponseBody};
use crate::config::ClientConfig;

/// Diary service client
#[derive(Clone)]
pub struct HttpResourceClient {
    client: Client,
    base_url: String,
}

impl HttpResourceClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, config))
    }

    /// Use a prebuilt reqwest client; `config.timeout` is not applied to it
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ResourceClient for HttpResourceClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        content_type: &str,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse> {
        let url = self.url(path);

        let mut request = self
            .client
            .request(method.into(), &url)
            .header(CONTENT_TYPE, content_type);

        if let Some(token) = auth_token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).context("Failed to serialize request body")?;
            request = request.body(bytes);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send {} {}", method, path))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        let body = ResponseBody::from_slice(&bytes)
            .with_context(|| format!("Failed to parse response for {} {}", method, path))?;

        tracing::debug!(%method, path, status, "Diary service responded");

        Ok(ApiResponse::new(status, body))
    }
}
