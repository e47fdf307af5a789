//! ResourceClient trait — the only boundary between the controller and the diary service.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::types::{ApiResponse, Method};

/// Performs authenticated requests against the diary service.
///
/// Implementations return `Ok` for every response the service produced,
/// whatever its status. `Err` is reserved for requests that never yielded a
/// usable response (connection failure, timeout, undecodable body).
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Issue one request. `auth_token` is attached as a bearer credential when present.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        content_type: &str,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse>;
}

#[async_trait]
impl<T: ResourceClient + ?Sized> ResourceClient for Arc<T> {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        content_type: &str,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse> {
        (**self)
            .request(method, path, body, content_type, auth_token)
            .await
    }
}
