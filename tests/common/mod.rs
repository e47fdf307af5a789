//! Scripted in-memory diary service shared by the integration tests
//!
//! Responses are queued up front and handed out in order; every request is
//! recorded so tests can assert on call count, order, paths and credentials.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use my_diary::{ApiResponse, Method, ResourceClient};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub content_type: String,
    pub auth_token: Option<String>,
}

#[derive(Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<ApiResponse, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn respond(self, response: ApiResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a transport failure
    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Queue more responses after construction
    pub fn push(&self, response: ApiResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect()
    }
}

#[async_trait]
impl ResourceClient for ScriptedClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        content_type: &str,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
            content_type: content_type.to_string(),
            auth_token: auth_token.map(str::to_string),
        });

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("no scripted response for {} {}", method, path)),
        }
    }
}

// ── Canned payloads ──

pub fn diary_payload(emotion_id: i64) -> Value {
    json!({
        "emotionId": emotion_id,
        "date": "2024-03-01T14:30:00",
        "title": "T",
        "content": "C"
    })
}

pub fn diary_ok(emotion_id: i64) -> ApiResponse {
    ApiResponse::with_data(200, diary_payload(emotion_id))
}

pub fn emotion_ok(emotion_id: i64) -> ApiResponse {
    ApiResponse::with_data(200, json!({ "emotionId": emotion_id }))
}
