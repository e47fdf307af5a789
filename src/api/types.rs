//! Wire types for the diary service
//!
//! Every endpoint answers with the same envelope:
//!
//! ```json
//! { "data": { ... }, "errorMessage": "..." }
//! ```
//!
//! Both fields are optional. Status codes are carried next to the body so the
//! caller decides what counts as success (200 for reads, 201 for creates).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content type sent with every controller request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Status the service returns for successful reads and deletes
pub const STATUS_OK: u16 = 200;

/// Status the service returns for successful creates
pub const STATUS_CREATED: u16 = 201;

/// HTTP verbs used against the diary service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Response envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    /// Payload; `None` when absent or `null`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Server-supplied explanation for a failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ResponseBody {
    /// Decode a raw response body.
    ///
    /// Empty bodies and bodies that are not a JSON object decode as an empty
    /// envelope, since deletes and some error pages carry no JSON at all.
    /// A JSON object whose fields have the wrong shape is an error.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value),
            Ok(_) | Err(_) => Ok(Self::default()),
        }
    }
}

/// Status code plus decoded envelope, as returned by [`crate::ResourceClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// A response carrying `data`
    pub fn with_data(status: u16, data: Value) -> Self {
        Self::new(
            status,
            ResponseBody {
                data: Some(data),
                error_message: None,
            },
        )
    }

    /// A response carrying only `errorMessage`
    pub fn with_error(status: u16, message: impl Into<String>) -> Self {
        Self::new(
            status,
            ResponseBody {
                data: None,
                error_message: Some(message.into()),
            },
        )
    }

    /// A response with an empty envelope
    pub fn empty(status: u16) -> Self {
        Self::new(status, ResponseBody::default())
    }

    /// The payload, but only when the status matches `expected` and `data` is present
    pub fn data_on(&self, expected: u16) -> Option<&Value> {
        if self.status == expected {
            self.body.data.as_ref()
        } else {
            None
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.body.error_message.as_deref()
    }
}
