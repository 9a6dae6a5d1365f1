//! The `{ success, data?, message? }` response envelope.
//!
//! Every endpoint of the recipe service wraps its payload in this envelope.
//! Callers branch on `success`; `data` stays opaque JSON so upstream schema
//! changes don't ripple through the client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// Returns the server-supplied message, or `fallback` when absent.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }

    /// Consumes the envelope, yielding `data` on success and the failure
    /// message (or `fallback`) otherwise.
    pub fn into_data(self, fallback: &str) -> Result<Value, String> {
        if self.success {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(self.message.unwrap_or_else(|| fallback.to_string()))
        }
    }
}
