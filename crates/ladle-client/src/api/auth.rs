//! `/auth/*` endpoints.

use ladle_types::Envelope;
use serde_json::{Value, json};

use crate::error::Error;
use crate::http::ApiClient;

pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<Envelope, Error> {
    api.post("/auth/login", &json!({ "email": email, "password": password }))
        .await
}

pub async fn register(api: &ApiClient, user_data: &Value) -> Result<Envelope, Error> {
    api.post("/auth/register", user_data).await
}

/// Returns the authenticated user's own record.
pub async fn me(api: &ApiClient) -> Result<Envelope, Error> {
    api.get("/auth/me").await
}

/// Explicit token renewal. The HTTP wrapper performs this automatically on a
/// 401; this exists for callers that want to renew ahead of time.
pub async fn refresh(api: &ApiClient) -> Result<Envelope, Error> {
    api.post("/auth/refresh", &json!({})).await
}
