//! `/users/*` endpoints, favorites included.

use ladle_types::Envelope;
use serde_json::{Value, json};

use super::Query;
use crate::error::Error;
use crate::http::ApiClient;

pub async fn profile(api: &ApiClient) -> Result<Envelope, Error> {
    api.get("/users/profile").await
}

pub async fn update_profile(api: &ApiClient, user_data: &Value) -> Result<Envelope, Error> {
    api.put("/users/profile", user_data).await
}

pub async fn update_password(api: &ApiClient, password_data: &Value) -> Result<Envelope, Error> {
    api.put("/users/password", password_data).await
}

pub async fn delete_account(api: &ApiClient) -> Result<Envelope, Error> {
    api.delete("/users/profile").await
}

pub async fn favorites(api: &ApiClient, params: &Query) -> Result<Envelope, Error> {
    api.get_with_query("/users/favorites", params).await
}

/// Marks a recipe as favorited. The endpoint takes no body; an empty object
/// keeps the JSON content type honest.
pub async fn add_favorite(api: &ApiClient, recipe_id: &str) -> Result<Envelope, Error> {
    api.post(&format!("/users/favorites/{recipe_id}"), &json!({}))
        .await
}

pub async fn remove_favorite(api: &ApiClient, recipe_id: &str) -> Result<Envelope, Error> {
    api.delete(&format!("/users/favorites/{recipe_id}")).await
}
