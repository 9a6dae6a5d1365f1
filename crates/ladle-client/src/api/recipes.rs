//! `/recipes/*` endpoints.

use ladle_types::Envelope;
use serde_json::Value;

use super::Query;
use crate::error::Error;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient, params: &Query) -> Result<Envelope, Error> {
    api.get_with_query("/recipes", params).await
}

pub async fn get(api: &ApiClient, id: &str) -> Result<Envelope, Error> {
    api.get(&format!("/recipes/{id}")).await
}

pub async fn create(api: &ApiClient, recipe: &Value) -> Result<Envelope, Error> {
    api.post("/recipes", recipe).await
}

pub async fn update(api: &ApiClient, id: &str, recipe: &Value) -> Result<Envelope, Error> {
    api.put(&format!("/recipes/{id}"), recipe).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<Envelope, Error> {
    api.delete(&format!("/recipes/{id}")).await
}

/// Full-text search; `q` is sent alongside any extra params.
pub async fn search(api: &ApiClient, query: &str, params: &Query) -> Result<Envelope, Error> {
    let mut merged: Vec<(String, String)> = vec![("q".to_string(), query.to_string())];
    merged.extend_from_slice(params);
    api.get_with_query("/recipes/search", &merged).await
}

pub async fn cuisines(api: &ApiClient) -> Result<Envelope, Error> {
    api.get("/recipes/cuisines").await
}

pub async fn tags(api: &ApiClient) -> Result<Envelope, Error> {
    api.get("/recipes/tags").await
}

pub async fn by_cuisine(api: &ApiClient, cuisine: &str, params: &Query) -> Result<Envelope, Error> {
    api.get_with_query(&format!("/recipes/cuisine/{cuisine}"), params)
        .await
}

pub async fn by_meal_type(
    api: &ApiClient,
    meal_type: &str,
    params: &Query,
) -> Result<Envelope, Error> {
    api.get_with_query(&format!("/recipes/meal/{meal_type}"), params)
        .await
}
