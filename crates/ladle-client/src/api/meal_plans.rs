//! `/meal-plans/*` endpoints.

use ladle_types::Envelope;
use serde_json::Value;

use super::Query;
use crate::error::Error;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient, params: &Query) -> Result<Envelope, Error> {
    api.get_with_query("/meal-plans", params).await
}

pub async fn get(api: &ApiClient, id: &str) -> Result<Envelope, Error> {
    api.get(&format!("/meal-plans/{id}")).await
}

pub async fn create(api: &ApiClient, meal_plan: &Value) -> Result<Envelope, Error> {
    api.post("/meal-plans", meal_plan).await
}

pub async fn update(api: &ApiClient, id: &str, meal_plan: &Value) -> Result<Envelope, Error> {
    api.put(&format!("/meal-plans/{id}"), meal_plan).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<Envelope, Error> {
    api.delete(&format!("/meal-plans/{id}")).await
}

/// Adds a recipe entry to an existing plan.
pub async fn add_recipe(api: &ApiClient, plan_id: &str, entry: &Value) -> Result<Envelope, Error> {
    api.post(&format!("/meal-plans/{plan_id}/recipes"), entry)
        .await
}
