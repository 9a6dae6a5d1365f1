//! Authenticated HTTP wrapper around the recipe service.
//!
//! Every request goes out with the configured base URL, the fixed 10-second
//! timeout, and a JSON content type. If a token is present in storage it is
//! attached as `Authorization: Bearer <token>` — read fresh on every request,
//! so a refreshed token is picked up by the replay automatically.
//!
//! # 401 handling
//! A 401 on a request that has not yet been retried triggers exactly one
//! `POST /auth/refresh`. On success the new token is persisted and the
//! original request is replayed once; on failure both persisted credentials
//! are removed and the 401 surfaces as [`ErrorKind::AuthExpired`]. This is
//! the only retry policy in the system.

use std::sync::Arc;

use ladle_types::Envelope;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, ErrorKind};
use crate::store::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// HTTP client for the recipe service.
///
/// Cheap to clone behind [`Arc`]; one instance is shared by the session
/// manager, the favorites synchronizer, and the domain facades.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    /// Builds a client from configuration and a credentials store.
    pub fn new(config: &Config, store: Arc<dyn KeyValueStore>) -> Result<Self, Error> {
        // Fail early on an unusable base URL rather than on the first request.
        Url::parse(&config.api_url)
            .map_err(|e| Error::parse(format!("invalid api_url {:?}: {e}", config.api_url)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::new(ErrorKind::Network, e.to_string()))?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            http,
            store,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Envelope, Error> {
        self.send(Method::GET, path, &[], None).await
    }

    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Envelope, Error> {
        self.send(Method::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Envelope, Error> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Envelope, Error> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Envelope, Error> {
        self.send(Method::DELETE, path, &[], None).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Envelope, Error> {
        let mut retried = false;
        loop {
            let response = self.execute(method.clone(), path, query, body).await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED {
                if retried {
                    // The replay came back 401 as well; no second refresh.
                    return Err(Error::auth_expired());
                }
                retried = true;
                debug!(path, "401 received, attempting token refresh");
                match self.refresh_token().await {
                    Ok(()) => continue,
                    Err(refresh_err) => {
                        warn!(error = %refresh_err, "token refresh failed, clearing credentials");
                        if let Err(e) = self.store.remove_many(&[TOKEN_KEY, USER_KEY]) {
                            warn!(error = %e, "failed to clear stored credentials");
                        }
                        return Err(Error::auth_expired());
                    }
                }
            }

            if !status.is_success() {
                let body_text = response.text().await.unwrap_or_default();
                return Err(Error::http_status(status.as_u16(), &body_text));
            }

            return Self::parse_envelope(response).await;
        }
    }

    /// Executes a single request without any retry handling.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<reqwest::Response, Error> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.stored_token() {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .map_err(|e| Error::from_reqwest(&e))
    }

    /// Reads the token from storage, treating a read failure as "no token".
    fn stored_token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "token read failed, sending request unauthenticated");
                None
            }
        }
    }

    /// One-shot refresh against the auth endpoint. Persists the new token on
    /// success so the replay (and everything after it) picks it up.
    async fn refresh_token(&self) -> Result<(), Error> {
        let response = self
            .execute(Method::POST, "/auth/refresh", &[], None)
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), &body_text));
        }

        let envelope = Self::parse_envelope(response).await?;
        let token = envelope
            .data
            .as_ref()
            .and_then(|d| d.get("token"))
            .and_then(Value::as_str)
            .filter(|_| envelope.success)
            .ok_or_else(|| Error::parse("refresh response carried no token"))?;

        self.store.set(TOKEN_KEY, token)?;
        debug!("token refreshed and persisted");
        Ok(())
    }

    async fn parse_envelope(response: reqwest::Response) -> Result<Envelope, Error> {
        let status = response.status();
        let text = response.text().await.map_err(|e| Error::from_reqwest(&e))?;
        if text.is_empty() {
            // Some endpoints answer bodiless on success; synthesize the envelope.
            return Ok(Envelope {
                success: status.is_success(),
                data: None,
                message: None,
            });
        }
        serde_json::from_str(&text)
            .map_err(|e| Error::parse(format!("invalid response envelope: {e}")))
    }
}
