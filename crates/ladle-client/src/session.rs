//! Session lifecycle: hydrate, login, register, logout, profile updates.
//!
//! The manager owns the in-memory `token`/`user` pair and keeps it mirrored
//! into the key-value store. Login and register never return `Err` — every
//! failure, transport included, is folded into [`AuthOutcome::Failure`] with
//! a displayable message so callers can show it and move on.

use std::sync::{Arc, Mutex};

use ladle_types::{Session, UserDoc};
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::auth;
use crate::error::Error;
use crate::http::ApiClient;
use crate::store::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// Observable session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Before `hydrate` has been called.
    Uninitialized,
    /// `hydrate` is reading from storage.
    Loading,
    /// Token and user present.
    Authenticated,
    /// No session.
    Anonymous,
}

/// Result of a login or register attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure { message: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success)
    }

    fn failure(message: impl Into<String>) -> Self {
        AuthOutcome::Failure {
            message: message.into(),
        }
    }
}

struct Inner {
    state: SessionState,
    session: Session,
}

/// Owns the in-memory session, mirrored into persistent storage.
pub struct SessionManager {
    api: Arc<ApiClient>,
    store: Arc<dyn KeyValueStore>,
    inner: Mutex<Inner>,
}

impl SessionManager {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            api,
            store,
            inner: Mutex::new(Inner {
                state: SessionState::Uninitialized,
                session: Session::default(),
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.lock().state
    }

    /// Returns a snapshot of the current session.
    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().session.token.clone()
    }

    pub fn user(&self) -> Option<UserDoc> {
        self.lock().session.user.clone()
    }

    /// Rebuilds the session from storage at startup.
    ///
    /// Authenticated only when both entries are present and the user JSON
    /// parses; any storage failure is logged and treated as no session.
    pub fn hydrate(&self) -> SessionState {
        self.lock().state = SessionState::Loading;

        let restored = match (self.store.get(TOKEN_KEY), self.store.get(USER_KEY)) {
            (Ok(Some(token)), Ok(Some(user_json))) => {
                match serde_json::from_str::<UserDoc>(&user_json) {
                    Ok(user) => Some((token, user)),
                    Err(e) => {
                        warn!(error = %e, "stored user is unreadable, starting anonymous");
                        None
                    }
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "session hydration failed, starting anonymous");
                None
            }
            _ => None,
        };

        let mut inner = self.lock();
        match restored {
            Some((token, user)) => {
                inner.session.token = Some(token);
                inner.session.user = Some(user);
                inner.state = SessionState::Authenticated;
            }
            None => {
                inner.session.clear();
                inner.state = SessionState::Anonymous;
            }
        }
        inner.state
    }

    /// Authenticates with email and password.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let result = auth::login(&self.api, email, password).await;
        self.complete_auth(result, "Login failed")
    }

    /// Creates an account; on success the session is established immediately,
    /// symmetric to `login`.
    pub async fn register(&self, user_data: &Value) -> AuthOutcome {
        let result = auth::register(&self.api, user_data).await;
        self.complete_auth(result, "Registration failed")
    }

    /// Shared tail of login/register: split the response into token and user
    /// fields, persist both, and update in-memory state.
    fn complete_auth(
        &self,
        result: Result<ladle_types::Envelope, Error>,
        fallback: &str,
    ) -> AuthOutcome {
        let envelope = match result {
            Ok(envelope) => envelope,
            Err(e) => {
                debug!(error = %e, "auth request failed");
                return AuthOutcome::failure(e.message);
            }
        };

        let data = match envelope.into_data(fallback) {
            Ok(Value::Object(data)) => data,
            Ok(_) => return AuthOutcome::failure(fallback),
            Err(message) => return AuthOutcome::failure(message),
        };

        // The auth endpoints return one flat object: the token plus the user
        // fields. Split it.
        let mut data = data;
        let Some(token) = data.remove("token").and_then(|t| match t {
            Value::String(s) => Some(s),
            _ => None,
        }) else {
            return AuthOutcome::failure(fallback);
        };
        let user = UserDoc::from_value(Value::Object(data));

        if let Err(e) = self.persist(&token, &user) {
            return AuthOutcome::failure(e.message);
        }

        let mut inner = self.lock();
        inner.session.token = Some(token);
        inner.session.user = Some(user);
        inner.state = SessionState::Authenticated;
        AuthOutcome::Success
    }

    /// Ends the session. In-memory state is cleared first so callers observe
    /// `Anonymous` immediately; storage removal failures are logged and
    /// swallowed, never blocking the caller.
    pub fn logout(&self) {
        {
            let mut inner = self.lock();
            inner.session.clear();
            inner.state = SessionState::Anonymous;
        }

        if let Err(e) = self.store.remove_many(&[TOKEN_KEY, USER_KEY]) {
            warn!(error = %e, "failed to clear persisted session");
        }
    }

    /// Merges partial fields into the in-memory user and re-persists the
    /// merged object. Does not call the server; callers pair this with
    /// `users::update_profile`.
    pub fn update_user(&self, partial: &Value) -> Result<(), Error> {
        let merged = {
            let mut inner = self.lock();
            let Some(user) = inner.session.user.as_mut() else {
                return Err(Error::storage("no user in session"));
            };
            user.merge(partial);
            user.clone()
        };

        let serialized = serde_json::to_string(merged.as_value())
            .map_err(|e| Error::storage(format!("failed to serialize user: {e}")))?;
        self.store.set(USER_KEY, &serialized)
    }

    fn persist(&self, token: &str, user: &UserDoc) -> Result<(), Error> {
        let serialized = serde_json::to_string(user.as_value())
            .map_err(|e| Error::storage(format!("failed to serialize user: {e}")))?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &serialized)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("session lock")
    }
}
