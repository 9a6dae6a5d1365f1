//! Shared wire and domain types for the ladle recipe-service client.
//!
//! The server owns the shape of recipes, meal plans, and users; this crate
//! treats them as opaque JSON documents behind thin newtypes and only
//! interprets the handful of fields the client actually needs (document ids,
//! the response envelope, the auth token).

mod docs;
mod envelope;

pub use docs::{MealPlanDoc, RecipeDoc, UserDoc};
pub use envelope::Envelope;

use serde::{Deserialize, Serialize};

/// In-memory session state: the bearer token and the signed-in user.
///
/// Both fields are `None` for an anonymous session. They are always set and
/// cleared together by the session manager; a half-populated session only
/// exists transiently inside `hydrate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserDoc>,
}

impl Session {
    /// Returns true when both a token and a user are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Clears both fields, returning the session to anonymous.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: a session is authenticated only with both token and user.
    #[test]
    fn test_session_authenticated() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());

        session.token = Some("tok".to_string());
        assert!(!session.is_authenticated());

        session.user = Some(UserDoc::from_value(serde_json::json!({"name": "Ana"})));
        assert!(session.is_authenticated());

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.token.is_none());
        assert!(session.user.is_none());
    }
}
