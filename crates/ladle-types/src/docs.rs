//! Opaque server-owned documents.
//!
//! Recipes, meal plans, and users are defined by the server; the client passes
//! them through untyped. The newtypes here exist so the rest of the codebase
//! can't confuse one document kind for another, and so id extraction lives in
//! one place (the API emits `_id` for Mongo-style documents but `id` has been
//! observed on some endpoints).

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! opaque_doc {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Value);

        impl $name {
            /// Wraps a raw JSON document.
            pub fn from_value(value: Value) -> Self {
                Self(value)
            }

            /// Returns the underlying JSON.
            pub fn as_value(&self) -> &Value {
                &self.0
            }

            /// Consumes the wrapper, yielding the raw JSON.
            pub fn into_value(self) -> Value {
                self.0
            }

            /// Extracts the document id, probing `_id` then `id`.
            pub fn id(&self) -> Option<&str> {
                self.0
                    .get("_id")
                    .and_then(Value::as_str)
                    .or_else(|| self.0.get("id").and_then(Value::as_str))
            }

            /// Returns a string field by name, when present.
            pub fn str_field(&self, name: &str) -> Option<&str> {
                self.0.get(name).and_then(Value::as_str)
            }
        }
    };
}

opaque_doc! {
    /// A recipe document as returned by `/recipes/*`.
    RecipeDoc
}

opaque_doc! {
    /// A meal plan document as returned by `/meal-plans/*`.
    MealPlanDoc
}

opaque_doc! {
    /// A user document as returned by the auth and `/users/*` endpoints.
    UserDoc
}

impl UserDoc {
    /// Shallow-merges the fields of `partial` over this user.
    ///
    /// Non-object partials are ignored; profile updates always carry an
    /// object of changed fields.
    pub fn merge(&mut self, partial: &Value) {
        let Some(updates) = partial.as_object() else {
            return;
        };
        if let Value::Object(fields) = &mut self.0 {
            for (key, value) in updates {
                fields.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Test: id extraction prefers `_id` and falls back to `id`.
    #[test]
    fn test_doc_id_extraction() {
        let mongo = RecipeDoc::from_value(json!({"_id": "r1", "name": "Pesto"}));
        assert_eq!(mongo.id(), Some("r1"));

        let plain = RecipeDoc::from_value(json!({"id": "r2"}));
        assert_eq!(plain.id(), Some("r2"));

        let both = RecipeDoc::from_value(json!({"_id": "r3", "id": "other"}));
        assert_eq!(both.id(), Some("r3"));

        let neither = RecipeDoc::from_value(json!({"name": "anonymous"}));
        assert_eq!(neither.id(), None);
    }

    /// Test: user merge overwrites existing fields and adds new ones.
    #[test]
    fn test_user_merge() {
        let mut user = UserDoc::from_value(json!({"_id": "u1", "name": "Ana", "bio": "cook"}));
        user.merge(&json!({"name": "Ana B.", "avatar": "a.png"}));

        assert_eq!(user.str_field("name"), Some("Ana B."));
        assert_eq!(user.str_field("bio"), Some("cook"));
        assert_eq!(user.str_field("avatar"), Some("a.png"));
        assert_eq!(user.id(), Some("u1"));
    }

    /// Test: merging a non-object partial is a no-op.
    #[test]
    fn test_user_merge_ignores_non_object() {
        let mut user = UserDoc::from_value(json!({"name": "Ana"}));
        user.merge(&json!("not an object"));
        assert_eq!(user.str_field("name"), Some("Ana"));
    }

    /// Test: documents serialize transparently (no wrapper layer).
    #[test]
    fn test_transparent_serialization() {
        let doc = RecipeDoc::from_value(json!({"_id": "r1"}));
        let serialized = serde_json::to_value(&doc).unwrap();
        assert_eq!(serialized, json!({"_id": "r1"}));
    }
}
