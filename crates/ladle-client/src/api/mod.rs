//! Thin request facades over the recipe service endpoints.
//!
//! Each function issues one request through the shared [`ApiClient`] and
//! returns the raw envelope; payload interpretation stays with the caller.
//! These are deliberately free of logic — the session manager and favorites
//! synchronizer build on them.
//!
//! [`ApiClient`]: crate::http::ApiClient

pub mod auth;
pub mod meal_plans;
pub mod recipes;
pub mod users;

/// Query parameter list, passed through to the server verbatim.
pub type Query = [(String, String)];
