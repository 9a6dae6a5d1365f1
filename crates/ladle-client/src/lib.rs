//! Client core for the ladle recipe service.
//!
//! Owns the session/token lifecycle and local favorites synchronization
//! against the server, plus thin facades over the domain endpoints. The
//! terminal frontend lives in `ladle-cli`; everything here is UI-agnostic.

pub mod api;
pub mod config;
mod context;
mod error;
pub mod favorites;
mod http;
pub mod session;
pub mod store;

pub use config::Config;
pub use context::AppContext;
pub use error::{Error, ErrorKind};
pub use favorites::{AddPhase, ClearSummary, FavoritesShape, FavoritesSync};
pub use http::ApiClient;
pub use session::{AuthOutcome, SessionManager, SessionState};
pub use store::{FileStore, KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};
