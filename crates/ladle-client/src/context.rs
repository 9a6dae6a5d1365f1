//! Application context: one explicit object wiring config, storage, the HTTP
//! client, the session manager, and the favorites synchronizer.
//!
//! Single-instance-per-app-run semantics without hidden globals — construct
//! one `AppContext` at startup and pass it to whatever needs it.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::favorites::FavoritesSync;
use crate::http::ApiClient;
use crate::session::{SessionManager, SessionState};
use crate::store::{FileStore, KeyValueStore};

pub struct AppContext {
    pub config: Config,
    pub api: Arc<ApiClient>,
    pub session: SessionManager,
    pub favorites: FavoritesSync,
}

impl AppContext {
    /// Wires the context from a config and a storage backend, and hydrates
    /// the session from storage.
    pub fn init(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self, Error> {
        let api = Arc::new(ApiClient::new(&config, Arc::clone(&store))?);
        let session = SessionManager::new(Arc::clone(&api), store);
        let favorites = FavoritesSync::new(Arc::clone(&api));
        session.hydrate();

        Ok(Self {
            config,
            api,
            session,
            favorites,
        })
    }

    /// Standard wiring: config from `${LADLE_HOME}/config.toml` and the
    /// environment, credentials in the default file store.
    pub fn from_env() -> Result<Self, Error> {
        let config = Config::load()?;
        Self::init(config, Arc::new(FileStore::at_default_path()))
    }

    /// Ends the session and drops local favorites state with it.
    pub fn logout(&self) -> SessionState {
        self.session.logout();
        self.favorites.reset();
        self.session.state()
    }
}
