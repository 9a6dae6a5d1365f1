//! Favorites synchronizer: a local favorite set kept consistent with the
//! server through optimistic mutation plus server confirmation.
//!
//! State is the favorited recipe ID set paired with the hydrated recipe
//! documents, in 1:1 correspondence. Adding a favorite is a two-phase
//! operation (mark on the server, then hydrate the document); the phase is
//! recorded in a journal so a stalled add is observable and resumable instead
//! of silently leaving the server ahead of the local list.
//!
//! Calls on the same recipe ID serialize through a per-ID async lock;
//! overlapping toggles queue rather than race. `clear_all` fans its removals
//! out concurrently on purpose.

mod normalize;

pub use normalize::{FavoritesShape, NormalizedFavorites, normalize};

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use futures_util::future::join_all;
use ladle_types::RecipeDoc;
use tracing::{debug, warn};

use crate::api::{recipes, users};
use crate::error::Error;
use crate::http::ApiClient;

/// Phase of an in-flight two-phase favorite add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPhase {
    /// The server-side add has been issued but not yet confirmed.
    PendingAdd,
    /// The server-side add is confirmed; the document fetch is outstanding.
    Hydrating,
}

/// Outcome of a `clear_all` batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearSummary {
    pub attempted: usize,
    /// Removals that failed server-side. Local state is empty regardless, so
    /// a non-zero count means local and server favorites may diverge.
    pub failed: usize,
}

#[derive(Default)]
struct State {
    ids: HashSet<String>,
    recipes: Vec<RecipeDoc>,
    journal: HashMap<String, AddPhase>,
}

impl State {
    fn commit(&mut self, id: &str, doc: RecipeDoc) {
        if self.ids.insert(id.to_string()) {
            self.recipes.push(doc);
        }
        self.journal.remove(id);
    }

    fn evict(&mut self, id: &str) {
        self.ids.remove(id);
        self.recipes.retain(|r| r.id() != Some(id));
    }
}

/// Synchronizes the user's favorite recipes with the server.
pub struct FavoritesSync {
    api: Arc<ApiClient>,
    state: Mutex<State>,
    // One async lock per recipe ID so same-ID operations queue.
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl FavoritesSync {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: Mutex::new(State::default()),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Current favorite ID set.
    pub fn ids(&self) -> HashSet<String> {
        self.lock_state().ids.clone()
    }

    /// Current hydrated recipe list.
    pub fn recipes(&self) -> Vec<RecipeDoc> {
        self.lock_state().recipes.clone()
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.lock_state().ids.contains(recipe_id)
    }

    /// In-flight adds whose hydration has not completed.
    pub fn pending(&self) -> Vec<(String, AddPhase)> {
        self.lock_state()
            .journal
            .iter()
            .map(|(id, phase)| (id.clone(), *phase))
            .collect()
    }

    /// Clears local state without touching the server. Used on logout.
    pub fn reset(&self) {
        let mut state = self.lock_state();
        *state = State::default();
    }

    /// Replaces local state with the server's favorites.
    ///
    /// A `success: false` envelope means no favorites; the payload shape is
    /// normalized through [`normalize`].
    pub async fn fetch(&self) -> Result<(), Error> {
        let envelope = users::favorites(&self.api, &[]).await?;

        let normalized = if envelope.success {
            normalize(envelope.data.as_ref())
        } else {
            debug!("favorites fetch reported no favorites");
            NormalizedFavorites {
                shape: FavoritesShape::Unrecognized,
                recipes: Vec::new(),
            }
        };

        let mut state = self.lock_state();
        state.ids = normalized
            .recipes
            .iter()
            .filter_map(|r| r.id().map(str::to_string))
            .collect();
        state.recipes = normalized.recipes;
        Ok(())
    }

    /// Flips the favorite state of one recipe. Returns the new membership.
    ///
    /// Adding runs the two-phase protocol: mark on the server, then hydrate
    /// the full document, and only then mutate local state. A failure after
    /// the server-side add leaves a journal entry for [`resume_pending`].
    ///
    /// [`resume_pending`]: Self::resume_pending
    pub async fn toggle(&self, recipe_id: &str) -> Result<bool, Error> {
        let lock = self.recipe_lock(recipe_id);
        let _guard = lock.lock().await;

        if self.is_favorite(recipe_id) {
            users::remove_favorite(&self.api, recipe_id).await?;
            self.lock_state().evict(recipe_id);
            Ok(false)
        } else {
            self.add_and_hydrate(recipe_id).await?;
            Ok(true)
        }
    }

    /// Removes one favorite. For callers that already know the state.
    pub async fn remove(&self, recipe_id: &str) -> Result<(), Error> {
        let lock = self.recipe_lock(recipe_id);
        let _guard = lock.lock().await;

        users::remove_favorite(&self.api, recipe_id).await?;
        self.lock_state().evict(recipe_id);
        Ok(())
    }

    /// Adds a favorite from a document the caller already holds, skipping
    /// the hydration fetch.
    pub async fn add(&self, recipe: RecipeDoc) -> Result<(), Error> {
        let Some(recipe_id) = recipe.id().map(str::to_string) else {
            return Err(Error::parse("recipe document has no id"));
        };

        let lock = self.recipe_lock(&recipe_id);
        let _guard = lock.lock().await;

        if self.is_favorite(&recipe_id) {
            return Ok(());
        }
        users::add_favorite(&self.api, &recipe_id).await?;
        self.lock_state().commit(&recipe_id, recipe);
        Ok(())
    }

    /// Retries every stalled add in the journal. Returns the number of
    /// entries committed; entries that fail again stay in the journal.
    pub async fn resume_pending(&self) -> usize {
        let stalled = self.pending();
        let mut committed = 0;
        for (recipe_id, phase) in stalled {
            let lock = self.recipe_lock(&recipe_id);
            let _guard = lock.lock().await;

            // The entry may have been committed or cleared meanwhile.
            if !self.lock_state().journal.contains_key(&recipe_id) {
                continue;
            }

            let result = match phase {
                AddPhase::PendingAdd => self.add_and_hydrate(&recipe_id).await,
                AddPhase::Hydrating => self.hydrate(&recipe_id).await,
            };
            match result {
                Ok(()) => committed += 1,
                Err(e) => {
                    warn!(recipe_id = %recipe_id, error = %e, "resume of stalled favorite failed");
                }
            }
        }
        committed
    }

    /// Removes every favorite, one concurrent request per ID.
    ///
    /// Individual failures are logged and counted but never abort the batch;
    /// local state is reset to empty unconditionally afterwards.
    pub async fn clear_all(&self) -> ClearSummary {
        let ids: Vec<String> = self.lock_state().ids.iter().cloned().collect();
        let attempted = ids.len();

        let removals = ids.iter().map(|id| {
            let api = Arc::clone(&self.api);
            async move { (id.clone(), users::remove_favorite(&api, id).await) }
        });

        let mut failed = 0;
        for (id, result) in join_all(removals).await {
            if let Err(e) = result {
                warn!(recipe_id = %id, error = %e, "favorite removal failed during clear");
                failed += 1;
            }
        }

        self.reset();
        if failed > 0 {
            warn!(failed, "clear_all masked failures; server favorites may be non-empty");
        }
        ClearSummary { attempted, failed }
    }

    /// Two-phase add: journal `PendingAdd`, mark on the server, journal
    /// `Hydrating`, fetch the document, commit.
    async fn add_and_hydrate(&self, recipe_id: &str) -> Result<(), Error> {
        self.lock_state()
            .journal
            .insert(recipe_id.to_string(), AddPhase::PendingAdd);

        if let Err(e) = users::add_favorite(&self.api, recipe_id).await {
            // The server never confirmed the add; nothing to resume.
            self.lock_state().journal.remove(recipe_id);
            return Err(e);
        }

        self.lock_state()
            .journal
            .insert(recipe_id.to_string(), AddPhase::Hydrating);
        self.hydrate(recipe_id).await
    }

    /// Second phase: fetch the full document and commit both collections.
    /// On failure the `Hydrating` journal entry stays put.
    async fn hydrate(&self, recipe_id: &str) -> Result<(), Error> {
        let envelope = recipes::get(&self.api, recipe_id).await?;
        let doc = envelope
            .into_data("recipe fetch failed")
            .map(RecipeDoc::from_value)
            .map_err(Error::parse)?;

        self.lock_state().commit(recipe_id, doc);
        Ok(())
    }

    fn recipe_lock(&self, recipe_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().expect("locks poisoned");
        Arc::clone(locks.entry(recipe_id.to_string()).or_default())
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("state poisoned")
    }
}
