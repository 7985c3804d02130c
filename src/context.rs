//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_query_cache::{QueryCache, QueryState};

use crate::api;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::CardData;

/// Character records by SWAPI id
pub type CharacterCache = QueryCache<u32, CardData, ApiError>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Fetched (or seeded) character records
    pub characters: CharacterCache,
    /// Endpoints
    config: StoredValue<ApiConfig>,
    /// Bumped to force a reload of the favorites list - read
    pub favorites_version: ReadSignal<u32>,
    /// Bumped to force a reload of the favorites list - write
    set_favorites_version: WriteSignal<u32>,
    /// Favorite mutations still waiting on the server
    pending_mutations: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: ApiConfig, favorites_version: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            characters: CharacterCache::new(),
            config: StoredValue::new(config),
            favorites_version: favorites_version.0,
            set_favorites_version: favorites_version.1,
            pending_mutations: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// Cached state for character `id`, fetching it from SWAPI on first use
    pub fn character(&self, id: u32) -> ArcRwSignal<QueryState<CardData, ApiError>> {
        let config = self.config();
        self.characters.query(id, move |id| async move {
            api::fetch_person(&config, id)
                .await
                .inspect_err(|e| log::error!("[SWAPI] Failed to fetch #{}: {}", id, e))
        })
    }

    /// Invalidate the favorites list so it is read again from the server
    pub fn invalidate_favorites(&self) {
        self.set_favorites_version.update(|v| *v += 1);
    }

    pub fn begin_mutation(&self) {
        self.pending_mutations.update_value(|n| *n += 1);
    }

    pub fn end_mutation(&self) {
        self.pending_mutations.update_value(|n| *n = n.saturating_sub(1));
    }

    /// True while any favorite add/remove is in flight
    pub fn has_pending_mutations(&self) -> bool {
        self.pending_mutations.get_value() > 0
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
