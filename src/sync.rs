//! Favorites Synchronizer
//!
//! Optimistic favorite toggles plus reconciliation against the favorites store.
//! Local state changes first; each finished mutation invalidates the favorites
//! list, whose next read replaces local membership with the server's.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, CharacterCache};
use crate::models::{CardData, Character};
use crate::store::{store_reconcile_favorites, store_toggle_favorite, AppStore};

/// Load the favorites list on mount and after every invalidation
pub fn use_favorites_sync(ctx: AppContext, store: AppStore) {
    Effect::new(move |_| {
        let version = ctx.favorites_version.get();
        let config = ctx.config();
        spawn_local(async move {
            let records = match api::list_favorites(&config).await {
                Ok(records) => records,
                Err(e) => {
                    log::error!("[SYNC] Failed to load favorites: {}", e);
                    return;
                }
            };

            let current = ctx.favorites_version.get_untracked();
            if !should_apply(version, current, ctx.has_pending_mutations()) {
                log::debug!("[SYNC] Skipping stale favorites list (v{}, now v{})", version, current);
                return;
            }

            log::info!("[SYNC] Loaded {} favorites (v{})", records.len(), version);
            apply_favorites_list(&store, &ctx.characters, records);
        });
    });
}

/// Whether a list read started at version `started` may replace local state
///
/// A newer invalidation or an unfinished toggle will trigger another read.
pub fn should_apply(started: u32, current: u32, pending_mutations: bool) -> bool {
    started == current && !pending_mutations
}

/// Reconcile local favorites with the server list and prime the character cache
pub fn apply_favorites_list(store: &AppStore, characters: &CharacterCache, records: Vec<Character>) {
    store_reconcile_favorites(store, records.iter().map(|c| c.id));
    for character in records {
        characters.seed(character.id, CardData::Person(character));
    }
}

/// Toggle a favorite locally, then upsert or delete it remotely
///
/// A failed request is logged and not rolled back.
pub fn toggle_favorite(ctx: AppContext, store: AppStore, character: Character) {
    let now_favorite = store_toggle_favorite(&store, character.id);
    let config = ctx.config();
    ctx.begin_mutation();

    spawn_local(async move {
        let result = if now_favorite {
            api::add_favorite(&config, &character).await
        } else {
            api::remove_favorite(&config, character.id).await
        };

        match result {
            Ok(()) => log::debug!(
                "[SYNC] {} #{}",
                if now_favorite { "Added" } else { "Removed" },
                character.id
            ),
            Err(e) => log::warn!("[SYNC] Favorite #{} not saved: {}", character.id, e),
        }

        ctx.end_mutation();
        ctx.invalidate_favorites();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_query_cache::QueryState;
    use reactive_stores::Store;

    use crate::store::{AppState, AppStateStoreFields};

    fn character(id: u32, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            eye_color: "blue".to_string(),
            hair_color: "blond".to_string(),
            skin_color: "fair".to_string(),
        }
    }

    #[test]
    fn test_should_apply() {
        assert!(should_apply(3, 3, false));
        // invalidated again while the read was in flight
        assert!(!should_apply(3, 4, false));
        // a toggle has not reached the server yet
        assert!(!should_apply(3, 3, true));
        assert!(!should_apply(3, 4, true));
    }

    #[test]
    fn test_apply_reconciles_and_seeds() {
        let store = Store::new(AppState::new());
        let characters = CharacterCache::new();
        store_toggle_favorite(&store, 7);

        apply_favorites_list(&store, &characters, vec![character(1, "Luke Skywalker"), character(4, "Darth Vader")]);

        assert_eq!(store.favorites().get_untracked().ids(), vec![1, 4]);
        assert_eq!(characters.len(), 2);
        assert_eq!(
            characters.get(&4),
            Some(QueryState::Ready(CardData::Person(character(4, "Darth Vader"))))
        );
    }

    #[test]
    fn test_apply_keeps_existing_cache_entries() {
        let store = Store::new(AppState::new());
        let characters = CharacterCache::new();
        characters.seed(1, CardData::Person(character(1, "Luke Skywalker")));

        apply_favorites_list(&store, &characters, vec![character(1, "Stale Name")]);

        assert_eq!(store.favorites().get_untracked().ids(), vec![1]);
        assert_eq!(
            characters.get(&1),
            Some(QueryState::Ready(CardData::Person(character(1, "Luke Skywalker"))))
        );
    }

    #[test]
    fn test_apply_empty_list_clears_favorites() {
        let store = Store::new(AppState::new());
        let characters = CharacterCache::new();
        store_toggle_favorite(&store, 2);

        apply_favorites_list(&store, &characters, Vec::new());

        assert!(store.favorites().get_untracked().is_empty());
        assert!(characters.is_empty());
    }
}
