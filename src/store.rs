//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{clamp_count, DEFAULT_CARDS};
use crate::favorites::FavoritesSet;

/// Display state plus the local favorites set
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Number of cards in the all-items view, always within [1, 50]
    pub count: usize,
    /// Favorites view instead of all items
    pub show_favorites: bool,
    /// Name filter
    pub query: String,
    /// Favorited ids, reconciled with the favorites store
    pub favorites: FavoritesSet,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            count: DEFAULT_CARDS,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Set the card count, clamped
pub fn store_set_count(store: &AppStore, count: usize) {
    store.count().set(clamp_count(count));
}

/// Flip a favorite locally, returning whether it is now a favorite
pub fn store_toggle_favorite(store: &AppStore, id: u32) -> bool {
    store.favorites().write().toggle(id)
}

/// Replace local favorites with the server's ids
pub fn store_reconcile_favorites(store: &AppStore, server_ids: impl IntoIterator<Item = u32>) {
    store.favorites().write().reconcile(server_ids);
}
