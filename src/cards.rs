//! Card List Utilities
//!
//! Which character ids the card list renders.

use crate::config::clamp_count;
use crate::favorites::FavoritesSet;

/// Ids to render, in display order
///
/// All-items view shows SWAPI ids `1..=count` (count clamped);
/// favorites view shows favorite ids ascending.
pub fn visible_ids(count: usize, show_favorites: bool, favorites: &FavoritesSet) -> Vec<u32> {
    if show_favorites {
        favorites.ids()
    } else {
        (1..=clamp_count(count) as u32).collect()
    }
}
