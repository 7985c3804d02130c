//! Leptos Query Cache
//!
//! Keyed fetch cache for Leptos CSR apps.
//! The first query for a key spawns the fetch, every later query for the
//! same key (in flight or finished) shares the same reactive entry.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// State of a single cached query
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<V, E> {
    Loading,
    Ready(V),
    Failed(E),
}

impl<V, E> QueryState<V, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn ready(&self) -> Option<&V> {
        match self {
            QueryState::Ready(v) => Some(v),
            _ => None,
        }
    }
}

impl<V, E> From<Result<V, E>> for QueryState<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(v) => QueryState::Ready(v),
            Err(e) => QueryState::Failed(e),
        }
    }
}

type Entries<K, V, E> = HashMap<K, ArcRwSignal<QueryState<V, E>>>;

/// Keyed query cache
///
/// Entries are reference-counted signals, so they survive the component
/// that first asked for them. Nothing is ever evicted.
pub struct QueryCache<K, V, E>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    entries: StoredValue<Entries<K, V, E>>,
}

impl<K, V, E> Clone for QueryCache<K, V, E>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, E> Copy for QueryCache<K, V, E>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
}

impl<K, V, E> QueryCache<K, V, E>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: StoredValue::new(HashMap::new()),
        }
    }

    /// Get the shared state for `key`, fetching it on first use.
    ///
    /// `fetcher` is only called when the key has never been queried or seeded.
    pub fn query<F, Fut>(&self, key: K, fetcher: F) -> ArcRwSignal<QueryState<V, E>>
    where
        F: FnOnce(K) -> Fut,
        Fut: Future<Output = Result<V, E>> + 'static,
    {
        if let Some(existing) = self.entry(&key) {
            return existing;
        }

        let state = ArcRwSignal::new(QueryState::Loading);
        self.entries
            .update_value(|entries| { entries.insert(key.clone(), state.clone()); });

        let fut = fetcher(key);
        let target = state.clone();
        spawn_local(async move {
            target.set(fut.await.into());
        });

        state
    }

    /// Insert a ready value unless the key is already cached or in flight.
    ///
    /// Returns true if the value was inserted.
    pub fn seed(&self, key: K, value: V) -> bool {
        if self.entry(&key).is_some() {
            return false;
        }
        self.entries.update_value(|entries| {
            entries.insert(key, ArcRwSignal::new(QueryState::Ready(value)));
        });
        true
    }

    /// Snapshot of the current state for `key` (untracked)
    pub fn get(&self, key: &K) -> Option<QueryState<V, E>> {
        self.entry(key).map(|state| state.get_untracked())
    }

    pub fn len(&self) -> usize {
        self.entries.with_value(|entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, key: &K) -> Option<ArcRwSignal<QueryState<V, E>>> {
        self.entries.with_value(|entries| entries.get(key).cloned())
    }
}

impl<K, V, E> Default for QueryCache<K, V, E>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use std::future::{pending, Pending, Ready};

    type Cache = QueryCache<u32, String, String>;

    fn never_called(_: u32) -> Ready<Result<String, String>> {
        panic!("fetcher must not run for a cached key");
    }

    #[test]
    fn test_seed_then_query_reuses_entry() {
        let cache = Cache::new();
        assert!(cache.seed(1, "Luke Skywalker".to_string()));

        let state = cache.query(1, never_called);
        assert_eq!(state.get_untracked(), QueryState::Ready("Luke Skywalker".to_string()));
        assert_eq!(cache.len(), 1);
    }

    fn in_flight(_: u32) -> Pending<Result<String, String>> {
        pending()
    }

    #[test]
    fn test_query_while_in_flight_shares_entry() {
        let _ = Executor::init_futures_executor();
        let cache = Cache::new();

        let first = cache.query(2, in_flight);
        let second = cache.query(2, never_called);

        assert_eq!(cache.len(), 1);
        assert!(first.get_untracked().is_loading());
        assert!(second.get_untracked().is_loading());

        // Both handles point at the same entry
        first.set(QueryState::Ready("C-3PO".to_string()));
        assert_eq!(second.get_untracked(), QueryState::Ready("C-3PO".to_string()));
        assert_eq!(cache.get(&2), Some(QueryState::Ready("C-3PO".to_string())));
    }

    #[test]
    fn test_distinct_keys_get_distinct_entries() {
        let _ = Executor::init_futures_executor();
        let cache = Cache::new();

        let third = cache.query(3, in_flight);
        cache.query(4, in_flight);
        assert_eq!(cache.len(), 2);

        third.set(QueryState::Failed("Error.".to_string()));
        assert_eq!(cache.get(&4), Some(QueryState::Loading));
    }

    #[test]
    fn test_seed_does_not_overwrite() {
        let cache = Cache::new();
        assert!(cache.seed(4, "Darth Vader".to_string()));
        assert!(!cache.seed(4, "Anakin".to_string()));
        assert_eq!(cache.get(&4), Some(QueryState::Ready("Darth Vader".to_string())));
    }

    #[test]
    fn test_get_missing_key() {
        let cache = Cache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&9), None);
    }

    #[test]
    fn test_state_from_result() {
        let ok: QueryState<u32, String> = Ok::<u32, String>(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let failed: QueryState<u32, String> = Err::<u32, String>("boom".into()).into();
        assert_eq!(failed, QueryState::Failed("boom".to_string()));
        assert!(!failed.is_loading());
    }
}
