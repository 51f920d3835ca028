//! Server-state cache
//!
//! A small keyed cache with an optional stale time. Entries are filled on a
//! successful fetch and dropped explicitly when a mutation makes them
//! outdated.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: Instant,
}

/// Cache of fetched values keyed by query
#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    /// `None` = fresh until invalidated
    stale_after: Option<Duration>,
}

impl<K, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            stale_after: None,
        }
    }
}

impl<K: Eq + Hash, V: Clone> QueryCache<K, V> {
    /// Cache whose entries never go stale on their own
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache whose entries go stale `stale_after` after being fetched
    pub fn with_stale_time(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after: Some(stale_after),
        }
    }

    /// Fresh value for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    fn get_at(&self, key: &K, now: Instant) -> Option<&V> {
        let entry = self.entries.get(key)?;
        let fresh = self
            .stale_after
            .is_none_or(|ttl| now.saturating_duration_since(entry.fetched_at) < ttl);
        fresh.then_some(&entry.value)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(
            key,
            Entry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Cached value if fresh, otherwise the result of `fetch`
    ///
    /// A successful fetch is stored; a failed one leaves the cache as it was.
    pub fn get_or_fetch<E>(
        &mut self,
        key: K,
        fetch: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(&key) {
            return Ok(value.clone());
        }
        let value = fetch()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_get_or_fetch_caches_success() {
        let mut cache: QueryCache<u8, String> = QueryCache::new();
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            Ok::<_, ()>("posts".to_string())
        };

        assert_eq!(cache.get_or_fetch(1, fetch), Ok("posts".to_string()));
        assert_eq!(cache.get_or_fetch(1, fetch), Ok("posts".to_string()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failed_fetch_leaves_cache_untouched() {
        let mut cache: QueryCache<u8, u32> = QueryCache::new();
        cache.insert(2, 20);

        let result = cache.get_or_fetch(1, || Err::<u32, _>("boom"));
        assert_eq!(result, Err("boom"));
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&20));
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let mut cache: QueryCache<&str, u32> = QueryCache::new();
        cache.insert("a", 1);
        cache.insert("b", 2);

        cache.invalidate(&"a");
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));

        cache.invalidate_all();
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_fetch("a", || Ok::<_, ()>(10)), Ok(10));
    }

    #[test]
    fn test_stale_entries_are_refetched() {
        let mut cache: QueryCache<bool, u32> = QueryCache::with_stale_time(Duration::ZERO);
        cache.insert(true, 1);
        assert_eq!(cache.get(&true), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_or_fetch(true, || Ok::<_, ()>(2)), Ok(2));
    }

    #[test]
    fn test_fresh_within_stale_time() {
        let mut cache: QueryCache<bool, u32> =
            QueryCache::with_stale_time(Duration::from_secs(300));
        cache.insert(true, 1);
        let now = Instant::now();
        assert_eq!(cache.get_at(&true, now), Some(&1));
        assert_eq!(cache.get_at(&true, now + Duration::from_secs(301)), None);
    }
}
