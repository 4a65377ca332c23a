//! Memoizing cache with per-key locking

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use log::trace;
use parking_lot::Mutex;

/// Keyed cache that computes each value at most once
///
/// Locking is two-tier:
/// - `item_locks` (the table lock) is held only to look up or create the
///   lock for a key, never while a loader runs
/// - each key's item lock serializes loaders for that key alone, so
///   different keys load in parallel
///
/// Values live in a sharded `DashMap`, so cache hits do not touch either
/// tier. Entries are never evicted; the cache lives as long as its owner.
pub struct CachingSupplier<K, V> {
    values: DashMap<K, V>,
    item_locks: Mutex<HashMap<K, Arc<Mutex<()>>>>,
}

impl<K, V> CachingSupplier<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
            item_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, running `loader` if there is none
    ///
    /// Concurrent callers for the same uncached key block until the first
    /// one finishes, then share its value; `loader` runs once. If `loader`
    /// fails (or panics) the error reaches only the calling thread and the
    /// key stays uncached, so the next caller retries.
    pub fn get_or_compute<E, F>(&self, key: K, loader: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            trace!("Cache hit for {:?}", key);
            return Ok(value);
        }

        let item_lock = self.item_lock(&key);
        let _loading = item_lock.lock();

        // Another caller may have loaded it while we waited
        if let Some(value) = self.get(&key) {
            trace!("Cache filled by concurrent loader for {:?}", key);
            return Ok(value);
        }

        let value = loader()?;
        self.values.insert(key, value.clone());
        Ok(value)
    }

    /// Cached value for `key`, without loading
    pub fn get(&self, key: &K) -> Option<V> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// Number of cached values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn item_lock(&self, key: &K) -> Arc<Mutex<()>> {
        let mut locks = self.item_locks.lock();
        Arc::clone(locks.entry(key.clone()).or_default())
    }
}

impl<K, V> Default for CachingSupplier<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug + Eq + Hash, V> fmt::Debug for CachingSupplier<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachingSupplier")
            .field("cached", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_loads_once_then_hits() {
        let cache: CachingSupplier<&str, u32> = CachingSupplier::new();
        let calls = Cell::new(0);

        let load = || -> Result<u32, String> {
            calls.set(calls.get() + 1);
            Ok(42)
        };

        assert_eq!(cache.get_or_compute("a", load), Ok(42));
        assert_eq!(cache.get_or_compute("a", load), Ok(42));
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.get(&"a"), Some(42));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let cache: CachingSupplier<u32, String> = CachingSupplier::default();

        let a = cache.get_or_compute(1, || Ok::<_, ()>("one".to_string()));
        let b = cache.get_or_compute(2, || Ok::<_, ()>("two".to_string()));

        assert_eq!(a, Ok("one".to_string()));
        assert_eq!(b, Ok("two".to_string()));
        assert!(cache.contains_key(&1));
        assert!(cache.contains_key(&2));
        assert!(!cache.contains_key(&3));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let cache: CachingSupplier<&str, u32> = CachingSupplier::new();

        let failed = cache.get_or_compute("k", || Err("source down".to_string()));
        assert_eq!(failed, Err("source down".to_string()));
        assert!(cache.is_empty());

        let retried = cache.get_or_compute("k", || Ok::<_, String>(7));
        assert_eq!(retried, Ok(7));
        assert_eq!(cache.get(&"k"), Some(7));
    }

    #[test]
    fn test_panicking_loader_releases_item_lock() {
        let cache: Arc<CachingSupplier<&str, u32>> = Arc::new(CachingSupplier::new());

        let worker = Arc::clone(&cache);
        let outcome = std::thread::spawn(move || {
            let _ = worker.get_or_compute("k", || -> Result<u32, ()> { panic!("loader blew up") });
        })
        .join();
        assert!(outcome.is_err());
        assert!(!cache.contains_key(&"k"));

        assert_eq!(cache.get_or_compute("k", || Ok::<_, ()>(1)), Ok(1));
    }
}
