//! Explicit memoization for loader results.
//!
//! Entries live until they expire (optional time-to-live), are invalidated, or
//! the whole cache is cleared. Values are shared as `Arc<V>`.

use moka::sync::Cache as MokaCache;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

pub struct Cache<K, V> {
    inner: MokaCache<K, Arc<V>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// `ttl = None` keeps entries until they are invalidated.
    pub fn new(ttl: Option<Duration>) -> Self {
        let mut builder = MokaCache::<K, Arc<V>>::builder();
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner: builder.build(),
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.inner.policy().time_to_live()
    }

    /// Cached value for `key` if present and not expired.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.inner.get(key)
    }

    /// Return the cached value, or run `load` and store its result.
    ///
    /// Errors from `load` are returned as-is and nothing is cached.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, load: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(hit) = self.inner.get(&key) {
            log::debug!("cache hit");
            return Ok(hit);
        }
        log::debug!("cache miss");
        let value = Arc::new(load()?);
        self.inner.insert(key, Arc::clone(&value));
        Ok(value)
    }

    /// Drop one entry; returns whether a live entry existed.
    pub fn invalidate(&self, key: &K) -> bool {
        self.inner.remove(key).is_some()
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
        self.inner.run_pending_tasks();
    }

    /// Number of live entries; expired and invalidated ones are not counted.
    pub fn len(&self) -> usize {
        self.inner.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(None)
    }
}
