//! Bounded, time-expiring cache store.
//!
//! [`ExpiringCache`] enforces two independent limits from its
//! [`CacheConfig`](crate::CacheConfig):
//!
//! - **Capacity**: an insert that would exceed `max_items` first purges
//!   expired entries and then evicts the least-recently-accessed entry.
//! - **Expiry**: an entry idle for longer than the configured expiry is never
//!   returned as a hit. Expiry is checked lazily on access; every access
//!   refreshes the entry's timer, so last-access order is exactly LRU order.
//!
//! The store is not internally synchronized. The factory serializes all
//! access through its own lock.

use crate::cache::{Cache, CacheConfig};
use hashbrown::HashMap;
use std::time::{Duration, Instant};
use tracing::trace;

struct Entry<T> {
    value: T,
    last_access: Instant,
}

/// A bounded key-value store whose entries expire after an idle period.
pub struct ExpiringCache<T> {
    max_items: usize,
    expiry: Duration,
    entries: HashMap<String, Entry<T>>,
}

impl<T> ExpiringCache<T> {
    /// Builds a store from the given configuration, consuming it.
    pub fn new(config: CacheConfig) -> Self {
        let max_items = usize::try_from(config.max_items()).unwrap_or(usize::MAX);
        ExpiringCache {
            max_items,
            expiry: config.expiry(),
            entries: HashMap::with_capacity(max_items.min(64)),
        }
    }

    /// The maximum number of entries the store will hold.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// The idle period after which an entry expires.
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// The number of entries currently stored, including any that have
    /// expired but not yet been purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makes room for one more entry: purges expired entries first, then
    /// falls back to evicting the least-recently-accessed one.
    fn make_room(&mut self, now: Instant) {
        if self.entries.len() < self.max_items {
            return;
        }
        let expiry = self.expiry;
        self.entries.retain(|key, entry| {
            let keep = now.duration_since(entry.last_access) <= expiry;
            if !keep {
                trace!(key = key.as_str(), "evicting expired entry");
            }
            keep
        });
        while self.entries.len() >= self.max_items {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    trace!(key = key.as_str(), "evicting least-recently-used entry");
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }
}

impl<T: Clone> Cache<T> for ExpiringCache<T> {
    fn get<F: FnOnce() -> T>(&mut self, key: &str, build: F) -> T {
        let now = Instant::now();
        if let Some(entry) = self.entries.get_mut(key) {
            if now.duration_since(entry.last_access) <= self.expiry {
                entry.last_access = now;
                trace!(key, "cache hit");
                return entry.value.clone();
            }
            trace!(key, "cache entry expired");
            self.entries.remove(key);
        }
        let value = build();
        self.make_room(now);
        self.entries.insert(
            key.to_owned(),
            Entry {
                value: value.clone(),
                last_access: now,
            },
        );
        trace!(key, len = self.entries.len(), "built and stored entry");
        value
    }

    fn is_initialized(&self) -> bool {
        !self.entries.is_empty()
    }

    fn clean(&mut self) {
        self.entries.clear();
    }
}

impl<T> core::fmt::Debug for ExpiringCache<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("max_items", &self.max_items)
            .field("expiry", &self.expiry)
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TimeUnit;
    use std::thread::sleep;

    fn make_cache(max_items: u64) -> ExpiringCache<i32> {
        let mut config = CacheConfig::default();
        config.set_max_items(max_items).unwrap();
        ExpiringCache::new(config)
    }

    fn make_expiring_cache(max_items: u64, expiry_ms: u64) -> ExpiringCache<i32> {
        let mut config = CacheConfig::default();
        config
            .set_max_items(max_items)
            .unwrap()
            .set_expiration_time(expiry_ms)
            .unwrap()
            .set_expiration_time_unit(TimeUnit::Millis);
        ExpiringCache::new(config)
    }

    #[test]
    fn test_get_memoizes() {
        let mut cache = make_cache(10);
        let mut builds = 0;
        for _ in 0..3 {
            let value = cache.get("2-HALF_EVEN", || {
                builds += 1;
                2
            });
            assert_eq!(value, 2);
        }
        assert_eq!(builds, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_is_initialized_after_first_entry() {
        let mut cache = make_cache(10);
        assert!(!cache.is_initialized());
        cache.get("a", || 1);
        assert!(cache.is_initialized());
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let mut cache = make_cache(2);
        cache.get("a", || 1);
        cache.get("b", || 2);
        // Touch "a" so "b" becomes the LRU entry.
        cache.get("a", || 0);
        cache.get("c", || 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a", || -1), 1);
        assert_eq!(cache.get("c", || -1), 3);
        // "b" was evicted and is rebuilt.
        assert_eq!(cache.get("b", || -1), -1);
    }

    #[test]
    fn test_expired_entry_is_rebuilt() {
        let mut cache = make_expiring_cache(10, 30);
        assert_eq!(cache.get("a", || 1), 1);
        sleep(Duration::from_millis(80));
        assert_eq!(cache.get("a", || 2), 2);
    }

    #[test]
    fn test_access_refreshes_expiry() {
        let mut cache = make_expiring_cache(10, 60);
        cache.get("a", || 1);
        for _ in 0..3 {
            sleep(Duration::from_millis(25));
            assert_eq!(cache.get("a", || -1), 1);
        }
    }

    #[test]
    fn test_capacity_pressure_prefers_purging_expired_entries() {
        let mut cache = make_expiring_cache(2, 30);
        cache.get("a", || 1);
        sleep(Duration::from_millis(80));
        cache.get("b", || 2);
        // "a" is expired; inserting "c" purges it instead of evicting "b".
        cache.get("c", || 3);
        assert_eq!(cache.get("b", || -1), 2);
        assert_eq!(cache.get("c", || -1), 3);
    }

    #[test]
    fn test_clean_drops_entries_but_keeps_configuration() {
        let mut cache = make_cache(2);
        cache.get("a", || 1);
        cache.get("b", || 2);
        cache.clean();
        assert!(cache.is_empty());
        assert!(!cache.is_initialized());
        assert_eq!(cache.max_items(), 2);
        assert_eq!(cache.get("a", || 9), 9);
    }

    #[test]
    fn test_capacity_of_one() {
        let mut cache = make_cache(1);
        cache.get("a", || 1);
        cache.get("b", || 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("b", || -1), 2);
    }
}
