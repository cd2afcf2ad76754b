//! Cache store abstraction for the rounding factory.
//!
//! The factory memoizes rounding policies through a single [`Cache`] store.
//! Two implementations exist:
//!
//! - [`ExpiringCache`]: a bounded, time-expiring store. Inserts beyond the
//!   configured capacity evict the least-recently-accessed entry, and entries
//!   idle for longer than the configured expiry are never returned as hits.
//! - [`NoCache`]: a zero-storage store. Every lookup is a miss and the build
//!   function always runs. Used to disable memoization while keeping the
//!   same interface.
//!
//! Stores are keyed by strings and are not internally synchronized; the
//! factory serializes access through its own lock.

pub mod config;
pub mod expiring;

pub use config::{CacheConfig, TimeUnit};
pub use expiring::ExpiringCache;

use core::marker::PhantomData;

/// A get-or-create store keyed by strings.
pub trait Cache<T> {
    /// Returns the value stored under `key`, building and storing it with
    /// `build` on a miss. Accessing a key refreshes its expiry timer.
    fn get<F: FnOnce() -> T>(&mut self, key: &str, build: F) -> T;

    /// Whether the store holds at least one entry.
    ///
    /// The factory uses this to decide if the store may still be replaced;
    /// a store that reports `true` can no longer be swapped out.
    fn is_initialized(&self) -> bool;

    /// Evicts all entries without changing the store's configuration.
    fn clean(&mut self);
}

/// A store that never retains anything.
///
/// `get` always runs the build function, and `is_initialized` always reports
/// `true`, which keeps the factory's replacement rule closed: once a
/// `NoCache` is installed it cannot be swapped out again.
pub struct NoCache<T> {
    marker: PhantomData<T>,
}

impl<T> NoCache<T> {
    /// Creates a new no-op store.
    pub fn new() -> Self {
        NoCache {
            marker: PhantomData,
        }
    }
}

impl<T> Default for NoCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cache<T> for NoCache<T> {
    fn get<F: FnOnce() -> T>(&mut self, _key: &str, build: F) -> T {
        build()
    }

    fn is_initialized(&self) -> bool {
        true
    }

    fn clean(&mut self) {}
}

impl<T> core::fmt::Debug for NoCache<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NoCache").finish()
    }
}
