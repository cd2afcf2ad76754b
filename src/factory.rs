//! The memoizing policy factory.
//!
//! The factory owns the single process-wide cache store used to memoize
//! [`Rounding`] policies. Its lifecycle has three states:
//!
//! - **Default**: a store built from a default [`CacheConfig`], installed at
//!   startup, still empty.
//! - **Configured**: installed by a successful [`configure_cache`] call.
//! - **Disabled**: a [`NoCache`] installed by [`disable_cache`].
//!
//! The store may only be replaced while it is in the default state *and* has
//! never served a request. A first [`Rounding::to`] call therefore locks the
//! factory just as effectively as an explicit `configure_cache`. Once locked,
//! both `configure_cache` and `disable_cache` fail with
//! [`RoundingError::CacheLocked`] and leave the active store untouched.
//!
//! All operations, including the get-or-create path, run under one
//! [`Mutex`]. Concurrent first requests for the same (precision, mode) pair
//! cannot race to build two instances, and a configure call cannot race with
//! a first policy request.

use crate::cache::{Cache, CacheConfig, ExpiringCache, NoCache};
use crate::error::RoundingError;
use crate::mode::RoundingMode;
use crate::rounding::Rounding;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

static NO_ROUNDING: Lazy<Arc<Rounding>> = Lazy::new(|| Arc::new(Rounding::None));

static STORE: Lazy<Mutex<Store>> = Lazy::new(|| Mutex::new(Store::default_store()));

/// The active cache store together with its lifecycle state.
enum Store {
    /// Built from default options at startup; replaceable until used.
    Default(ExpiringCache<Arc<Rounding>>),
    /// Installed by `configure_cache`; permanent.
    Configured(ExpiringCache<Arc<Rounding>>),
    /// Installed by `disable_cache`; permanent.
    Disabled(NoCache<Arc<Rounding>>),
}

impl Store {
    fn default_store() -> Self {
        Store::Default(ExpiringCache::new(CacheConfig::default()))
    }

    /// A store is replaceable only while it is the default one and has never
    /// held an entry.
    fn replaceable(&self) -> bool {
        matches!(self, Store::Default(cache) if !cache.is_initialized())
    }

    fn get<F: FnOnce() -> Arc<Rounding>>(&mut self, key: &str, build: F) -> Arc<Rounding> {
        match self {
            Store::Default(cache) | Store::Configured(cache) => cache.get(key, build),
            Store::Disabled(cache) => cache.get(key, build),
        }
    }

    fn clean(&mut self) {
        match self {
            Store::Default(cache) | Store::Configured(cache) => cache.clean(),
            Store::Disabled(cache) => cache.clean(),
        }
    }
}

/// Get-or-create for a precise policy; the factory entry point behind
/// [`Rounding::to_with`].
pub(crate) fn policy(precision: i32, mode: RoundingMode) -> Arc<Rounding> {
    let key = format!("{precision}-{mode}");
    let mut store = STORE.lock();
    store.get(&key, || Arc::new(Rounding::Precise { precision, mode }))
}

/// The shared no-op policy; behind [`Rounding::none`].
pub(crate) fn none() -> Arc<Rounding> {
    Arc::clone(&NO_ROUNDING)
}

/// Configures the factory cache.
///
/// Builds a fresh [`CacheConfig`], applies `config_fn` to it and installs a
/// new expiring cache built from the result. Must be called before the cache
/// is initialized, i.e. before any call to [`Rounding::to`], and at most
/// once:
///
/// ```
/// use rounding_rs::{configure_cache, TimeUnit};
///
/// configure_cache(|config| {
///     config.set_max_items(100)?;
///     config.set_expiration_time(2)?;
///     config.set_expiration_time_unit(TimeUnit::Hours);
///     Ok(())
/// })
/// .unwrap();
/// ```
///
/// # Errors
///
/// - Any error returned by `config_fn`, typically
///   [`RoundingError::InvalidCacheOption`] from a setter. No store is built
///   or replaced in that case.
/// - [`RoundingError::CacheLocked`] when the cache was previously configured,
///   disabled, or initialized through use.
pub fn configure_cache<F>(config_fn: F) -> Result<(), RoundingError>
where
    F: FnOnce(&mut CacheConfig) -> Result<(), RoundingError>,
{
    let mut config = CacheConfig::default();
    config_fn(&mut config)?;
    let cache = ExpiringCache::new(config);
    let max_items = cache.max_items();
    let expiry = cache.expiry();
    install(Store::Configured(cache))?;
    debug!(max_items, ?expiry, "configured factory cache");
    Ok(())
}

/// Disables the factory cache.
///
/// Installs a store that never retains anything, so every policy request
/// builds a fresh instance. Must be called before the cache is initialized
/// and at most once.
///
/// # Errors
///
/// [`RoundingError::CacheLocked`] when the cache was previously configured,
/// disabled, or initialized through use.
pub fn disable_cache() -> Result<(), RoundingError> {
    install(Store::Disabled(NoCache::new()))?;
    debug!("disabled factory cache");
    Ok(())
}

/// Clears the active store and reinstalls a fresh default-configured cache,
/// bypassing the configuration lock.
///
/// Intended for test isolation between test cases. Not part of the stable
/// public contract; production code should never need it.
pub fn reset_cache() {
    let mut store = STORE.lock();
    store.clean();
    *store = Store::default_store();
    debug!("reset factory cache to defaults");
}

fn install(next: Store) -> Result<(), RoundingError> {
    let mut store = STORE.lock();
    if store.replaceable() {
        *store = next;
        Ok(())
    } else {
        Err(RoundingError::CacheLocked)
    }
}
