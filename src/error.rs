//! Error types for the rounding factory and its cache.
//!
//! Every failure in this crate is synchronous and surfaces directly to the
//! caller. Nothing is logged-and-ignored or retried internally:
//!
//! - [`RoundingError::InvalidCacheOption`] is raised by the [`CacheConfig`]
//!   setters the moment an invalid value is written, before any cache is
//!   built.
//! - [`RoundingError::CacheLocked`] is raised by [`configure_cache`] and
//!   [`disable_cache`] once the factory cache has been configured, disabled,
//!   or used. It signals misordered startup code and should not be retried.
//! - [`RoundingError::CannotRescale`] is raised when trying to derive a new
//!   precision from the no-op policy.
//!
//! [`CacheConfig`]: crate::CacheConfig
//! [`configure_cache`]: crate::configure_cache
//! [`disable_cache`]: crate::disable_cache

use thiserror::Error;

/// Errors reported by the rounding factory and its cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RoundingError {
    /// A cache configuration option was set to an invalid value.
    ///
    /// Raised by the [`CacheConfig`](crate::CacheConfig) setters when given a
    /// non-positive value. The partially-configured block never reaches the
    /// cache construction step.
    #[error("the {option} value must be greater than 0, got {value}")]
    InvalidCacheOption {
        /// Name of the offending option.
        option: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// The factory cache can no longer be replaced.
    ///
    /// Raised by [`configure_cache`](crate::configure_cache) and
    /// [`disable_cache`](crate::disable_cache) once the cache has been
    /// configured, disabled, or initialized through use. The active cache is
    /// left unchanged.
    #[error("the factory cache can't be replaced once it is configured or initialized")]
    CacheLocked,

    /// The no-op policy cannot be converted into a precise one.
    ///
    /// Raised by [`Rounding::with_precision`](crate::Rounding::with_precision)
    /// on [`Rounding::None`](crate::Rounding::None). Create a precise policy
    /// with [`Rounding::to`](crate::Rounding::to) instead.
    #[error(
        "can not convert a NoRounding to a PreciseRounding; \
         if you need rounding support, create a new policy with Rounding::to()"
    )]
    CannotRescale,
}
