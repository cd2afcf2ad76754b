//! Configuration for the factory's expiring cache.
//!
//! A [`CacheConfig`] is handed to the closure passed to
//! [`configure_cache`](crate::configure_cache), which sets only the options it
//! cares about. Each setter validates its value the moment it is written, so
//! an invalid configuration block fails before any cache is built.
//!
//! ```
//! use rounding_rs::{CacheConfig, TimeUnit};
//!
//! let mut config = CacheConfig::default();
//! config.set_max_items(100).unwrap();
//! config.set_expiration_time(2).unwrap();
//! config.set_expiration_time_unit(TimeUnit::Hours);
//!
//! assert!(config.set_max_items(0).is_err());
//! ```

use crate::error::RoundingError;
use core::fmt;
use std::time::Duration;

const DEFAULT_MAX_ITEMS: u64 = 50;
const DEFAULT_EXPIRATION_TIME: u64 = 60;

/// The unit of a cache expiration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeUnit {
    /// Milliseconds.
    Millis,
    /// Seconds.
    Seconds,
    /// Minutes.
    #[default]
    Minutes,
    /// Hours.
    Hours,
}

impl TimeUnit {
    /// Converts `amount` of this unit into a [`Duration`].
    ///
    /// Saturates at [`Duration::MAX`] instead of overflowing on amounts
    /// beyond the representable range.
    pub fn duration(self, amount: u64) -> Duration {
        match self {
            TimeUnit::Millis => Duration::from_millis(amount),
            TimeUnit::Seconds => Duration::from_secs(amount),
            TimeUnit::Minutes => Duration::from_secs(amount).saturating_mul(60),
            TimeUnit::Hours => Duration::from_secs(amount).saturating_mul(60 * 60),
        }
    }
}

/// Options for the factory's expiring cache.
///
/// Defaults: 50 items, entries expiring after 60 minutes idle. The config is
/// consumed exactly once to build an
/// [`ExpiringCache`](crate::cache::ExpiringCache).
pub struct CacheConfig {
    max_items: u64,
    expiration_time: u64,
    expiration_time_unit: TimeUnit,
}

impl CacheConfig {
    /// The number of policies to keep in the cache. Defaults to 50.
    pub fn max_items(&self) -> u64 {
        self.max_items
    }

    /// The amount of time to keep an idle policy in the cache. Defaults
    /// to 60.
    pub fn expiration_time(&self) -> u64 {
        self.expiration_time
    }

    /// The unit of [`expiration_time`](Self::expiration_time). Defaults to
    /// [`TimeUnit::Minutes`].
    pub fn expiration_time_unit(&self) -> TimeUnit {
        self.expiration_time_unit
    }

    /// Sets the maximum number of cached policies.
    ///
    /// # Errors
    ///
    /// [`RoundingError::InvalidCacheOption`] when `value` is zero. The
    /// previous value is kept.
    pub fn set_max_items(&mut self, value: u64) -> Result<&mut Self, RoundingError> {
        if value == 0 {
            return Err(RoundingError::InvalidCacheOption {
                option: "max_items",
                value,
            });
        }
        self.max_items = value;
        Ok(self)
    }

    /// Sets the idle time after which a cached policy expires.
    ///
    /// # Errors
    ///
    /// [`RoundingError::InvalidCacheOption`] when `value` is zero. The
    /// previous value is kept.
    pub fn set_expiration_time(&mut self, value: u64) -> Result<&mut Self, RoundingError> {
        if value == 0 {
            return Err(RoundingError::InvalidCacheOption {
                option: "expiration_time",
                value,
            });
        }
        self.expiration_time = value;
        Ok(self)
    }

    /// Sets the unit of the expiration time.
    pub fn set_expiration_time_unit(&mut self, unit: TimeUnit) -> &mut Self {
        self.expiration_time_unit = unit;
        self
    }

    /// The configured expiry as a [`Duration`].
    pub fn expiry(&self) -> Duration {
        self.expiration_time_unit.duration(self.expiration_time)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            max_items: DEFAULT_MAX_ITEMS,
            expiration_time: DEFAULT_EXPIRATION_TIME,
            expiration_time_unit: TimeUnit::default(),
        }
    }
}

impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("max_items", &self.max_items)
            .field("expiration_time", &self.expiration_time)
            .field("expiration_time_unit", &self.expiration_time_unit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.max_items(), 50);
        assert_eq!(config.expiration_time(), 60);
        assert_eq!(config.expiration_time_unit(), TimeUnit::Minutes);
        assert_eq!(config.expiry(), Duration::from_secs(3600));
    }

    #[test]
    fn test_setters_chain() {
        let mut config = CacheConfig::default();
        config
            .set_max_items(10)
            .unwrap()
            .set_expiration_time(5)
            .unwrap()
            .set_expiration_time_unit(TimeUnit::Seconds);
        assert_eq!(config.max_items(), 10);
        assert_eq!(config.expiry(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_max_items_is_rejected() {
        let mut config = CacheConfig::default();
        let err = config.set_max_items(0).unwrap_err();
        assert_eq!(
            err,
            RoundingError::InvalidCacheOption {
                option: "max_items",
                value: 0,
            }
        );
        // The previous value survives a rejected write.
        assert_eq!(config.max_items(), 50);
    }

    #[test]
    fn test_zero_expiration_time_is_rejected() {
        let mut config = CacheConfig::default();
        let err = config.set_expiration_time(0).unwrap_err();
        assert_eq!(
            err,
            RoundingError::InvalidCacheOption {
                option: "expiration_time",
                value: 0,
            }
        );
        assert_eq!(config.expiration_time(), 60);
    }

    #[test]
    fn test_huge_expiration_time_saturates() {
        // Any non-zero expiry is accepted, so the unit conversion must not
        // overflow into a near-zero Duration.
        let mut config = CacheConfig::default();
        config.set_expiration_time(u64::MAX).unwrap();

        config.set_expiration_time_unit(TimeUnit::Minutes);
        assert_eq!(config.expiry(), Duration::MAX);

        config.set_expiration_time_unit(TimeUnit::Hours);
        assert_eq!(config.expiry(), Duration::MAX);
    }

    #[test]
    fn test_time_unit_durations() {
        assert_eq!(TimeUnit::Millis.duration(1500), Duration::from_millis(1500));
        assert_eq!(TimeUnit::Seconds.duration(90), Duration::from_secs(90));
        assert_eq!(TimeUnit::Minutes.duration(2), Duration::from_secs(120));
        assert_eq!(TimeUnit::Hours.duration(1), Duration::from_secs(3600));
    }
}
