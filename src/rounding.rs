//! Rounding policy value objects.
//!
//! A [`Rounding`] describes how to round a number: either not at all
//! ([`Rounding::None`]) or to a precision scale with an explicit
//! [`RoundingMode`] ([`Rounding::Precise`]). Policies are immutable and
//! shared as [`Arc`] handles obtained from the factory:
//!
//! ```
//! use rounding_rs::{Rounding, RoundingMode};
//!
//! let rounding = Rounding::to_with(1, RoundingMode::Up);
//! assert_eq!(rounding.round(5.76), 5.8);
//!
//! // Negative precision rounds to the nearest power of ten.
//! assert_eq!(Rounding::to(-1).round(5555.55), 5560.0);
//! ```
//!
//! Policies order by precision, with the no-op policy sorting last (its
//! reported precision is the `i32::MAX` sentinel).

use crate::error::RoundingError;
use crate::factory;
use crate::mode::RoundingMode;
use crate::scale;
use core::cmp::Ordering;
use core::fmt;
use std::sync::Arc;

/// A policy describing how to round a number.
///
/// Instances are obtained from the factory functions [`Rounding::to`],
/// [`Rounding::to_with`] and [`Rounding::none`], which memoize the precise
/// policies through the process-wide cache. Equality is structural; two
/// precise policies are equal exactly when their precision and mode match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// The no-op policy: values pass through unchanged.
    None,
    /// Rounds to `precision` fractional digits using `mode`.
    Precise {
        /// The precision scale to round a value to. Negative values round to
        /// powers of ten.
        precision: i32,
        /// The rounding mode applied to the discarded fraction.
        mode: RoundingMode,
    },
}

impl Rounding {
    /// Returns the shared policy rounding to `precision` fractional digits
    /// with the default mode ([`RoundingMode::HalfEven`]).
    pub fn to(precision: i32) -> Arc<Rounding> {
        Self::to_with(precision, RoundingMode::default())
    }

    /// Returns the shared policy rounding to `precision` fractional digits
    /// with the given `mode`.
    ///
    /// While the factory cache is enabled and holds the entry, repeated calls
    /// with the same arguments return the same instance:
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rounding_rs::Rounding;
    ///
    /// let a = Rounding::to(2);
    /// let b = Rounding::to(2);
    /// assert!(Arc::ptr_eq(&a, &b));
    /// ```
    pub fn to_with(precision: i32, mode: RoundingMode) -> Arc<Rounding> {
        factory::policy(precision, mode)
    }

    /// Returns the process-wide no-op policy.
    ///
    /// Never touches the factory cache.
    pub fn none() -> Arc<Rounding> {
        factory::none()
    }

    /// The precision scale of the policy.
    ///
    /// The no-op policy reports `i32::MAX`, which is why it sorts after every
    /// precise policy.
    pub fn precision(&self) -> i32 {
        match self {
            Rounding::None => i32::MAX,
            Rounding::Precise { precision, .. } => *precision,
        }
    }

    /// The rounding mode of the policy.
    ///
    /// The no-op policy reports the default mode.
    pub fn mode(&self) -> RoundingMode {
        match self {
            Rounding::None => RoundingMode::default(),
            Rounding::Precise { mode, .. } => *mode,
        }
    }

    /// Rounds the given value.
    pub fn round(&self, value: f64) -> f64 {
        match self {
            Rounding::None => value,
            Rounding::Precise { precision, mode } => scale::round_f64(value, *precision, *mode),
        }
    }

    /// Rounds the given single-precision value.
    pub fn round_f32(&self, value: f32) -> f32 {
        match self {
            Rounding::None => value,
            Rounding::Precise { precision, mode } => scale::round_f32(value, *precision, *mode),
        }
    }

    /// Rounds the value returned by `block`.
    pub fn round_with<F: FnOnce() -> f64>(&self, block: F) -> f64 {
        self.round(block())
    }

    /// Returns the shared policy with the given precision and this policy's
    /// mode.
    ///
    /// # Errors
    ///
    /// [`RoundingError::CannotRescale`] on the no-op policy, which has no
    /// meaningful precision to change.
    pub fn with_precision(&self, precision: i32) -> Result<Arc<Rounding>, RoundingError> {
        match self {
            Rounding::None => Err(RoundingError::CannotRescale),
            Rounding::Precise { mode, .. } => Ok(Self::to_with(precision, *mode)),
        }
    }

    /// Sort rank among policies with equal precision; keeps the ordering
    /// consistent with equality when a precise policy uses the sentinel
    /// precision.
    fn rank(&self) -> u8 {
        match self {
            Rounding::Precise { .. } => 0,
            Rounding::None => 1,
        }
    }
}

impl Ord for Rounding {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precision()
            .cmp(&other.precision())
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| self.mode().cmp(&other.mode()))
    }
}

impl PartialOrd for Rounding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::None => f.write_str("NoRounding"),
            Rounding::Precise { precision, mode } => {
                write!(f, "PreciseRounding[{precision} {mode}]")
            }
        }
    }
}
