//! Rounding mode policies.
//!
//! A [`RoundingMode`] decides what happens to the digits that are discarded
//! when a value is scaled down to a target precision. The set mirrors the
//! modes commonly offered by decimal arithmetic libraries:
//!
//! | Mode | 5.5 → scale 0 | 2.5 → scale 0 | -2.5 → scale 0 |
//! |------|---------------|---------------|----------------|
//! | `Up` | 6 | 3 | -3 |
//! | `Down` | 5 | 2 | -2 |
//! | `Ceiling` | 6 | 3 | -2 |
//! | `Floor` | 5 | 2 | -3 |
//! | `HalfUp` | 6 | 3 | -3 |
//! | `HalfDown` | 5 | 2 | -2 |
//! | `HalfEven` | 6 | 2 | -2 |

use core::fmt;

/// How to resolve the discarded fraction when rounding a value.
///
/// The default mode is [`RoundingMode::HalfEven`] (banker's rounding), which
/// is statistically unbiased: exact halves round towards the nearest even
/// digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoundingMode {
    /// Round away from zero.
    Up,
    /// Round towards zero (truncate).
    Down,
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards negative infinity.
    Floor,
    /// Round to the nearest neighbor; ties round away from zero.
    HalfUp,
    /// Round to the nearest neighbor; ties round towards zero.
    HalfDown,
    /// Round to the nearest neighbor; ties round to the even digit.
    #[default]
    HalfEven,
}

impl RoundingMode {
    /// The canonical name of the mode, e.g. `HALF_EVEN`.
    ///
    /// Used as part of the factory cache key, so it must be unique per mode.
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
