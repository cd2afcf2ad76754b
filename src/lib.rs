#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                      Rounding factory                         │
//! │                                                               │
//! │  Rounding::to(p, m) ──▶ key "p-m" ──▶ ┌──────────────────┐    │
//! │                                       │  active store    │    │
//! │  configure_cache ──▶ install ───────▶ │  (one Mutex)     │    │
//! │  disable_cache  ──▶ install ────────▶ │                  │    │
//! │                                       │  Default         │    │
//! │                                       │  Configured      │    │
//! │                                       │  Disabled        │    │
//! │                                       └──────────────────┘    │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The active store starts in the **Default** state (a bounded, expiring
//! cache built from default options). It moves to **Configured** via
//! [`configure_cache`], to **Disabled** via [`disable_cache`], or becomes
//! permanently locked in place the moment it serves its first policy
//! request. All three transitions are one-way; only [`reset_cache`] (test
//! isolation) undoes them.
//!
//! ## Modules
//!
//! - [`rounding`]: the [`Rounding`] policy value object
//! - [`mode`]: the [`RoundingMode`] enum
//! - [`cache`]: the store abstraction ([`cache::Cache`],
//!   [`cache::ExpiringCache`], [`cache::NoCache`]) and its configuration
//! - [`error`]: the [`RoundingError`] taxonomy

/// Cache store abstraction: the `Cache` trait, the bounded expiring store,
/// the no-op store, and their configuration.
pub mod cache;

/// Error types for the factory and its cache configuration.
pub mod error;

/// Rounding mode policies (`UP`, `DOWN`, `CEILING`, `FLOOR`, `HALF_UP`,
/// `HALF_DOWN`, `HALF_EVEN`).
pub mod mode;

/// Rounding policy value objects and the factory entry points.
pub mod rounding;

mod factory;
mod scale;

pub use cache::{CacheConfig, TimeUnit};
pub use error::RoundingError;
pub use factory::{configure_cache, disable_cache, reset_cache};
pub use mode::RoundingMode;
pub use rounding::Rounding;
