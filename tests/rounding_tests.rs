//! End-to-end rounding tests.
//!
//! These exercise policies obtained from the factory the way callers do:
//! request a policy, round values with it. They make no assumption about the
//! factory cache state, so they can run in parallel.

use rounding_rs::{Rounding, RoundingMode};
use std::sync::Arc;

#[test]
fn test_half_even_is_the_default_mode() {
    let rounding = Rounding::to(1);
    assert_eq!(rounding.mode(), RoundingMode::HalfEven);
    assert_eq!(rounding.round(5.55), 5.6);
    assert_eq!(rounding.round(5.65), 5.6);
}

#[test]
fn test_half_down_breaks_ties_towards_zero() {
    let rounding = Rounding::to_with(1, RoundingMode::HalfDown);
    assert_eq!(rounding.round(5.55), 5.5);
    assert_eq!(rounding.round(-5.55), -5.5);
    assert_eq!(rounding.round(5.56), 5.6);
}

#[test]
fn test_negative_precision_rounds_to_nearest_ten() {
    let rounding = Rounding::to(-1);
    assert_eq!(rounding.round(5555.55), 5560.0);
    assert_eq!(rounding.round(5554.0), 5550.0);
}

#[test]
fn test_up_mode_rounds_away_from_zero() {
    let rounding = Rounding::to_with(1, RoundingMode::Up);
    assert_eq!(rounding.round(5.76), 5.8);
    assert_eq!(rounding.round(-5.76), -5.8);
}

#[test]
fn test_directed_modes() {
    assert_eq!(Rounding::to_with(0, RoundingMode::Ceiling).round(2.1), 3.0);
    assert_eq!(Rounding::to_with(0, RoundingMode::Ceiling).round(-2.1), -2.0);
    assert_eq!(Rounding::to_with(0, RoundingMode::Floor).round(2.9), 2.0);
    assert_eq!(Rounding::to_with(0, RoundingMode::Floor).round(-2.1), -3.0);
    assert_eq!(Rounding::to_with(0, RoundingMode::Down).round(2.9), 2.0);
}

#[test]
fn test_no_rounding_is_identity() {
    let no_rounding = Rounding::none();
    assert_eq!(no_rounding.round(5.5555), 5.5555);
    assert_eq!(no_rounding.round(-0.1), -0.1);
    assert_eq!(no_rounding.round_f32(5.55_f32), 5.55_f32);
}

#[test]
fn test_f32_round_trip() {
    let rounding = Rounding::to(1);
    assert_eq!(rounding.round_f32(5.55_f32), 5.6_f32);
    assert_eq!(rounding.round_f32(-5.55_f32), -5.6_f32);
}

#[test]
fn test_round_with_block() {
    let rounding = Rounding::to(2);
    assert_eq!(rounding.round_with(|| 10.0 / 3.0), 3.33);
}

#[test]
fn test_policies_sort_by_precision_with_no_rounding_last() {
    let mut policies: Vec<Arc<Rounding>> = vec![
        Rounding::to(3),
        Rounding::to(2),
        Rounding::none(),
        Rounding::to(1),
    ];
    policies.sort();

    let precisions: Vec<i32> = policies.iter().map(|p| p.precision()).collect();
    assert_eq!(precisions, vec![1, 2, 3, i32::MAX]);
    assert_eq!(*policies[3], Rounding::None);
}

#[test]
fn test_with_precision_through_the_factory() {
    let rounding = Rounding::to_with(2, RoundingMode::Floor);
    let rescaled = rounding.with_precision(1).unwrap();
    assert_eq!(rescaled.mode(), RoundingMode::Floor);
    assert_eq!(rescaled.round(5.59), 5.5);

    assert!(Rounding::none().with_precision(1).is_err());
}

#[test]
fn test_display_round_trip() {
    assert_eq!(Rounding::none().to_string(), "NoRounding");
    assert_eq!(
        Rounding::to_with(2, RoundingMode::HalfUp).to_string(),
        "PreciseRounding[2 HALF_UP]"
    );
}
