//! Decimal scaling engine.
//!
//! Rounds a float to a target number of fractional digits by operating on its
//! *shortest decimal representation* rather than on the raw binary value.
//! `5.55_f64` is stored as `5.54999…`, but its shortest representation is
//! `"5.55"`, and that is the number users mean when they write the literal.
//! Rounding the digit string keeps the result aligned with what a decimal
//! arithmetic library would produce: `5.55` at precision 1 under `HALF_UP` is
//! `5.6`, not `5.5`.
//!
//! Negative precision rounds to powers of ten: precision `-1` on `5555.55`
//! yields `5560.0`.
//!
//! The engine is digit-string arithmetic end to end. No intermediate float
//! multiplication takes place, so no binary representation error can leak
//! into the rounding decision.

use crate::mode::RoundingMode;

/// Precisions below this would need pathologically long zero-padding and are
/// far outside the dynamic range of `f64` anyway.
const MIN_PRECISION: i32 = -400;

/// Rounds `value` to `precision` fractional digits using `mode`.
///
/// Non-finite values and zero pass through unchanged.
pub(crate) fn round_f64(value: f64, precision: i32, mode: RoundingMode) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let negative = value < 0.0;
    match round_repr(&value.abs().to_string(), negative, precision, mode) {
        Some(rounded) => match rounded.parse::<f64>() {
            Ok(parsed) => if negative { -parsed } else { parsed },
            Err(_) => value,
        },
        None => value,
    }
}

/// Rounds `value` to `precision` fractional digits using `mode`.
///
/// Works on the shortest decimal representation of the `f32`, which is
/// generally shorter than that of the widened `f64`.
pub(crate) fn round_f32(value: f32, precision: i32, mode: RoundingMode) -> f32 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let negative = value < 0.0;
    match round_repr(&value.abs().to_string(), negative, precision, mode) {
        Some(rounded) => match rounded.parse::<f32>() {
            Ok(parsed) => if negative { -parsed } else { parsed },
            Err(_) => value,
        },
        None => value,
    }
}

/// Rounds the positional decimal representation `repr` (no sign, no exponent)
/// at scale `precision`.
///
/// Returns `None` when the value is already exact at the target scale.
fn round_repr(repr: &str, negative: bool, precision: i32, mode: RoundingMode) -> Option<String> {
    let precision = precision.max(MIN_PRECISION);
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (repr, ""),
    };
    let scale = frac_part.len() as i32;
    if precision >= scale {
        return None;
    }

    // Everything below the target scale is discarded; the kept digits form
    // the integer N such that the result is N * 10^(-precision).
    let digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let drop = (scale - precision) as usize;
    let (kept, remainder): (Vec<u8>, Vec<u8>) = if drop >= digits.len() {
        let mut padded = vec![b'0'; drop - digits.len()];
        padded.extend_from_slice(&digits);
        (Vec::new(), padded)
    } else {
        let split = digits.len() - drop;
        (digits[..split].to_vec(), digits[split..].to_vec())
    };

    let mut kept = if kept.is_empty() { vec![b'0'] } else { kept };
    if should_increment(&kept, &remainder, negative, mode) {
        increment(&mut kept);
    }

    Some(assemble(&kept, precision))
}

/// Decides whether the kept digits round up by one unit in the last place.
fn should_increment(kept: &[u8], remainder: &[u8], negative: bool, mode: RoundingMode) -> bool {
    let remainder_is_zero = remainder.iter().all(|&b| b == b'0');
    if remainder_is_zero {
        return false;
    }
    // Compare the remainder against one half of a unit in the last kept
    // place, i.e. the digit string "5000…".
    let first = remainder[0];
    let tail_is_zero = remainder[1..].iter().all(|&b| b == b'0');
    let above_half = first > b'5' || (first == b'5' && !tail_is_zero);
    let exactly_half = first == b'5' && tail_is_zero;

    match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => true,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp => above_half || exactly_half,
        RoundingMode::HalfDown => above_half,
        RoundingMode::HalfEven => {
            let last_kept = kept.last().copied().unwrap_or(b'0');
            above_half || (exactly_half && (last_kept - b'0') % 2 == 1)
        }
    }
}

/// Adds one to a big-endian ASCII digit string in place.
fn increment(digits: &mut Vec<u8>) {
    for byte in digits.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Renders the integer digit string `kept` scaled by `10^(-precision)` as a
/// positional decimal string.
fn assemble(kept: &[u8], precision: i32) -> String {
    if precision <= 0 {
        let mut out = String::with_capacity(kept.len() + (-precision) as usize);
        out.push_str(std::str::from_utf8(kept).unwrap_or("0"));
        for _ in 0..(-precision) {
            out.push('0');
        }
        out
    } else {
        let precision = precision as usize;
        let mut digits: Vec<u8> = kept.to_vec();
        while digits.len() < precision + 1 {
            digits.insert(0, b'0');
        }
        let point = digits.len() - precision;
        let mut out = String::with_capacity(digits.len() + 1);
        out.push_str(std::str::from_utf8(&digits[..point]).unwrap_or("0"));
        out.push('.');
        out.push_str(std::str::from_utf8(&digits[point..]).unwrap_or("0"));
        out
    }
}
