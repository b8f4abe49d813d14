// ============================================================================
// Common Integer Primitives
// Bit scanning, full-width multiply/divide and the raw integer square root
// ============================================================================
//
// These functions work on raw 256-bit integers and know nothing about the
// fixed-point interpretation, except `mul_div_fixed_point` which divides by
// the 10^18 unit.

use super::constants::SCALE;
use super::errors::{reject, MathError, MathResult};
use ethnum::{I256, U256};
use primitive_types::U512;

/// Index of the most significant set bit of `x` (0-based).
///
/// Binary search over the bit width: each step tests whether the remaining
/// value is at least 2^k, shifts those bits out and accumulates k.
///
/// # Errors
/// Returns `InvalidArgument` if `x` is zero.
pub fn most_significant_bit(mut x: U256) -> MathResult<u32> {
    if x == U256::ZERO {
        return Err(reject("most_significant_bit", MathError::InvalidArgument));
    }

    let mut result = 0_u32;
    for shift in [128_u32, 64, 32, 16, 8, 4, 2, 1] {
        if x >= U256::ONE << shift {
            x = x >> shift;
            result += shift;
        }
    }

    Ok(result)
}

/// Computes `floor(x * y / denominator)` with a 512-bit intermediate product.
///
/// # Errors
/// - `DivisionByZero` if `denominator` is zero
/// - `Overflow` if the quotient does not fit in 256 bits
pub fn mul_div(x: U256, y: U256, denominator: U256) -> MathResult<U256> {
    if denominator == U256::ZERO {
        return Err(reject("mul_div", MathError::DivisionByZero));
    }

    // Both factors are below 2^256 so the product always fits in 512 bits.
    let product = widen(x) * widen(y);
    narrow(product / widen(denominator)).ok_or_else(|| reject("mul_div", MathError::Overflow))
}

/// Computes `floor(x * y / 10^18)` on unsigned magnitudes.
///
/// This is the fixed-point product of two non-negative values.
///
/// # Errors
/// Returns `Overflow` if the result does not fit in 256 bits.
#[inline]
pub fn mul_div_fixed_point(x: U256, y: U256) -> MathResult<U256> {
    mul_div(x, y, SCALE.as_u256())
}

/// Integer square root of a raw (unscaled) value, rounded down.
///
/// `sqrt(16) == 4`: the argument is not rescaled, so passing a fixed-point
/// value yields the root of its raw integer.
///
/// # Errors
/// Returns `InvalidArgument` if `x` is negative.
pub fn sqrt(x: I256) -> MathResult<I256> {
    if x < I256::ZERO {
        return Err(reject("sqrt", MathError::InvalidArgument));
    }
    Ok(sqrt_unsigned(x.as_u256()).as_i256())
}

/// Integer square root of an unsigned 256-bit value, rounded down.
pub fn sqrt_unsigned(x: U256) -> U256 {
    if x == U256::ZERO {
        return U256::ZERO;
    }

    // Seed with a power of two within a factor of two of sqrt(x), found by
    // halving the bit length of x.
    let mut x_aux = x;
    let mut result = U256::ONE;
    for (threshold, seed_shift) in [
        (128_u32, 64_u32),
        (64, 32),
        (32, 16),
        (16, 8),
        (8, 4),
        (4, 2),
        (2, 1),
    ] {
        if x_aux >= U256::ONE << threshold {
            x_aux = x_aux >> threshold;
            result = result << seed_shift;
        }
    }

    // Each Newton step doubles the number of correct bits; seven steps cover
    // the 128 bits of a 256-bit root from a seed that is within a factor of two.
    for _ in 0..7 {
        result = (result + x / result) >> 1_u32;
    }

    // The iteration can settle one above the floor of the root.
    let rounded_down = x / result;
    if result > rounded_down {
        rounded_down
    } else {
        result
    }
}

// ============================================================================
// Wide Intermediate Helpers
// ============================================================================

fn widen(x: U256) -> U512 {
    let (hi, lo) = x.into_words();
    U512([
        lo as u64,
        (lo >> 64) as u64,
        hi as u64,
        (hi >> 64) as u64,
        0,
        0,
        0,
        0,
    ])
}

fn narrow(x: U512) -> Option<U256> {
    let U512(limbs) = x;
    if limbs[4..].iter().any(|&limb| limb != 0) {
        return None;
    }
    let lo = u128::from(limbs[0]) | (u128::from(limbs[1]) << 64);
    let hi = u128::from(limbs[2]) | (u128::from(limbs[3]) << 64);
    Some(U256::from_words(hi, lo))
}
