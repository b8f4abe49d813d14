// ============================================================================
// Exponentials
// Binary and natural exponent of SD59x18 values
// ============================================================================

use super::constants::{
    EXP2_MAX_INPUT, EXP2_MIN_THRESHOLD, EXP_MAX_INPUT, EXP_MIN_THRESHOLD, HALF_SCALE, LOG2_E,
    SCALE, SCALE_SQUARED,
};
use super::errors::{reject, MathError, MathResult};
use super::sd59x18::SD59x18;
use ethnum::{I256, U256};

/// `2^(2^-(i+1))` in 192.64-bit fixed point, for fractional bit `i` counted
/// from the most significant. Every factor lies in `[2^64, 2^65)`.
const EXP2_FACTORS: [u128; 64] = [
    0x16A09E667F3BCC909, 0x1306FE0A31B7152DF, 0x1172B83C7D517ADCE, 0x10B5586CF9890F62A,
    0x1059B0D31585743AE, 0x102C9A3E778060EE7, 0x10163DA9FB33356D8, 0x100B1AFA5ABCBED61,
    0x10058C86DA1C09EA2, 0x1002C605E2E8CEC50, 0x100162F3904051FA1, 0x1000B175EFFDC76BA,
    0x100058BA01FB9F96D, 0x10002C5CC37DA9492, 0x1000162E525EE0547, 0x10000B17255775C04,
    0x1000058B91B5BC9AE, 0x100002C5C89D5EC6D, 0x10000162E43F4F831, 0x100000B1721BCFC9A,
    0x10000058B90CF1E6E, 0x1000002C5C863B73F, 0x100000162E430E5A2, 0x1000000B172183551,
    0x100000058B90C0B49, 0x10000002C5C8601CC, 0x1000000162E42FFF0, 0x10000000B17217FBB,
    0x1000000058B90BFCE, 0x100000002C5C85FE3, 0x10000000162E42FF1, 0x100000000B17217F8,
    0x10000000058B90BFC, 0x1000000002C5C85FE, 0x100000000162E42FF, 0x1000000000B17217F,
    0x100000000058B90C0, 0x10000000002C5C860, 0x1000000000162E430, 0x10000000000B17218,
    0x1000000000058B90C, 0x100000000002C5C86, 0x10000000000162E43, 0x100000000000B1721,
    0x10000000000058B91, 0x1000000000002C5C8, 0x100000000000162E4, 0x1000000000000B172,
    0x100000000000058B9, 0x10000000000002C5D, 0x1000000000000162E, 0x10000000000000B17,
    0x1000000000000058C, 0x100000000000002C6, 0x10000000000000163, 0x100000000000000B1,
    0x10000000000000059, 0x1000000000000002C, 0x10000000000000016, 0x1000000000000000B,
    0x10000000000000006, 0x10000000000000003, 0x10000000000000001, 0x10000000000000001,
];

/// Binary exponent of an unsigned 192.64-bit fixed-point number using the
/// binary fraction method. Returns an 18-decimal fixed-point value.
///
/// `x` must be below `192 << 64`.
pub(crate) fn exp2_192x64(x: U256) -> U256 {
    // Start from 0.5 in 192.64 format. The accumulator stays below 2^192 and
    // every factor below 2^65, so the products never exceed 256 bits.
    let mut result = U256::ONE << 191_u32;

    let (_, low) = x.into_words();
    let fraction = low as u64;

    // Walk the fractional bits a byte at a time, skipping empty bytes.
    for (byte_index, factors) in EXP2_FACTORS.chunks_exact(8).enumerate() {
        let byte = (fraction >> (56 - 8 * byte_index)) as u8;
        if byte == 0 {
            continue;
        }
        for (bit, factor) in factors.iter().enumerate() {
            if byte & (0x80 >> bit) != 0 {
                result = (result * U256::new(*factor)) >> 64_u32;
            }
        }
    }

    // Multiply by 2^ip and convert to 18 decimals in one step. Shifting by
    // 191 instead of 192 folds in the initial 0.5.
    let integer_part = (x >> 64_u32).as_u32();
    (result * SCALE.as_u256()) >> (191 - integer_part)
}

impl SD59x18 {
    /// Binary exponent `2^x`.
    ///
    /// Negative inputs use `2^x = 1 / 2^-x`. Results smaller than 10^-18
    /// (x below about -59.79) are reported as zero.
    ///
    /// # Errors
    /// Returns `Overflow` if `self >= 192`.
    pub fn exp2(self) -> MathResult<Self> {
        if self.0 < I256::ZERO {
            if self.0 < EXP2_MIN_THRESHOLD {
                return Ok(Self::ZERO);
            }
            let reciprocal = Self(-self.0).exp2()?;
            return Ok(Self(SCALE_SQUARED / reciprocal.0));
        }

        if self.0 >= EXP2_MAX_INPUT {
            return Err(reject("exp2", MathError::Overflow));
        }

        let x_192x64 = (self.0.as_u256() << 64_u32) / SCALE.as_u256();
        Ok(Self(exp2_192x64(x_192x64).as_i256()))
    }

    /// Natural exponent `e^x`, computed as `2^(x * log2(e))`.
    ///
    /// Results smaller than 10^-18 (x below about -41.45) are reported as zero.
    ///
    /// # Errors
    /// Returns `Overflow` if `self > 133.084258667509499440`.
    pub fn exp(self) -> MathResult<Self> {
        if self.0 < EXP_MIN_THRESHOLD {
            return Ok(Self::ZERO);
        }

        if self.0 > EXP_MAX_INPUT {
            return Err(reject("exp", MathError::Overflow));
        }

        // The product carries 36 decimals; round back to 18 to nearest. Floor
        // division keeps the rounding symmetric for negative products.
        let double_scale_product = self.0 * LOG2_E;
        Self((double_scale_product + HALF_SCALE).div_euclid(SCALE)).exp2()
    }
}
