// ============================================================================
// Logarithms
// Binary, natural and common logarithm of SD59x18 values
// ============================================================================

use super::common::most_significant_bit;
use super::constants::{DECIMALS, DOUBLE_SCALE, HALF_SCALE, LOG2_10, LOG2_E, SCALE, SCALE_SQUARED};
use super::errors::{reject, MathError, MathResult};
use super::sd59x18::SD59x18;
use ethnum::I256;

impl SD59x18 {
    /// Binary logarithm using the iterative approximation algorithm:
    ///
    /// `log2(x) = n + log2(y)` where `y = x * 2^-n` and `y ∈ [1, 2)`.
    ///
    /// For `x < 1` the input is inverted first: `log2(x) = -log2(1/x)`.
    ///
    /// The integer part is exact; the fractional part is refined one bit per
    /// step by squaring `y`, so the result may be off in the last decimal.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `self <= 0`.
    pub fn log2(self) -> MathResult<Self> {
        if self.0 <= I256::ZERO {
            return Err(reject("log2", MathError::InvalidArgument));
        }

        let (x, sign) = if self.0 >= SCALE {
            (self.0, I256::ONE)
        } else {
            (SCALE_SQUARED / self.0, I256::MINUS_ONE)
        };

        // Integer part: x >= 1 here, so x / SCALE is at least one.
        let n = most_significant_bit((x / SCALE).as_u256())?;
        let mut result = I256::from(n) * SCALE;

        let mut y = x >> n;
        if y == SCALE {
            return Ok(Self(result * sign));
        }

        let mut delta = HALF_SCALE;
        while delta > I256::ZERO {
            y = (y * y) / SCALE;

            // y^2 landed in [2, 4): record the bit and bring y back to [1, 2).
            if y >= DOUBLE_SCALE {
                result += delta;
                y = y >> 1_u32;
            }

            delta = delta >> 1_u32;
        }

        Ok(Self(result * sign))
    }

    /// Natural logarithm, `log2(x) / log2(e)`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `self <= 0`.
    pub fn ln(self) -> MathResult<Self> {
        let log2 = self.log2()?;
        Ok(Self(log2.0 * SCALE / LOG2_E))
    }

    /// Common logarithm.
    ///
    /// Exact powers of ten, from 10^-18 up to 10^58, return their exponent
    /// exactly. Everything else is `log2(x) / log2(10)`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `self <= 0`.
    pub fn log10(self) -> MathResult<Self> {
        if self.0 <= I256::ZERO {
            return Err(reject("log10", MathError::InvalidArgument));
        }

        if let Some(exponent) = power_of_ten_exponent(self.0) {
            return Ok(Self((exponent - I256::from(DECIMALS)) * SCALE));
        }

        let log2 = self.log2()?;
        Ok(Self(log2.0 * SCALE / LOG2_10))
    }
}

/// `Some(j)` when `raw == 10^j`.
fn power_of_ten_exponent(raw: I256) -> Option<I256> {
    let ten = I256::new(10);
    let mut rest = raw;
    let mut exponent = I256::ZERO;
    while rest % ten == I256::ZERO {
        rest /= ten;
        exponent += I256::ONE;
    }
    (rest == I256::ONE).then_some(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sd(raw: i128) -> SD59x18 {
        SD59x18::from_raw(I256::new(raw))
    }

    #[test]
    fn test_log2_of_one_is_zero() {
        assert_eq!(SD59x18::ONE.log2(), Ok(SD59x18::ZERO));
    }

    #[test]
    fn test_log2_powers_of_two() {
        assert_eq!(SD59x18::from_integer(2).log2(), Ok(SD59x18::ONE));
        assert_eq!(SD59x18::from_integer(8).log2(), Ok(SD59x18::from_integer(3)));
        assert_eq!(
            sd(500_000_000_000_000_000).log2(),
            Ok(SD59x18::from_integer(-1))
        );
    }

    #[test]
    fn test_log2_fractional() {
        assert_eq!(SD59x18::from_integer(3).log2(), Ok(sd(1_584_962_500_721_156_166)));
    }

    #[test]
    fn test_log2_extremes() {
        // Smallest positive value, 10^-18
        assert_eq!(sd(1).log2(), Ok(sd(-59_794_705_707_972_522_245)));
        assert_eq!(SD59x18::MAX.log2(), Ok(sd(195_205_294_292_027_477_728)));
    }

    #[test]
    fn test_log2_non_positive() {
        assert_eq!(SD59x18::ZERO.log2(), Err(MathError::InvalidArgument));
        assert_eq!(SD59x18::from_integer(-1).log2(), Err(MathError::InvalidArgument));
        assert_eq!(SD59x18::MIN.log2(), Err(MathError::InvalidArgument));
    }

    #[test]
    fn test_ln() {
        assert_eq!(SD59x18::from_integer(1).ln(), Ok(SD59x18::ZERO));
        assert_eq!(SD59x18::from_integer(2).ln(), Ok(sd(693_147_180_559_945_309)));
        assert_eq!(sd(500_000_000_000_000_000).ln(), Ok(sd(-693_147_180_559_945_309)));
        assert_eq!(SD59x18::from_integer(10).ln(), Ok(sd(2_302_585_092_994_045_674)));
        assert_eq!(SD59x18::E.ln(), Ok(sd(999_999_999_999_999_990)));
        assert_eq!(SD59x18::ZERO.ln(), Err(MathError::InvalidArgument));
    }

    #[test]
    fn test_log10_exact_powers() {
        assert_eq!(SD59x18::ONE.log10(), Ok(SD59x18::ZERO));
        assert_eq!(SD59x18::from_integer(100).log10(), Ok(SD59x18::from_integer(2)));
        assert_eq!(sd(1).log10(), Ok(SD59x18::from_integer(-18)));
        assert_eq!(sd(100_000_000_000_000_000).log10(), Ok(SD59x18::from_integer(-1)));

        let largest = "10000000000000000000000000000000000000000000000000000000000000000000000000000"
            .parse::<I256>()
            .unwrap();
        assert_eq!(
            SD59x18::from_raw(largest).log10(),
            Ok(SD59x18::from_integer(58))
        );
    }

    #[test]
    fn test_log10_approximate() {
        assert_eq!(SD59x18::from_integer(2).log10(), Ok(sd(301_029_995_663_981_195)));
        assert_eq!(SD59x18::from_integer(3).log10(), Ok(sd(477_121_254_719_662_432)));
        assert_eq!(SD59x18::MAX.log10(), Ok(sd(58_762_648_894_315_204_791)));
    }

    #[test]
    fn test_log10_non_positive() {
        assert_eq!(SD59x18::ZERO.log10(), Err(MathError::InvalidArgument));
        assert_eq!(sd(-100).log10(), Err(MathError::InvalidArgument));
    }

    #[test]
    fn test_power_of_ten_exponent() {
        assert_eq!(power_of_ten_exponent(I256::ONE), Some(I256::ZERO));
        assert_eq!(power_of_ten_exponent(I256::new(1000)), Some(I256::new(3)));
        assert_eq!(power_of_ten_exponent(I256::new(2000)), None);
        assert_eq!(power_of_ten_exponent(I256::new(11)), None);
    }
}
