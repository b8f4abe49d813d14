// ============================================================================
// Powers
// Fractional and unsigned integer powers of SD59x18 values
// ============================================================================

use super::common::mul_div_fixed_point;
use super::constants::{MAX, MIN, SCALE};
use super::errors::{reject, MathError, MathResult};
use super::sd59x18::SD59x18;
use ethnum::U256;

impl SD59x18 {
    /// Raises `self` to the power of `y` using `x^y = 2^(log2(x) * y)`.
    ///
    /// - `0^0 == 1`, `0^y == 0` for any other `y`
    /// - `1^y == 1`, `x^0 == 1` and `x^1 == x` are returned exactly
    ///
    /// `x^1` never overflows, even for `x >= 2^192` where `exp2` would.
    ///
    /// # Errors
    /// - `InvalidArgument` if `self` is negative
    /// - Any error of [`log2`](Self::log2), [`mul`](Self::mul) or
    ///   [`exp2`](Self::exp2)
    pub fn pow(self, y: Self) -> MathResult<Self> {
        if self.is_zero() {
            return Ok(if y.is_zero() { Self::ONE } else { Self::ZERO });
        }

        if self.is_negative() {
            return Err(reject("pow", MathError::InvalidArgument));
        }

        if self == Self::ONE || y.is_zero() {
            return Ok(Self::ONE);
        }
        if y == Self::ONE {
            return Ok(self);
        }

        self.log2()?.mul(y)?.exp2()
    }

    /// Raises `self` to an unsigned integer power by squaring.
    ///
    /// Each squaring and multiplication truncates through
    /// [`mul_div_fixed_point`], so at most 256 fixed-point products are
    /// taken. The result is negative only for a negative base and odd `y`.
    /// `x^0 == 1`, including `0^0`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `self` is `MIN`
    /// - `Overflow` if any intermediate magnitude exceeds `MAX`
    pub fn powu(self, y: U256) -> MathResult<Self> {
        if self.0 == MIN {
            return Err(reject("powu", MathError::InvalidArgument));
        }

        let max = MAX.as_u256();
        let odd = |n: U256| n & U256::ONE != U256::ZERO;

        let mut x_abs = self.0.unsigned_abs();
        let mut result_abs = if odd(y) { x_abs } else { SCALE.as_u256() };

        let mut y_aux = y >> 1_u32;
        while y_aux > U256::ZERO {
            x_abs = mul_div_fixed_point(x_abs, x_abs)?;
            if x_abs > max {
                return Err(reject("powu", MathError::Overflow));
            }

            if odd(y_aux) {
                result_abs = mul_div_fixed_point(result_abs, x_abs)?;
                if result_abs > max {
                    return Err(reject("powu", MathError::Overflow));
                }
            }

            y_aux = y_aux >> 1_u32;
        }

        Self::from_magnitude(result_abs, self.is_negative() && odd(y))
            .ok_or_else(|| reject("powu", MathError::Overflow))
    }
}
