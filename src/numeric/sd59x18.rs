// ============================================================================
// Signed 59.18-Decimal Fixed Point
// 256-bit fixed-point value with 18 decimals
// ============================================================================

use super::common::{mul_div, mul_div_fixed_point, sqrt};
use super::constants;
use super::constants::{MAX, MIN, SCALE, SCALE_SQUARED};
use super::errors::{reject, MathError, MathResult};
use ethnum::{I256, U256};
use std::ops::{Add, Neg, Sub};

/// Signed 59.18-decimal fixed-point number.
///
/// Internally stores `value × 10^18` as a 256-bit signed integer.
///
/// # Value Range
/// - Minimum: -57896044618658097711785492504343953926634992332820282019728.792003956564819968
/// - Maximum: +57896044618658097711785492504343953926634992332820282019728.792003956564819967
/// - Precision: 0.000000000000000001
///
/// Every operation is a pure function of its inputs and yields the same bits
/// on every platform; no floating point is involved.
///
/// # Example
/// ```
/// use sd59x18::numeric::SD59x18;
///
/// let two = SD59x18::from_integer(2);
/// let ten = SD59x18::from_integer(10);
/// assert_eq!(two.pow(ten).unwrap(), SD59x18::from_integer(1024));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SD59x18(pub(crate) I256);

impl SD59x18 {
    /// The scale factor (10^18)
    pub const SCALE: I256 = SCALE;

    /// Zero value
    pub const ZERO: Self = Self(I256::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self(SCALE);

    /// Euler's number
    pub const E: Self = Self(constants::E);

    /// Pi
    pub const PI: Self = Self(constants::PI);

    /// Maximum representable value
    pub const MAX: Self = Self(MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(MIN);

    /// Largest whole value
    pub const MAX_WHOLE: Self = Self(constants::MAX_WHOLE);

    /// Smallest whole value
    pub const MIN_WHOLE: Self = Self(constants::MIN_WHOLE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled by 10^18).
    #[inline]
    pub const fn from_raw(raw: I256) -> Self {
        Self(raw)
    }

    /// Create from a whole number, `n × 10^18`.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value falls outside `[MIN, MAX]`.
    #[inline]
    pub fn from_int(n: I256) -> MathResult<Self> {
        n.checked_mul(SCALE)
            .map(Self)
            .ok_or_else(|| reject("from_int", MathError::Overflow))
    }

    /// Create from a machine integer. Never overflows: every `i64` scaled by
    /// 10^18 fits in 256 bits.
    #[inline]
    pub fn from_integer(n: i64) -> Self {
        Self(I256::from(n) * SCALE)
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The integer part (can be negative)
    /// - `fraction`: The fractional digits (must be < 10^18, always positive)
    ///
    /// # Example
    /// ```
    /// use sd59x18::numeric::SD59x18;
    /// use ethnum::I256;
    ///
    /// // 123.456
    /// let x = SD59x18::from_parts(I256::new(123), 456_000_000_000_000_000).unwrap();
    /// assert_eq!(x.to_string(), "123.456000000000000000");
    /// ```
    pub fn from_parts(integer: I256, fraction: u64) -> MathResult<Self> {
        let fraction = I256::from(fraction);
        if fraction >= SCALE {
            return Err(reject("from_parts", MathError::InvalidInput));
        }

        let int_scaled = integer
            .checked_mul(SCALE)
            .ok_or_else(|| reject("from_parts", MathError::Overflow))?;

        let frac_signed = if integer < I256::ZERO {
            -fraction
        } else {
            fraction
        };

        int_scaled
            .checked_add(frac_signed)
            .map(Self)
            .ok_or_else(|| reject("from_parts", MathError::Overflow))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 10^18).
    #[inline]
    pub const fn raw_value(self) -> I256 {
        self.0
    }

    /// Whole part of the value, truncated toward zero.
    #[inline]
    pub fn to_int(self) -> I256 {
        self.0 / SCALE
    }

    /// Alias of [`to_int`](Self::to_int).
    #[inline]
    pub fn integer_part(self) -> I256 {
        self.to_int()
    }

    /// Get the fractional digits as a positive value.
    #[inline]
    pub fn fractional_part(self) -> u64 {
        (self.0 % SCALE).unsigned_abs().as_u64()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == I256::ZERO
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > I256::ZERO
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < I256::ZERO
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Greatest whole value less than or equal to `self` (toward -∞).
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `self < MIN_WHOLE`, whose floor is not
    /// representable.
    pub fn floor(self) -> MathResult<Self> {
        if self.0 < constants::MIN_WHOLE {
            return Err(reject("floor", MathError::InvalidArgument));
        }

        let remainder = self.0 % SCALE;
        if remainder == I256::ZERO {
            Ok(self)
        } else if self.is_negative() {
            // remainder is negative here
            Ok(Self(self.0 - remainder - SCALE))
        } else {
            Ok(Self(self.0 - remainder))
        }
    }

    /// Least whole value greater than or equal to `self` (toward +∞).
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `self > MAX_WHOLE`.
    pub fn ceil(self) -> MathResult<Self> {
        if self.0 > constants::MAX_WHOLE {
            return Err(reject("ceil", MathError::InvalidArgument));
        }

        let remainder = self.0 % SCALE;
        if remainder == I256::ZERO {
            return Ok(self);
        }

        let truncated = self.0 - remainder;
        if self.is_positive() {
            Ok(Self(truncated + SCALE))
        } else {
            Ok(Self(truncated))
        }
    }

    /// Fractional part, carrying the sign of `self`: `frac(-1.25) == -0.25`.
    #[inline]
    pub fn frac(self) -> Self {
        Self(self.0 % SCALE)
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for `MIN`, which has no positive counterpart.
    #[inline]
    pub fn abs(self) -> MathResult<Self> {
        if self.0 == MIN {
            Err(reject("abs", MathError::InvalidArgument))
        } else if self.is_negative() {
            Ok(Self(-self.0))
        } else {
            Ok(self)
        }
    }

    /// Arithmetic mean rounded toward -∞, without materializing `x + y`.
    #[inline]
    pub fn avg(self, rhs: Self) -> Self {
        // Both halves round toward -∞; the lost halves add up to one unit
        // exactly when both operands are odd.
        let halves = (self.0 >> 1_u32) + (rhs.0 >> 1_u32);
        Self(halves + (self.0 & rhs.0 & I256::ONE))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| reject("checked_add", MathError::Overflow))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| reject("checked_sub", MathError::Overflow))
    }

    /// Fixed-point multiplication, truncated toward zero.
    ///
    /// The magnitudes are multiplied into a 512-bit intermediate before the
    /// division by 10^18, so no precision is lost to intermediate overflow.
    ///
    /// # Errors
    /// - `InvalidArgument` if either operand is `MIN`
    /// - `Overflow` if the product is out of range
    pub fn mul(self, rhs: Self) -> MathResult<Self> {
        if self.0 == MIN || rhs.0 == MIN {
            return Err(reject("mul", MathError::InvalidArgument));
        }

        let magnitude = mul_div_fixed_point(self.0.unsigned_abs(), rhs.0.unsigned_abs())?;
        Self::from_magnitude(magnitude, self.is_negative() != rhs.is_negative())
            .ok_or_else(|| reject("mul", MathError::Overflow))
    }

    /// Fixed-point division, truncated toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `InvalidArgument` if either operand is `MIN`
    /// - `Overflow` if the quotient is out of range
    pub fn div(self, rhs: Self) -> MathResult<Self> {
        if rhs.is_zero() {
            return Err(reject("div", MathError::DivisionByZero));
        }
        if self.0 == MIN || rhs.0 == MIN {
            return Err(reject("div", MathError::InvalidArgument));
        }

        let magnitude = mul_div(self.0.unsigned_abs(), SCALE.as_u256(), rhs.0.unsigned_abs())?;
        Self::from_magnitude(magnitude, self.is_negative() != rhs.is_negative())
            .ok_or_else(|| reject("div", MathError::Overflow))
    }

    /// Reciprocal `1 / self`, truncated toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for zero.
    pub fn inv(self) -> MathResult<Self> {
        if self.is_zero() {
            return Err(reject("inv", MathError::DivisionByZero));
        }
        Ok(Self(SCALE_SQUARED / self.0))
    }

    /// Geometric mean `sqrt(x * y)`.
    ///
    /// The raw product of two scaled values carries a 10^36 factor, so its
    /// integer square root is already scaled by 10^18.
    ///
    /// # Errors
    /// - `Overflow` if `x * y` does not fit in 256 bits
    /// - `InvalidArgument` if `x * y` is negative
    pub fn gm(self, rhs: Self) -> MathResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }

        let product = self
            .0
            .checked_mul(rhs.0)
            .ok_or_else(|| reject("gm", MathError::Overflow))?;
        if product < I256::ZERO {
            return Err(reject("gm", MathError::InvalidArgument));
        }

        sqrt(product).map(Self)
    }

    /// Apply a sign to an unsigned magnitude, or `None` if it does not fit.
    pub(crate) fn from_magnitude(magnitude: U256, negative: bool) -> Option<Self> {
        let limit = if negative {
            MIN.unsigned_abs()
        } else {
            MAX.as_u256()
        };
        if magnitude > limit {
            return None;
        }

        // 2^255 wraps to MIN, which is its own negation.
        let value = magnitude.as_i256();
        Some(Self(if negative { value.wrapping_neg() } else { value }))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<i32> for SD59x18 {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl Neg for SD59x18 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in production)
impl Add for SD59x18 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("SD59x18 addition overflow")
    }
}

impl Sub for SD59x18 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("SD59x18 subtraction overflow")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sd(raw: i128) -> SD59x18 {
        SD59x18::from_raw(I256::new(raw))
    }

    #[test]
    fn test_constants() {
        assert_eq!(SD59x18::SCALE, I256::new(1_000_000_000_000_000_000));
        assert_eq!(SD59x18::ZERO.raw_value(), I256::ZERO);
        assert_eq!(SD59x18::ONE.raw_value(), SCALE);
        assert_eq!(SD59x18::MAX.raw_value(), I256::MAX);
        assert_eq!(SD59x18::MIN.raw_value(), I256::MIN);
    }

    #[test]
    fn test_from_int() {
        let x = SD59x18::from_int(I256::new(100)).unwrap();
        assert_eq!(x.raw_value(), I256::new(100_000_000_000_000_000_000));
        assert_eq!(x.to_int(), I256::new(100));
        assert_eq!(x.fractional_part(), 0);
    }

    #[test]
    fn test_from_int_overflow() {
        let largest = constants::MAX_WHOLE / SCALE;
        assert!(SD59x18::from_int(largest).is_ok());
        assert_eq!(
            SD59x18::from_int(largest + I256::ONE),
            Err(MathError::Overflow)
        );
        assert!(SD59x18::from_int(-largest).is_ok());
        assert_eq!(
            SD59x18::from_int(-largest - I256::ONE),
            Err(MathError::Overflow)
        );
    }

    #[test]
    fn test_to_int_truncates_toward_zero() {
        assert_eq!(sd(2_500_000_000_000_000_000).to_int(), I256::new(2));
        assert_eq!(sd(-2_500_000_000_000_000_000).to_int(), I256::new(-2));
        assert_eq!(sd(-999_999_999_999_999_999).to_int(), I256::ZERO);
    }

    #[test]
    fn test_from_parts() {
        // 123.456
        let x = SD59x18::from_parts(I256::new(123), 456_000_000_000_000_000).unwrap();
        assert_eq!(x.to_int(), I256::new(123));
        assert_eq!(x.fractional_part(), 456_000_000_000_000_000);

        // -5.5
        let y = SD59x18::from_parts(I256::new(-5), 500_000_000_000_000_000).unwrap();
        assert_eq!(y, sd(-5_500_000_000_000_000_000));
        assert!(y.is_negative());
    }

    #[test]
    fn test_from_parts_invalid() {
        let result = SD59x18::from_parts(I256::ONE, 1_000_000_000_000_000_000);
        assert_eq!(result, Err(MathError::InvalidInput));
    }

    #[test]
    fn test_floor() {
        assert_eq!(sd(2_700_000_000_000_000_000).floor(), Ok(sd(2_000_000_000_000_000_000)));
        assert_eq!(sd(-2_700_000_000_000_000_000).floor(), Ok(sd(-3_000_000_000_000_000_000)));
        assert_eq!(sd(-300_000_000_000_000_000).floor(), Ok(sd(-1_000_000_000_000_000_000)));
        assert_eq!(sd(300_000_000_000_000_000).floor(), Ok(SD59x18::ZERO));
        assert_eq!(SD59x18::from_integer(-4).floor(), Ok(SD59x18::from_integer(-4)));
    }

    #[test]
    fn test_ceil() {
        assert_eq!(sd(2_100_000_000_000_000_000).ceil(), Ok(sd(3_000_000_000_000_000_000)));
        assert_eq!(sd(-2_100_000_000_000_000_000).ceil(), Ok(sd(-2_000_000_000_000_000_000)));
        assert_eq!(sd(-300_000_000_000_000_000).ceil(), Ok(SD59x18::ZERO));
        assert_eq!(SD59x18::from_integer(7).ceil(), Ok(SD59x18::from_integer(7)));
    }

    #[test]
    fn test_rounding_bounds() {
        assert_eq!(SD59x18::MIN_WHOLE.floor(), Ok(SD59x18::MIN_WHOLE));
        assert_eq!(SD59x18::MIN.floor(), Err(MathError::InvalidArgument));
        assert_eq!(SD59x18::MAX_WHOLE.ceil(), Ok(SD59x18::MAX_WHOLE));
        assert_eq!(SD59x18::MAX.ceil(), Err(MathError::InvalidArgument));
        // Below MAX_WHOLE is fine for floor and vice versa
        assert_eq!(SD59x18::MAX.floor(), Ok(SD59x18::MAX_WHOLE));
        assert_eq!(SD59x18::MIN.ceil(), Ok(SD59x18::MIN_WHOLE));
    }

    #[test]
    fn test_frac() {
        assert_eq!(sd(1_250_000_000_000_000_000).frac(), sd(250_000_000_000_000_000));
        assert_eq!(sd(-1_250_000_000_000_000_000).frac(), sd(-250_000_000_000_000_000));
        assert_eq!(SD59x18::from_integer(3).frac(), SD59x18::ZERO);
    }

    #[test]
    fn test_abs() {
        assert_eq!(SD59x18::from_integer(-100).abs(), Ok(SD59x18::from_integer(100)));
        assert_eq!(SD59x18::from_integer(100).abs(), Ok(SD59x18::from_integer(100)));
        assert_eq!(SD59x18::MIN.abs(), Err(MathError::InvalidArgument));
        assert_eq!(
            sd(-i128::MAX).abs().unwrap().raw_value(),
            I256::new(i128::MAX)
        );
    }

    #[test]
    fn test_avg() {
        assert_eq!(sd(3).avg(sd(5)), sd(4));
        assert_eq!(sd(3).avg(sd(4)), sd(3));
        // floor(-0.5) == -1, floor(-3.5) == -4
        assert_eq!(sd(-1).avg(sd(0)), sd(-1));
        assert_eq!(sd(-3).avg(sd(-4)), sd(-4));
        assert_eq!(sd(-3).avg(sd(-5)), sd(-4));
        // No intermediate overflow at the extremes
        assert_eq!(SD59x18::MAX.avg(SD59x18::MAX), SD59x18::MAX);
        assert_eq!(SD59x18::MIN.avg(SD59x18::MIN), SD59x18::MIN);
        assert_eq!(SD59x18::MAX.avg(SD59x18::MIN), sd(-1));
    }

    #[test]
    fn test_checked_add_sub() {
        let a = SD59x18::from_integer(100);
        let b = SD59x18::from_integer(30);
        assert_eq!(a.checked_add(b), Ok(SD59x18::from_integer(130)));
        assert_eq!(b.checked_sub(a), Ok(SD59x18::from_integer(-70)));
        assert_eq!(SD59x18::MAX.checked_add(SD59x18::ONE), Err(MathError::Overflow));
        assert_eq!(SD59x18::MIN.checked_sub(SD59x18::ONE), Err(MathError::Overflow));
    }

    #[test]
    fn test_mul() {
        // 2.5 * 4.0 = 10.0
        let a = sd(2_500_000_000_000_000_000);
        assert_eq!(a.mul(SD59x18::from_integer(4)), Ok(SD59x18::from_integer(10)));

        // 1.5 * -1.5 = -2.25
        let x = sd(1_500_000_000_000_000_000);
        assert_eq!(x.mul(-x), Ok(sd(-2_250_000_000_000_000_000)));
        assert_eq!((-x).mul(-x), Ok(sd(2_250_000_000_000_000_000)));
    }

    #[test]
    fn test_mul_truncates_toward_zero() {
        let third = sd(333_333_333_333_333_333);
        let three = SD59x18::from_integer(3);
        assert_eq!(third.mul(three), Ok(sd(999_999_999_999_999_999)));
        assert_eq!((-third).mul(three), Ok(sd(-999_999_999_999_999_999)));
        assert_eq!(sd(1).mul(sd(1)), Ok(SD59x18::ZERO));
    }

    #[test]
    fn test_mul_min_rejected() {
        assert_eq!(
            SD59x18::MIN.mul(SD59x18::ONE),
            Err(MathError::InvalidArgument)
        );
        assert_eq!(
            SD59x18::ONE.mul(SD59x18::MIN),
            Err(MathError::InvalidArgument)
        );
    }

    #[test]
    fn test_mul_overflow() {
        assert_eq!(
            SD59x18::MAX.mul(SD59x18::from_integer(2)),
            Err(MathError::Overflow)
        );
        assert_eq!(SD59x18::MAX.mul(SD59x18::ONE), Ok(SD59x18::MAX));
        assert_eq!(SD59x18::MAX.mul(-SD59x18::ONE), Ok(-SD59x18::MAX));
    }

    #[test]
    fn test_div() {
        let one = SD59x18::ONE;
        let three = SD59x18::from_integer(3);
        assert_eq!(one.div(three), Ok(sd(333_333_333_333_333_333)));
        assert_eq!((-one).div(three), Ok(sd(-333_333_333_333_333_333)));
        assert_eq!(
            SD59x18::from_integer(10).div(sd(2_500_000_000_000_000_000)),
            Ok(SD59x18::from_integer(4))
        );
    }

    #[test]
    fn test_div_errors() {
        assert_eq!(SD59x18::ONE.div(SD59x18::ZERO), Err(MathError::DivisionByZero));
        assert_eq!(SD59x18::MIN.div(SD59x18::ONE), Err(MathError::InvalidArgument));
        assert_eq!(SD59x18::MAX.div(sd(1)), Err(MathError::Overflow));
    }

    #[test]
    fn test_inv() {
        assert_eq!(SD59x18::from_integer(3).inv(), Ok(sd(333_333_333_333_333_333)));
        assert_eq!(sd(500_000_000_000_000_000).inv(), Ok(SD59x18::from_integer(2)));
        assert_eq!(SD59x18::ZERO.inv(), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_gm() {
        let two = SD59x18::from_integer(2);
        let eight = SD59x18::from_integer(8);
        assert_eq!(two.gm(eight), Ok(SD59x18::from_integer(4)));
        assert_eq!((-two).gm(-eight), Ok(SD59x18::from_integer(4)));
        assert_eq!(SD59x18::ZERO.gm(SD59x18::MAX), Ok(SD59x18::ZERO));
        assert_eq!((-two).gm(eight), Err(MathError::InvalidArgument));
        assert_eq!(SD59x18::MAX.gm(two), Err(MathError::Overflow));
    }

    #[test]
    fn test_negation() {
        let x = SD59x18::from_integer(100);
        assert_eq!((-x).to_int(), I256::new(-100));
        assert_eq!((-(-x)).to_int(), I256::new(100));
    }

    #[test]
    fn test_comparison() {
        let a = SD59x18::from_integer(100);
        let b = SD59x18::from_integer(-50);
        assert!(a > b);
        assert!(b < a);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn test_from_i32() {
        assert_eq!(SD59x18::from(7), SD59x18::from_integer(7));
        assert_eq!(SD59x18::from(-7).to_int(), I256::new(-7));
    }

    #[test]
    fn test_operators() {
        let a = SD59x18::from_integer(5);
        let b = SD59x18::from_integer(3);
        assert_eq!(a + b, SD59x18::from_integer(8));
        assert_eq!(b - a, SD59x18::from_integer(-2));
    }
}
