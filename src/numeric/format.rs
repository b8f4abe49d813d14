// ============================================================================
// Conversions
// Text, rust_decimal and serde boundaries for SD59x18
// ============================================================================

use super::constants::{DECIMALS, SCALE};
use super::errors::{reject, MathError, MathResult};
use super::sd59x18::SD59x18;
use ethnum::{I256, U256};
use std::fmt;

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for SD59x18 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SD59x18({}, raw={})", self, self.0)
    }
}

impl fmt::Display for SD59x18 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.to_int();
        let frac_part = self.fractional_part();
        let width = DECIMALS as usize;

        if self.is_negative() && int_part == I256::ZERO {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for SD59x18 {
    type Err = MathError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123.000000000000000000
    /// - "123.456" -> 123.456000000000000000
    /// - "-0.001" -> -0.001000000000000000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal_str(s).map_err(|error| reject("from_str", error))
    }
}

/// Optional sign, integer digits and up to 18 fractional digits.
fn parse_decimal_str(s: &str) -> MathResult<SD59x18> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MathError::InvalidInput);
    }

    let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s)
    };

    let (int_str, frac_str) = if let Some(pos) = s.find('.') {
        (&s[..pos], Some(&s[pos + 1..]))
    } else {
        (s, None)
    };

    if int_str.is_empty() && frac_str.is_none_or(str::is_empty) {
        return Err(MathError::InvalidInput);
    }
    if !int_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MathError::InvalidInput);
    }

    let int_val = if int_str.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_str, 10).map_err(|_| MathError::Overflow)?
    };

    let frac_val = match frac_str {
        None | Some("") => 0,
        Some(frac) if !frac.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(MathError::InvalidInput)
        }
        Some(frac) if frac.len() > DECIMALS as usize => {
            return Err(MathError::PrecisionLoss)
        }
        Some(frac) => {
            // Pad with zeros to 18 digits
            let padded = format!("{:0<width$}", frac, width = DECIMALS as usize);
            padded.parse::<u64>().map_err(|_| MathError::InvalidInput)?
        }
    };

    // Build the magnitude first so that MIN, whose magnitude exceeds MAX,
    // still parses.
    let magnitude = int_val
        .checked_mul(SCALE.as_u256())
        .and_then(|scaled| scaled.checked_add(U256::from(frac_val)))
        .ok_or(MathError::Overflow)?;

    SD59x18::from_magnitude(magnitude, is_negative).ok_or(MathError::Overflow)
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl SD59x18 {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if the decimal carries significant digits
    /// beyond the 18th decimal place.
    pub fn from_decimal(d: rust_decimal::Decimal) -> MathResult<Self> {
        let mantissa = I256::new(d.mantissa());
        let scale = d.scale();

        let raw = if scale <= DECIMALS {
            mantissa * pow10(DECIMALS - scale)
        } else {
            let divisor = pow10(scale - DECIMALS);
            if mantissa % divisor != I256::ZERO {
                return Err(reject("from_decimal", MathError::PrecisionLoss));
            }
            mantissa / divisor
        };

        Ok(Self(raw))
    }

    /// Convert to `rust_decimal::Decimal` with 18 decimal places.
    ///
    /// This is intended for display/debugging only.
    ///
    /// # Errors
    /// Returns `Overflow` if the raw value exceeds the 96-bit decimal mantissa.
    pub fn to_decimal(self) -> MathResult<rust_decimal::Decimal> {
        let (hi, lo) = self.0.into_words();
        // The value fits in an i128 iff the high word is the sign extension of the low word.
        if hi != lo >> 127 {
            return Err(reject("to_decimal", MathError::Overflow));
        }
        rust_decimal::Decimal::try_from_i128_with_scale(lo, DECIMALS)
            .map_err(|_| reject("to_decimal", MathError::Overflow))
    }
}

/// 10^n for n <= 28
fn pow10(n: u32) -> I256 {
    (0..n).fold(I256::ONE, |acc, _| acc * I256::new(10))
}

// ============================================================================
// Serde (human-readable as a decimal string, binary as raw bytes)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SD59x18 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serde::Serialize::serialize(&self.0.to_le_bytes(), serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SD59x18 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = <String as serde::Deserialize>::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <[u8; 32] as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self(I256::from_le_bytes(bytes)))
        }
    }
}
