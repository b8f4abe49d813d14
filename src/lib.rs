// ============================================================================
// SD59x18 Library
// Deterministic signed 59.18-decimal fixed-point math
// ============================================================================

//! # SD59x18
//!
//! Signed 59.18-decimal fixed-point arithmetic on 256-bit integers.
//!
//! ## Features
//!
//! - **Integer-only**: no floating point anywhere, bit-identical results on every platform
//! - **Lossless multiply/divide** through a 512-bit intermediate
//! - **Transcendental functions**: `log2`, `ln`, `log10`, `exp2`, `exp`, `pow`, `powu`
//! - **Rounding**: `floor`, `ceil`, `frac`, `avg`, `abs`
//! - **Raw integer primitives**: most-significant-bit scan and integer square root
//!
//! ## Example
//!
//! ```rust
//! use sd59x18::prelude::*;
//!
//! let two = SD59x18::from_integer(2);
//!
//! // 2^10
//! let kilo = two.pow(SD59x18::from_integer(10)).unwrap();
//! assert_eq!(kilo, SD59x18::from_integer(1024));
//!
//! // log2(1) == 0, exp2(0) == 1
//! assert_eq!(SD59x18::ONE.log2().unwrap(), SD59x18::ZERO);
//! assert_eq!(SD59x18::ZERO.exp2().unwrap(), SD59x18::ONE);
//!
//! // The square root works on raw integers and does not rescale
//! assert_eq!(sqrt(I256::new(16)).unwrap(), I256::new(4));
//!
//! // MIN has no absolute value and is rejected by multiplication
//! assert_eq!(SD59x18::MIN.mul(SD59x18::ONE), Err(MathError::InvalidArgument));
//! ```

pub mod numeric;

pub use ethnum::{I256, U256};

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        most_significant_bit, mul_div, mul_div_fixed_point, sqrt, MathError, MathResult,
        SD59x18,
    };
    pub use ethnum::{I256, U256};
}
