// ============================================================================
// Numeric Module
// Signed 59.18-decimal fixed-point arithmetic on 256-bit integers
// ============================================================================
//
// This module provides:
// - SD59x18: signed fixed-point value scaled by 10^18
// - common: raw integer primitives (MSB scan, 512-bit mul/div, integer sqrt)
// - constants: the scale constants and function domain bounds
// - MathError: error kinds for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Bit-identical results on every platform
// - No global mutable state; every operation is a pure function

pub mod common;
pub mod constants;
mod errors;
mod exp;
mod format;
mod log;
mod pow;
mod sd59x18;

pub use common::{most_significant_bit, mul_div, mul_div_fixed_point, sqrt};
pub use errors::{MathError, MathResult};
pub use sd59x18::SD59x18;
