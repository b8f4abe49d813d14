// ============================================================================
// Scale Constants
// Compile-time constants of the signed 59.18-decimal format
// ============================================================================

use ethnum::I256;

/// The fixed-point unit, 10^18.
pub const SCALE: I256 = I256::new(1_000_000_000_000_000_000);

/// Half of the unit, used for round-half-up steps.
pub const HALF_SCALE: I256 = I256::new(500_000_000_000_000_000);

/// Twice the unit; `log2` halves its running square once it reaches this.
pub const DOUBLE_SCALE: I256 = I256::new(2_000_000_000_000_000_000);

/// SCALE squared, 10^36. Dividing it by `x` inverts a fixed-point value.
pub const SCALE_SQUARED: I256 =
    I256::new(1_000_000_000_000_000_000_000_000_000_000_000_000);

/// log2(e) rounded to 18 decimals.
pub const LOG2_E: I256 = I256::new(1_442_695_040_888_963_407);

/// log2(10) rounded to 18 decimals.
pub const LOG2_10: I256 = I256::new(3_321_928_094_887_362_347);

/// Euler's number rounded to 18 decimals.
pub const E: I256 = I256::new(2_718_281_828_459_045_235);

/// Pi rounded to 18 decimals.
pub const PI: I256 = I256::new(3_141_592_653_589_793_238);

/// Largest representable raw value, 2^255 - 1.
pub const MAX: I256 = I256::MAX;

/// Smallest representable raw value, -2^255.
pub const MIN: I256 = I256::MIN;

/// `MAX` with its fractional digits dropped:
/// 57896044618658097711785492504343953926634992332820282019728.000000000000000000
pub const MAX_WHOLE: I256 = I256::from_words(i128::MAX, -792_003_956_564_819_968);

/// `MIN` with its fractional digits dropped:
/// -57896044618658097711785492504343953926634992332820282019728.000000000000000000
pub const MIN_WHOLE: I256 = I256::from_words(i128::MIN, 792_003_956_564_819_968);

/// `exp2` inputs at or above 192 do not fit the 192.64-bit intermediate.
pub const EXP2_MAX_INPUT: I256 = I256::new(192_000_000_000_000_000_000);

/// Below this `exp2` input the result is smaller than 10^-18 and reported as zero.
pub const EXP2_MIN_THRESHOLD: I256 = I256::new(-59_794_705_707_972_522_261);

/// Largest `exp` input whose binary exponent stays below 192.
pub const EXP_MAX_INPUT: I256 = I256::new(133_084_258_667_509_499_440);

/// Below this `exp` input the result is smaller than 10^-18 and reported as zero.
pub const EXP_MIN_THRESHOLD: I256 = I256::new(-41_446_531_673_892_822_322);

/// Number of decimal digits in the fractional part.
pub const DECIMALS: u32 = 18;
