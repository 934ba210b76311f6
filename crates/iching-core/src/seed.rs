//! Seed derivation from sensor readings and time.
//!
//! The seed is
//!
//! ```text
//! fold(trunc(azimuth * 100)) + timestamp_millis + fold(trunc(acceleration * 1000))
//! ```
//!
//! summed with wrapping 64-bit arithmetic. `trunc` rounds toward zero and
//! saturates at the `i64` bounds (NaN becomes 0). `fold` is the 64 to 32 bit
//! fold `value ^ (value >>> 32)` keeping the low 32 bits, the same mixing used
//! by `java.lang.Long#hashCode`. The scaling constants are fixed.

/// Scale applied to the azimuth (degrees) before truncation.
pub const AZIMUTH_SCALE: f64 = 100.0;

/// Scale applied to the acceleration magnitude before truncation.
pub const ACCELERATION_SCALE: f64 = 1000.0;

/// Fold a 64-bit integer into 32 bits by xoring its high half into its low half.
pub fn fold_hash(value: i64) -> i32 {
    let bits = value as u64;
    (bits ^ (bits >> 32)) as u32 as i32
}

/// Multiply `x` by `factor` and truncate toward zero.
///
/// Out-of-range products saturate to `i64::MIN`/`i64::MAX` and NaN maps to 0,
/// so non-finite readings never panic.
pub fn scale_truncate(x: f64, factor: f64) -> i64 {
    (x * factor) as i64
}

/// Derive the casting seed from an azimuth in degrees, a timestamp in
/// milliseconds and an acceleration magnitude.
///
/// No input is validated. Out-of-range values simply yield different seeds.
pub fn derive_seed(azimuth: f64, timestamp_millis: i64, acceleration: f64) -> i64 {
    let azimuth_part = i64::from(fold_hash(scale_truncate(azimuth, AZIMUTH_SCALE)));
    let accel_part = i64::from(fold_hash(scale_truncate(acceleration, ACCELERATION_SCALE)));
    azimuth_part
        .wrapping_add(timestamp_millis)
        .wrapping_add(accel_part)
}
