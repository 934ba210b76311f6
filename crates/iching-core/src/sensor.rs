//! Sensor snapshots: the boundary where raw readings are sanitized.
//!
//! The engine never sees live sensor state. Callers take a
//! [`SensorSnapshot`] of the latest readings and pass it by value.

use serde::{Deserialize, Serialize};

/// An immutable reading of compass azimuth and acceleration magnitude.
///
/// Deserialized snapshots pass through [`SensorSnapshot::new`] and are
/// sanitized the same way.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawSnapshot")]
pub struct SensorSnapshot {
    azimuth: f64,
    acceleration: f64,
}

impl SensorSnapshot {
    /// Capture a snapshot from already-derived readings.
    ///
    /// Non-finite values become 0.0 and a negative acceleration is clamped
    /// to 0.0. The azimuth is kept as given, so 359.999 and 0.0 stay distinct.
    pub fn new(azimuth: f64, acceleration: f64) -> Self {
        let azimuth = finite_or_zero(azimuth);
        let acceleration = finite_or_zero(acceleration).max(0.0);
        Self {
            azimuth,
            acceleration,
        }
    }

    /// Capture a snapshot from raw device values: the accelerometer vector
    /// (m/s²) and the orientation azimuth in radians (-π..=π).
    ///
    /// The magnitude is the square root of the single-precision sum of
    /// squares. The azimuth is converted to degrees and shifted into
    /// [0, 360).
    pub fn from_device(gravity: [f32; 3], azimuth_radians: f32) -> Self {
        let [x, y, z] = gravity;
        let acceleration = f64::from(x * x + y * y + z * z).sqrt();
        let mut degrees = f64::from(azimuth_radians).to_degrees();
        if degrees < 0.0 {
            degrees += 360.0;
        }
        Self::new(degrees, acceleration)
    }

    /// Azimuth in degrees.
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Acceleration magnitude in m/s².
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }
}

#[derive(Deserialize)]
struct RawSnapshot {
    azimuth: f64,
    acceleration: f64,
}

impl From<RawSnapshot> for SensorSnapshot {
    fn from(raw: RawSnapshot) -> Self {
        Self::new(raw.azimuth, raw.acceleration)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

impl std::fmt::Display for SensorSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "azimuth {:.1}° | acceleration {:.3}",
            self.azimuth, self.acceleration
        )
    }
}
