//! The divination entry point.
//!
//! [`divine`] is a total function: any azimuth, timestamp and acceleration
//! produce a rendered six-line figure. It performs no I/O and holds no state.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::config::RenderConfig;
use crate::hexagram::Hexagram;
use crate::render::render;
use crate::seed::derive_seed;
use crate::sensor::SensorSnapshot;

/// Cast a hexagram and render it with the default configuration.
///
/// ```
/// let text = iching_core::divine(0.0, 0, 9.8);
/// assert!(text.starts_with("Seed: 9800\nTimestamp: 0\n"));
/// ```
pub fn divine(azimuth: f64, timestamp_millis: i64, acceleration: f64) -> String {
    Divination::cast(azimuth, timestamp_millis, acceleration).to_string()
}

/// The result of one cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divination {
    seed: i64,
    timestamp: i64,
    hexagram: Hexagram,
}

impl Divination {
    /// Derive the seed from the readings and cast.
    pub fn cast(azimuth: f64, timestamp_millis: i64, acceleration: f64) -> Self {
        let seed = derive_seed(azimuth, timestamp_millis, acceleration);
        tracing::debug!(azimuth, acceleration, timestamp_millis, seed, "derived seed");
        Self::from_seed(seed, timestamp_millis)
    }

    /// Cast from a sanitized sensor snapshot.
    pub fn from_snapshot(snapshot: &SensorSnapshot, timestamp_millis: i64) -> Self {
        Self::cast(snapshot.azimuth(), timestamp_millis, snapshot.acceleration())
    }

    /// Cast directly from a known seed. The timestamp is only reported.
    pub fn from_seed(seed: i64, timestamp_millis: i64) -> Self {
        let hexagram = Hexagram::cast(seed);
        tracing::debug!(seed, lines = ?hexagram.values(), "cast hexagram");
        Self {
            seed,
            timestamp: timestamp_millis,
            hexagram,
        }
    }

    /// The seed that drove the generator.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// The timestamp mixed into the seed, in milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The six cast lines.
    pub fn hexagram(&self) -> &Hexagram {
        &self.hexagram
    }

    /// Render as text with the given options.
    pub fn render(&self, config: &RenderConfig) -> String {
        render(self.seed, self.timestamp, &self.hexagram, config)
    }
}

impl std::fmt::Display for Divination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}

impl Serialize for Divination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Divination", 6)?;
        s.serialize_field("seed", &self.seed)?;
        s.serialize_field("timestamp", &self.timestamp)?;
        s.serialize_field("lines", &self.hexagram.values())?;
        s.serialize_field("changing", &self.hexagram.changing_positions())?;
        s.serialize_field("primary", &self.hexagram.primary())?;
        s.serialize_field("relating", &self.hexagram.relating())?;
        s.end()
    }
}
