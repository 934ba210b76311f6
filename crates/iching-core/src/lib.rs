//! Coin-toss I Ching divination engine.
//!
//! Mixes a compass azimuth, a wall-clock timestamp and an acceleration
//! magnitude into an integer seed, feeds that seed to a pinned 48-bit
//! linear congruential generator, and tosses three coins per line to build
//! a six-line hexagram. Every step is fully specified so that identical
//! inputs produce bit-identical results on any platform.

pub mod config;
pub mod divination;
pub mod error;
pub mod hexagram;
pub mod line;
pub mod render;
pub mod rng;
pub mod seed;
pub mod sensor;

pub use config::{GlyphStyle, RenderConfig};
pub use divination::{Divination, divine};
pub use error::{IchingError, IchingResult};
pub use hexagram::{Figure, Hexagram, Trigram};
pub use line::LineValue;
pub use rng::Lcg48;
pub use seed::derive_seed;
pub use sensor::SensorSnapshot;
