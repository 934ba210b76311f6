pub mod cast;
pub mod lookup;
pub mod stats;
