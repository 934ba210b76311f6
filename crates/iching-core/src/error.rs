//! Error types for the divination engine.

/// Errors that can occur when building figures from untrusted input.
///
/// Casting itself never fails; these only arise when callers hand in
/// line values, hexagram numbers or option strings from the outside.
#[derive(Debug, thiserror::Error)]
pub enum IchingError {
    /// A line value outside {6, 7, 8, 9}.
    #[error("invalid line value: {0} (expected 6, 7, 8 or 9)")]
    InvalidLineValue(u8),

    /// A hexagram needs exactly six lines.
    #[error("a hexagram has six lines, got {0}")]
    InvalidLineCount(usize),

    /// A King Wen sequence number outside 1..=64.
    #[error("hexagram number must be between 1 and 64, got {0}")]
    InvalidHexagramNumber(u32),

    /// An unrecognised glyph style name.
    #[error("unknown glyph style: \"{0}\". Use: classic, ascii")]
    InvalidGlyphStyle(String),
}

/// Convenience result type for engine operations.
pub type IchingResult<T> = Result<T, IchingError>;
