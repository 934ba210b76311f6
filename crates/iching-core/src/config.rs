//! Rendering configuration.

use crate::error::{IchingError, IchingResult};

/// How lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Em-dash bars with `O` (old yang) and `X` (old yin) markers.
    #[default]
    Classic,
    /// Plain hyphens with `o` and `x` markers, for terminals without Unicode.
    Ascii,
}

impl GlyphStyle {
    /// Parse a style from a user-supplied string.
    pub fn parse(s: &str) -> IchingResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "unicode" => Ok(Self::Classic),
            "ascii" | "plain" => Ok(Self::Ascii),
            _ => Err(IchingError::InvalidGlyphStyle(s.to_string())),
        }
    }

    /// Bar for a solid line.
    pub fn yang(self) -> &'static str {
        match self {
            Self::Classic => "——————",
            Self::Ascii => "------",
        }
    }

    /// Bar for a broken line.
    pub fn yin(self) -> &'static str {
        match self {
            Self::Classic => "——  ——",
            Self::Ascii => "--  --",
        }
    }

    /// Marker appended to an old yang line.
    pub fn old_yang_marker(self) -> char {
        match self {
            Self::Classic => 'O',
            Self::Ascii => 'o',
        }
    }

    /// Marker appended to an old yin line.
    pub fn old_yin_marker(self) -> char {
        match self {
            Self::Classic => 'X',
            Self::Ascii => 'x',
        }
    }
}

impl std::str::FromStr for GlyphStyle {
    type Err = IchingError;

    fn from_str(s: &str) -> IchingResult<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for GlyphStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Ascii => write!(f, "ascii"),
        }
    }
}

/// Options for turning a cast into text.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Glyphs used for the six line rows.
    pub style: GlyphStyle,
    /// Append the primary and relating hexagram names.
    pub show_names: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: GlyphStyle::Classic,
            show_names: true,
        }
    }
}

impl RenderConfig {
    /// Set the glyph style.
    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = style;
        self
    }

    /// Show or hide the hexagram names.
    pub fn with_names(mut self, show: bool) -> Self {
        self.show_names = show;
        self
    }
}
