//! Plain-text rendering of a cast.

use crate::config::{GlyphStyle, RenderConfig};
use crate::hexagram::Hexagram;
use crate::line::LineValue;

/// Render one line row, e.g. `Line 4 (9): —————— O`.
pub fn line_row(position: usize, line: LineValue, style: GlyphStyle) -> String {
    let bar = if line.is_yang() {
        style.yang()
    } else {
        style.yin()
    };
    let mut row = format!("Line {position} ({}): {bar}", line.value());
    match line {
        LineValue::OldYang => {
            row.push(' ');
            row.push(style.old_yang_marker());
        }
        LineValue::OldYin => {
            row.push(' ');
            row.push(style.old_yin_marker());
        }
        LineValue::YoungYang | LineValue::YoungYin => {}
    }
    row
}

/// Render a complete cast: seed and timestamp header, the six lines from
/// top (last drawn) to bottom (first drawn), then optionally the names.
pub fn render(seed: i64, timestamp: i64, hexagram: &Hexagram, config: &RenderConfig) -> String {
    let mut rows = vec![
        format!("Seed: {seed}"),
        format!("Timestamp: {timestamp}"),
        String::new(),
    ];

    rows.extend(
        hexagram
            .lines()
            .iter()
            .enumerate()
            .rev()
            .map(|(i, line)| line_row(i + 1, *line, config.style)),
    );

    if config.show_names {
        rows.push(String::new());
        rows.push(format!("Primary: {}", hexagram.primary()));
        match hexagram.relating() {
            Some(figure) => rows.push(format!("Relating: {figure}")),
            None => rows.push("Relating: none".to_string()),
        }
    }

    rows.join("\n")
}
