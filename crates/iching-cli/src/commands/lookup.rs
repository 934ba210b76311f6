use colored::Colorize;

use iching_core::{Figure, GlyphStyle};

pub fn run(number: u32, style: &str) -> Result<(), String> {
    let style = GlyphStyle::parse(style).map_err(|e| e.to_string())?;
    let figure = Figure::from_king_wen(number).map_err(|e| e.to_string())?;

    println!(
        "  {} {} {}",
        figure.king_wen().to_string().bold(),
        figure.name().bold(),
        format!("({})", figure.english()).dimmed()
    );
    println!();

    for position in (1..=6).rev() {
        let bar = if figure.is_yang(position) {
            style.yang()
        } else {
            style.yin()
        };
        println!("  Line {position}: {bar}");
    }

    println!();
    println!("  {} {}", "Upper:".bold(), figure.upper());
    println!("  {} {}", "Lower:".bold(), figure.lower());

    Ok(())
}
