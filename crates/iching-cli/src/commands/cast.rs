use std::path::PathBuf;

use iching_core::{Divination, GlyphStyle, RenderConfig, SensorSnapshot};

/// Arguments for `iching cast`.
pub struct CastArgs {
    pub azimuth: f64,
    pub accel: f64,
    pub timestamp: Option<i64>,
    pub seed: Option<i64>,
    pub style: String,
    pub no_names: bool,
    pub json: bool,
    pub output: Option<PathBuf>,
}

pub fn run(args: &CastArgs) -> Result<(), String> {
    let style = GlyphStyle::parse(&args.style).map_err(|e| e.to_string())?;
    let config = RenderConfig::default()
        .with_style(style)
        .with_names(!args.no_names);

    let timestamp = args
        .timestamp
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

    let divination = match args.seed {
        Some(seed) => Divination::from_seed(seed, timestamp),
        None => {
            let snapshot = SensorSnapshot::new(args.azimuth, args.accel);
            tracing::info!(%snapshot, timestamp, "casting from readings");
            Divination::from_snapshot(&snapshot, timestamp)
        }
    };

    let mut content = if args.json {
        serde_json::to_string_pretty(&divination)
            .map_err(|e| format!("JSON serialization error: {e}"))?
    } else {
        divination.render(&config)
    };
    content.push('\n');

    if let Some(path) = &args.output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Cast written to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
