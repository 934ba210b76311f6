use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use iching_core::{Hexagram, LineValue};

pub fn run(samples: u32, rng_seed: u64) -> Result<(), String> {
    if samples == 0 {
        return Err("samples must be at least 1".into());
    }

    let mut rng = StdRng::seed_from_u64(rng_seed);
    let mut counts = [0u64; 4];
    let mut changing_casts = 0u64;

    for _ in 0..samples {
        let hexagram = Hexagram::cast(rng.random::<i64>());
        for line in hexagram.lines() {
            counts[usize::from(line.value() - 6)] += 1;
        }
        if hexagram.relating().is_some() {
            changing_casts += 1;
        }
    }

    let total_lines = u64::from(samples) * 6;
    tracing::debug!(samples, total_lines, "sampling finished");

    println!(
        "  {} {}",
        "Line Frequencies".bold(),
        format!("({samples} casts, rng seed={rng_seed})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Line", "Kind", "Count", "Observed", "Expected"]);

    for (line, count) in LineValue::ALL.iter().zip(counts) {
        let observed = count as f64 / total_lines as f64;
        let expected = line.probability();
        table.add_row(vec![
            line.value().to_string(),
            line.to_string(),
            count.to_string(),
            format!("{observed:.4}"),
            format!("{expected:.4}"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {changing_casts} of {samples} casts had at least one changing line");

    Ok(())
}
