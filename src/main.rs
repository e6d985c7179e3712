use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use coding_notes::{entropy_seed, generate_seeded_table, init_logging, write_csv, DEFAULT_OUTPUT_FILE};

#[derive(Parser)]
#[command(name = "coding-notes")]
#[command(version)]
#[command(about = "Generate synthetic clinical notes labeled with ICD-10 and CPT codes")]
struct Cli {
    /// Seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path, overwritten if it exists
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(entropy_seed);
    tracing::info!(seed, "Generating annotated coding data");

    let table = generate_seeded_table(seed);
    write_csv(&table, &cli.output)?;

    println!(
        "✓ CSV file '{}' with {} annotated samples has been created.",
        cli.output.display(),
        table.len()
    );

    Ok(())
}
