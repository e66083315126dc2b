//! Sampling CLI for the token random engine
//!
//! Seeds a generator from a token hash (or a freshly generated one) and
//! prints a sample of draws, either as plain lines or as a JSON report.
//! Handy for eyeballing a token's stream and for diffing streams across
//! implementations.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use token_random_core_rs::{generate_random_hash, TokenRng};

/// Fixed sample inputs, so reports from different runs stay comparable.
const PICK_ITEMS: [u32; 2] = [25, 10];
const WEIGHTS: [f64; 4] = [100.0, 50.0, 25.0, 10.0];

#[derive(Parser)]
#[command(
    name = "token-random",
    about = "Print a deterministic sample of draws for a token hash"
)]
struct Args {
    /// Token hash to seed from ("0x" + even number of hex digits);
    /// a fresh random hash is generated when omitted
    #[arg(long)]
    hash: Option<String>,

    /// Number of uniform draws to include in the sample
    #[arg(long, default_value_t = 9)]
    count: usize,

    /// Emit the sample as a JSON report instead of plain lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SampleReport {
    hash: String,
    values: Vec<f64>,
    pick: Option<u32>,
    weighted: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let hash = args.hash.unwrap_or_else(generate_random_hash);
    let mut rng =
        TokenRng::from_hash(&hash).with_context(|| format!("cannot seed from {hash:?}"))?;

    let values: Vec<f64> = (0..args.count).map(|_| rng.next_f64()).collect();
    let pick = rng.pick(&PICK_ITEMS).copied();
    let weighted = rng.weighted(&WEIGHTS);

    let report = SampleReport {
        hash,
        values,
        pick,
        weighted,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.hash);
        for value in &report.values {
            println!("{value}");
        }
        if let Some(picked) = report.pick {
            println!("pick: {picked}");
        }
        println!("weighted: {}", report.weighted);
    }

    Ok(())
}
