use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use vose_sampler::{AliasTable, Sampler, corpus};

/// Draw random words from a corpus, weighted by how often they occur.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to corpus.
    #[arg(short, long, value_name = "FILE")]
    path: PathBuf,

    /// Non-negative integer specifying how many samples are desired.
    #[arg(short, long, value_name = "INT", allow_negative_numbers = true)]
    num: i64,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let words = corpus::get_words(&args.path)?;
    // Sorted so a seeded run draws the same words every time.
    let mut dist: Vec<_> = corpus::sample_to_dist(words).into_iter().collect();
    dist.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    let table = AliasTable::from_pairs(dist)?;
    info!(
        "corpus {} has {} distinct words",
        args.path.display(),
        table.len()
    );

    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "\nGenerating {} random samples:\n", args.num)?;
    out.flush()?;

    let samples = match args.seed {
        Some(seed) => Sampler::new(&table, Pcg32::seed_from_u64(seed)).sample_n(args.num)?,
        None => Sampler::new(&table, rand::rng()).sample_n(args.num)?,
    };

    for s in &samples {
        writeln!(out, "{s}")?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nError: {e}");
            ExitCode::FAILURE
        }
    }
}
