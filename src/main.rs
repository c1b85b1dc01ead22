//! Soundshift - Entry Point
//!
//! Evolves a word list through randomly chosen sound changes and prints the
//! changes applied and the resulting words.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use soundshift::changes::{default_catalog, load_catalog};
use soundshift::orthography::{load_orthography, Orthography};
use soundshift::phonology::{load_category_table, CategoryTable};
use soundshift::{EvolutionConfig, EvolveError, Evolver, Result};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Soundshift - stochastic sound change simulator
#[derive(Parser, Debug)]
#[command(name = "soundshift")]
#[command(about = "Apply random sound changes to a word list, one per generation")]
struct Args {
    /// Words to evolve, in display spelling
    words: Vec<String>,

    /// File with one word per line (blank lines are skipped)
    #[arg(long)]
    words_file: Option<PathBuf>,

    /// Number of generations to aim for
    #[arg(long, short = 'g', default_value_t = 10)]
    generations: usize,

    /// Maximum step attempts, productive or not
    #[arg(long, default_value_t = soundshift::core::DEFAULT_ATTEMPTS_LIMIT)]
    attempts_limit: u32,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Spelling rules (TOML `[[rules]]` with `display` and `phonemic`)
    #[arg(long)]
    orthography: Option<PathBuf>,

    /// Category members (TOML `[categories]` table)
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Sound-change catalogue (TOML `[[changes]]`), replaces the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("soundshift=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut words = args.words.clone();
    if let Some(path) = &args.words_file {
        let content = std::fs::read_to_string(path)?;
        words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    if words.is_empty() {
        return Err(EvolveError::InvalidConfig("no words given".into()));
    }

    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };
    let categories = match &args.categories {
        Some(path) => load_category_table(path)?,
        None => CategoryTable::default(),
    };
    let orthography = match &args.orthography {
        Some(path) => load_orthography(path)?,
        None => Orthography::default(),
    };

    let mut config = EvolutionConfig::new(args.generations).with_attempts_limit(args.attempts_limit);
    config.seed = args.seed;

    let output = Evolver::new(catalog, config)?
        .with_categories(categories)
        .with_orthography(orthography)
        .run(&words)?;

    match args.format {
        Format::Json => println!("{}", output.to_json()?),
        Format::Text => {
            println!("{}", output.summary());
            println!();
            for record in &output.history {
                println!("{:<40} {}", record.label, record.words.join(" "));
            }
            println!();
            println!("{}", output.words.join(" "));
        }
    }

    Ok(())
}
