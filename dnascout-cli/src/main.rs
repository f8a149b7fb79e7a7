use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dnascout::{
    search::{self, hasher},
    Algorithm, CliOverrides, SearchConfig, SearchError, SearchOutcome, Sequence,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
struct CliSearchConfig {
    /// File holding the DNA sequence (first line is used)
    sequence: Option<PathBuf>,

    /// File holding the pattern (first line is used)
    pattern: Option<PathBuf>,

    /// Algorithm to use: bf (Brute Force) or kr (Karp-Rabin)
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_algorithm)]
    algorithm: Option<Algorithm>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Capacity of each loaded sequence, in symbols
    #[arg(long)]
    max_len: Option<usize>,

    /// Show rolling-hash statistics
    #[arg(short, long)]
    stats: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Count occurrences of a pattern in a DNA sequence
    Search(Box<CliSearchConfig>),

    /// Count with both algorithms and check that they agree
    Compare {
        /// File holding the DNA sequence
        sequence: PathBuf,

        /// File holding the pattern
        pattern: PathBuf,

        /// Capacity of each loaded sequence, in symbols
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// Print the rolling hash of a pattern
    Hash {
        /// File holding the pattern
        pattern: PathBuf,
    },
}

fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, SearchError> {
    s.parse()
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            let args = *args;
            let file_config = SearchConfig::load_from(args.config.as_deref())
                .context("Failed to load configuration")?;

            let config = file_config.merge_with_cli(CliOverrides {
                algorithm: args.algorithm,
                sequence_path: args.sequence,
                pattern_path: args.pattern,
                max_sequence_len: args.max_len,
                show_stats: args.stats,
                log_level: cli.log_level,
            });
            init_logging(&config.log_level);
            debug!("Effective configuration: {:?}", config);

            let mut outcome = search::search(&config)?;
            if !config.show_stats {
                outcome.stats = None;
            }

            if args.json {
                println!("{}", outcome.to_json()?);
            } else {
                print_search_outcome(&outcome);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Compare {
            sequence,
            pattern,
            max_len,
        } => {
            init_logging(cli.log_level.as_deref().unwrap_or("warn"));

            let config = SearchConfig {
                sequence_path: sequence,
                pattern_path: pattern,
                max_sequence_len: max_len.unwrap_or(dnascout::DEFAULT_CAPACITY),
                ..Default::default()
            };
            config.validate()?;
            let (text, pattern) = search::load_inputs(&config)?;

            let outcomes: Vec<_> = Algorithm::ALL
                .into_iter()
                .map(|algorithm| search::run(algorithm, &text, &pattern))
                .collect();

            for outcome in &outcomes {
                println!("{}: {}", outcome.algorithm, outcome.matches);
            }

            let agree = outcomes.windows(2).all(|w| w[0].matches == w[1].matches);
            if agree {
                println!("{}", "Algorithms agree".green());
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{}", "Algorithms disagree".red());
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Hash { pattern } => {
            init_logging(cli.log_level.as_deref().unwrap_or("warn"));

            let loaded = Sequence::load(&pattern, dnascout::DEFAULT_CAPACITY)?;
            if loaded.truncated {
                return Err(
                    SearchError::pattern_too_large(&pattern, dnascout::DEFAULT_CAPACITY).into(),
                );
            }
            if loaded.sequence.is_empty() {
                return Err(SearchError::EmptyPattern.into());
            }
            println!("{}", hasher::hash(loaded.sequence.as_bytes()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Sends logs to stderr so stdout only carries results.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("dnascout={level},dnascout_cli={level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_search_outcome(outcome: &SearchOutcome) {
    println!("{}", outcome.summary());

    if let Some(stats) = &outcome.stats {
        println!(
            "{} {} windows, {} candidates, {} spurious ({:.2}% collisions)",
            "Stats:".blue(),
            stats.windows,
            stats.candidates,
            stats.spurious,
            stats.collision_rate() * 100.0
        );
    }
}
