//! Skirmish - Entry Point
//!
//! Plays one scripted duel on the terminal: the player names a fighter and a
//! weapon, trades one blow each with the enemy, and the survivor is announced.

use clap::{Parser, ValueEnum};
use skirmish::command::DuelRunner;
use skirmish::core::config::{config, set_config, DuelConfig};
use skirmish::core::error::SkirmishError;
use skirmish::core::rng::Pcg32;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Turn-based duel against a stock enemy
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Play a turn-based duel on the terminal")]
struct Args {
    /// RNG seed; omit for the fixed default stream
    #[arg(long)]
    seed: Option<u64>,

    /// RNG stream id used with --seed
    #[arg(long, default_value_t = 0)]
    stream: u64,

    /// TOML file overriding the duel configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print combatant stats before and after the exchange
    #[arg(long)]
    stats: bool,

    /// Append a summary of the duel in this format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("skirmish={}", args.log_level)))
        .with_writer(io::stderr)
        .init();

    let loaded = match &args.config {
        Some(path) => match DuelConfig::load(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::from(1);
            }
        },
        None => DuelConfig::default(),
    };
    if set_config(loaded).is_err() {
        tracing::warn!("Global config already set");
    }

    let rng = match args.seed {
        Some(seed) => Pcg32::new(seed, args.stream),
        None => Pcg32::default(),
    };
    tracing::info!(seed = ?args.seed, stream = args.stream, "Skirmish starting...");

    let mut runner = DuelRunner::new(config().clone(), rng).with_stats(args.stats);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let outcome = match runner.run(&mut input, &mut output) {
        Ok(outcome) => outcome,
        Err(e @ (SkirmishError::InvalidNumber(_) | SkirmishError::NumberOutOfRange(_))) => {
            eprintln!("failed to parse weapon damage: {}", e);
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    if args.format == OutputFormat::Json {
        let written = serde_json::to_string_pretty(&outcome)
            .map_err(SkirmishError::from)
            .and_then(|json| writeln!(output, "{}", json).map_err(SkirmishError::from));
        if let Err(e) = written {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}
