//! Searches a grid of rationals for bases satisfying the Goldbach analogue, and prints them.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rgoldbach::prelude::{search_with, SearchConfig, Tracing, DEFAULT_MAX_POWER};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How results are printed.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// A header line, then one `p/q` per line.
    Text,
    /// A single JSON object with the rationals and run statistics.
    Json,
}

/// Search rational bases r whose semidomain ℕ₀[r] satisfies a Goldbach analogue.
#[derive(Parser)]
#[command(name = "rgoldbach")]
#[command(version)]
struct Cli {
    /// Largest even integer that must be a sum of two powers
    #[arg(long, env = "RGOLDBACH_MAX_VALUE", default_value_t = 1000)]
    max_value: u64,

    /// Largest denominator in the grid
    #[arg(long, env = "RGOLDBACH_MAX_DENOMINATOR", default_value_t = 10)]
    max_denominator: u64,

    /// Smallest denominator in the grid
    #[arg(long, env = "RGOLDBACH_MIN_DENOMINATOR", default_value_t = 1)]
    min_denominator: u64,

    /// Most powers computed for any base
    #[arg(long, env = "RGOLDBACH_MAX_POWER", default_value_t = DEFAULT_MAX_POWER)]
    max_power: u32,

    /// Pair every denominator with numerators up to this value, reaching bases above 1
    #[arg(long, env = "RGOLDBACH_MAX_NUMERATOR")]
    max_numerator: Option<u64>,

    /// Report each rational value once, at its first appearance
    #[arg(long)]
    dedup: bool,

    /// Check candidates in parallel
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level, used unless RUST_LOG is set
    #[arg(long, env = "RGOLDBACH_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    /// The search configuration given by the arguments.
    fn config(&self) -> SearchConfig {
        let config = SearchConfig::new(self.max_value, self.max_denominator, self.min_denominator)
            .max_power(self.max_power)
            .dedup(self.dedup)
            .parallel(self.parallel);

        match self.max_numerator {
            Some(max_numerator) => config.widen(max_numerator),
            None => config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with results.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if cli.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt)
            .init();
    }

    let config = cli.config();
    let search = search_with(&config, &Tracing).context("search failed")?;

    match cli.format {
        Format::Text => {
            println!(
                "Rational values of r satisfying the Goldbach analogue up to {}:",
                config.max_value
            );
            for rational in &search.rationals {
                println!("{rational}");
            }
        }
        Format::Json => {
            let output = serde_json::json!({
                "max_value": config.max_value,
                "rationals": search.rationals,
                "stats": search.stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
