use clap::{ArgAction, Parser, Subcommand};
use primecache::config::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "primecache")]
#[command(about = "Prime checks and enumeration over a self-growing prime cache", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Path to a TOML config file (overrides PRIMECACHE_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config file setting, then text)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print cache statistics after the command
    #[arg(long, global = true)]
    pub stats: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether each number is prime
    Check {
        /// Numbers to classify
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Print the N-th prime (1-based)
    Nth {
        /// Position of the prime, starting at 1
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// List every prime in an inclusive range
    Range {
        /// Lower bound (values below 2 are clamped)
        #[arg(allow_negative_numbers = true)]
        lo: i64,

        /// Upper bound
        #[arg(allow_negative_numbers = true)]
        hi: i64,
    },

    /// Run the demonstration: sample checks, first 20 primes, primes in 100..=150
    Demo,

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

impl Cli {
    /// Initialize logging. `RUST_LOG` wins over `-v`, which wins over the config level.
    pub fn init_logging(&self, default_level: &str) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => default_level,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
