use anyhow::Result;
use clap::CommandFactory;
use primecache::commands::{check, demo, nth, range};
use primecache::completions::{generate_completions, Shell};
use primecache::config::Config;
use primecache::PrimeCache;
use std::io;
use std::str::FromStr;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let format = cli.format.unwrap_or(config.output.format);

    if let Commands::Completions { shell } = &cli.command {
        let shell = Shell::from_str(shell)?;
        let mut cmd = Cli::command();
        generate_completions(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let mut cache = if config.cache.preload > 0 {
        PrimeCache::with_preload(config.cache.preload)
    } else {
        PrimeCache::new()
    };

    let show_stats = cli.stats;
    match cli.command {
        Commands::Check { numbers } => check::execute(&mut cache, &numbers, show_stats, format),
        Commands::Nth { index } => nth::execute(&mut cache, index, show_stats, format),
        Commands::Range { lo, hi } => range::execute(&mut cache, lo, hi, show_stats, format),
        Commands::Demo => demo::execute(&mut cache, show_stats, format),
        Commands::Completions { .. } => Ok(()),
    }
}
