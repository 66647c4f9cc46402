mod cli;

use anyhow::Result;
use clap::Parser;
use primecache::config::Config;

use cli::{dispatch, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    cli.init_logging(&config.output.log_level);
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    dispatch(cli, &config)
}
