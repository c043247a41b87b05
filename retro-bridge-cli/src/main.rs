//! retro-bridge CLI
//!
//! Exports an Advanced Emulator Launcher collection, plus Advanced MAME
//! Launcher favourites, as an EmulationStation ROM tree and catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use retro_bridge_lib::Config;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::convert::run_convert;
use commands::platforms::run_platforms;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Convert { args } => {
            let config = Config::load(cli.config.as_deref())?;
            run_convert(config, args)
        }
        Commands::Platforms => {
            let config = Config::load(cli.config.as_deref())?;
            run_platforms(&config);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = Config::load(cli.config.as_deref())?;
                run_config_show(&config)
            }
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
        },
    }
}
