//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "retro-bridge")]
#[command(
    about = "Export an AEL collection and AML favourites to EmulationStation",
    long_about = None
)]
pub(crate) struct Cli {
    /// Config file (default: ~/.config/retro-bridge/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides applied on top of the loaded config for one run.
#[derive(Args, Clone, Default)]
pub(crate) struct ConvertArgs {
    /// AEL collection to export
    #[arg(long)]
    pub collection: Option<String>,

    /// Destination ROM root (stale files under it are deleted)
    #[arg(long)]
    pub roms_root: Option<PathBuf>,

    /// EmulationStation config directory
    #[arg(long)]
    pub config_root: Option<PathBuf>,

    /// Skip the AML favourites (MAME) pass
    #[arg(long)]
    pub no_arcade: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Copy ROMs and artwork, then write es_systems.cfg and gamelists
    Convert {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// List AEL platforms and their EmulationStation systems
    Platforms,

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,

    /// Print the default config file path
    Path,
}
