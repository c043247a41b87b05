use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_bridge_lib::Config;

use crate::error::CliError;

/// Print the effective configuration, defaults included.
pub(crate) fn run_config_show(config: &Config) -> Result<(), CliError> {
    log::info!(
        "{}",
        "retro-bridge configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    log::info!("{}", config.to_toml_string()?);
    Ok(())
}

/// Print the default config file path and whether it exists.
pub(crate) fn run_config_path() {
    match Config::default_path() {
        Some(p) if p.exists() => log::info!(
            "{} {}",
            p.display(),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        ),
        Some(p) => log::info!(
            "{} {}",
            p.display(),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::warn!("Could not determine config directory"),
    }
}
