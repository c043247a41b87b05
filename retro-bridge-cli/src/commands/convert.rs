use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_bridge_core::util::format_bytes_approx;
use retro_bridge_lib::{Config, RunSummary, run_pipeline};

use crate::cli_types::ConvertArgs;
use crate::error::CliError;

/// Apply command-line overrides on top of the loaded config.
pub(crate) fn apply_overrides(config: &mut Config, args: ConvertArgs) {
    if let Some(name) = args.collection {
        config.collection_name = name;
    }
    if let Some(root) = args.roms_root {
        config.output_roms_root = root;
    }
    if let Some(root) = args.config_root {
        config.output_config_root = root;
    }
    if args.no_arcade {
        config.arcade.enabled = false;
    }
}

pub(crate) fn run_convert(mut config: Config, args: ConvertArgs) -> Result<(), CliError> {
    apply_overrides(&mut config, args);

    log::info!(
        "{} '{}'",
        "Exporting collection".if_supports_color(Stdout, |t| t.bold()),
        config.collection_name,
    );
    log::info!(
        "  ROMs:   {}",
        config
            .output_roms_root
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Config: {}",
        config
            .output_config_root
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    if !config.arcade.enabled {
        log::info!("  Arcade pass disabled");
    }
    log::info!("");

    let summary = run_pipeline(&config)?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    log::info!("");
    log::info!("{}", "Summary".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} systems, {} games",
        summary.systems.if_supports_color(Stdout, |t| t.green()),
        summary.games.if_supports_color(Stdout, |t| t.green()),
    );
    log::info!(
        "  Copied {} files ({}), {} up to date",
        summary.sync.copied,
        format_bytes_approx(summary.sync.bytes_copied),
        summary.sync.up_to_date,
    );
    if summary.sync.missing > 0 {
        log::warn!("{} source files were missing", summary.sync.missing);
    }
    log::info!(
        "  Removed {} stale files, {} empty directories",
        summary.clean.files_removed,
        summary.clean.dirs_removed,
    );
    log::info!("  Wrote {} catalog files", summary.written.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_overrides_replace_only_given_values() {
        let mut config = Config::default();
        let original_config_root = config.output_config_root.clone();
        apply_overrides(
            &mut config,
            ConvertArgs {
                collection: Some("Favourites".to_string()),
                roms_root: Some(PathBuf::from("/mnt/es")),
                config_root: None,
                no_arcade: true,
            },
        );
        assert_eq!(config.collection_name, "Favourites");
        assert_eq!(config.output_roms_root, PathBuf::from("/mnt/es"));
        assert_eq!(config.output_config_root, original_config_root);
        assert!(!config.arcade.enabled);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = Config::default();
        apply_overrides(&mut config, ConvertArgs::default());
        assert_eq!(config, Config::default());
    }
}
