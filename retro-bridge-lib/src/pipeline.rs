//! One complete conversion run.

use std::path::PathBuf;

use retro_bridge_catalog::{load_collection_roms, load_collections, load_favourite_machines};
use retro_bridge_frontend::{EmulationStation, Frontend};

use crate::clean::{CleanStats, clean_destination};
use crate::config::Config;
use crate::error::BridgeError;
use crate::sync::SyncStats;
use crate::transform::Transformer;

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub systems: usize,
    pub games: usize,
    pub sync: SyncStats,
    pub clean: CleanStats,
    /// Catalog files written, `es_systems.cfg` first.
    pub written: Vec<PathBuf>,
}

/// Run the whole conversion described by `config`.
///
/// The config is validated first, since it may have been built in code
/// rather than loaded. Order matters: every source is synchronized before the cleaner runs,
/// and catalog files are only written once cleaning succeeded. Any error
/// stops the run where it happened.
pub fn run_pipeline(config: &Config) -> Result<RunSummary, BridgeError> {
    config.validate()?;

    let index = load_collections(&config.collections_path())?;
    let collection = index.select(&config.collection_name)?;
    let db_path = config.collection_db_path(collection.roms_base_noext()?);
    let roms = load_collection_roms(&db_path, &config.artwork_field)?;

    let mut transformer = Transformer::new(config, config.platform_table());
    transformer.validate_platforms(&roms)?;

    log::info!("Synchronizing collection '{}'", config.collection_name);
    transformer.add_roms(&roms)?;

    if config.arcade.enabled {
        let machines =
            load_favourite_machines(&config.arcade.aml_data_dir, &config.arcade.artwork_field)?;
        log::info!("Synchronizing {} favourite machines", machines.len());
        transformer.add_machines(&machines)?;
    }

    let (catalog, sync) = transformer.finish();

    log::info!("Cleaning {}", config.output_roms_root.display());
    let clean = clean_destination(&config.output_roms_root, sync.kept())?;

    let frontend = EmulationStation::new();
    log::info!("Generating {} catalog", frontend.name());
    let written = frontend.write_catalog(&catalog, &config.output_config_root)?;

    Ok(RunSummary {
        systems: catalog.system_count(),
        games: catalog.game_count(),
        sync: sync.stats(),
        clean,
        written,
    })
}
