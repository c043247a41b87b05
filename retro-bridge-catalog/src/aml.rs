//! AML favourite machines and their ROM set manifest.

use std::collections::HashMap;
use std::path::Path;

use retro_bridge_core::MachineRecord;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CatalogError;
use crate::json::{asset_path, lenient_string};

#[derive(Debug, Deserialize)]
struct AmlMachine {
    #[serde(default, deserialize_with = "lenient_string")]
    description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    manufacturer: String,
    #[serde(default, deserialize_with = "lenient_string")]
    genre: String,
    #[serde(default, deserialize_with = "lenient_string")]
    nplayers: String,
    #[serde(default)]
    assets: serde_json::Map<String, Value>,
}

/// Entry of `ROM_Set_machine_files.json`.
#[derive(Debug, Deserialize)]
struct MachineFiles {
    /// ROM set basenames without the `.zip` extension.
    #[serde(rename = "ROMs", default)]
    roms: Vec<String>,
}

/// Combine AML favourites with the ROM set manifest.
///
/// Returns machines sorted by name, case-insensitively. Every favourite
/// must have a manifest entry; a missing one means the AML databases are
/// out of sync and the export would be incomplete.
pub fn parse_favourite_machines(
    favourites_json: &str,
    machine_files_json: &str,
    artwork_field: &str,
) -> Result<Vec<MachineRecord>, CatalogError> {
    let favourites: HashMap<String, AmlMachine> = serde_json::from_str(favourites_json)
        .map_err(|e| CatalogError::json(super::FAVOURITES_FILE, e))?;
    let manifest: HashMap<String, MachineFiles> = serde_json::from_str(machine_files_json)
        .map_err(|e| CatalogError::json(super::MACHINE_FILES_FILE, e))?;
    build_machines(favourites, manifest, artwork_field)
}

fn build_machines(
    favourites: HashMap<String, AmlMachine>,
    mut manifest: HashMap<String, MachineFiles>,
    artwork_field: &str,
) -> Result<Vec<MachineRecord>, CatalogError> {
    let mut names: Vec<String> = favourites.keys().cloned().collect();
    // Exact name breaks ties so names differing only in case sort stably.
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    let mut favourites = favourites;
    let mut machines = Vec::with_capacity(names.len());
    for name in names {
        let Some(machine) = favourites.remove(&name) else {
            continue;
        };
        let files = manifest
            .remove(&name)
            .ok_or_else(|| CatalogError::MissingMachineFiles(name.clone()))?;
        machines.push(MachineRecord {
            artwork: asset_path(&machine.assets, artwork_field),
            name,
            description: machine.description,
            year: machine.year,
            manufacturer: machine.manufacturer,
            genre: machine.genre,
            players: machine.nplayers,
            rom_sets: files.roms,
        });
    }
    Ok(machines)
}

/// Load favourites and manifest from the AML data directory.
///
/// A missing file is not an error: AML only writes these once the user
/// has favourites, so an absent file means an empty arcade library.
pub fn load_favourite_machines(
    aml_data_dir: &Path,
    artwork_field: &str,
) -> Result<Vec<MachineRecord>, CatalogError> {
    let favourites: HashMap<String, AmlMachine> =
        load_json_or_default(&aml_data_dir.join(super::FAVOURITES_FILE))?;
    log::info!("Loaded {} favourite machines", favourites.len());
    let manifest: HashMap<String, MachineFiles> =
        load_json_or_default(&aml_data_dir.join(super::MACHINE_FILES_FILE))?;
    log::info!("Loaded ROM set manifest for {} machines", manifest.len());
    build_machines(favourites, manifest, artwork_field)
}

fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, CatalogError> {
    if !path.is_file() {
        log::warn!("File not found: {}", path.display());
        return Ok(T::default());
    }
    log::info!("Loading {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::json(path.display().to_string(), e))
}

#[cfg(test)]
#[path = "tests/aml_tests.rs"]
mod tests;
