//! Source records to EmulationStation systems and games.

use std::path::{Path, PathBuf};

use retro_bridge_core::util::{dotted_extension, file_stem};
use retro_bridge_core::{
    Catalog, DestinationRecord, DestinationSystem, MachineRecord, PlatformTable, SourceRecord,
    release_date,
};

use crate::config::Config;
use crate::error::BridgeError;
use crate::sync::FileSynchronizer;

/// Builds the destination catalog and synchronizes referenced files.
///
/// Records are processed in the order given. Systems are registered on
/// first use, so their order in `es_systems.cfg` is first-encounter order.
pub struct Transformer<'a> {
    config: &'a Config,
    table: PlatformTable,
    sync: FileSynchronizer,
    catalog: Catalog,
}

impl<'a> Transformer<'a> {
    pub fn new(config: &'a Config, table: PlatformTable) -> Self {
        Self {
            config,
            table,
            sync: FileSynchronizer::new(),
            catalog: Catalog::new(),
        }
    }

    /// Check every record's platform before any file is touched.
    ///
    /// An unmapped platform aborts the whole run, as does a ROM system that
    /// would clash with the arcade system id. Failing here keeps the
    /// destination tree untouched.
    pub fn validate_platforms(&self, roms: &[SourceRecord]) -> Result<(), BridgeError> {
        let arcade = &self.config.arcade;
        for rom in roms {
            let mapping = self.table.lookup(&rom.platform)?;
            if arcade.enabled && mapping.id == arcade.platform_id {
                return Err(BridgeError::PlatformCollision(mapping.id.clone()));
            }
        }
        Ok(())
    }

    /// Convert AEL ROM records, copying each ROM and its artwork.
    pub fn add_roms(&mut self, roms: &[SourceRecord]) -> Result<(), BridgeError> {
        for rom in roms {
            self.add_rom(rom)?;
        }
        Ok(())
    }

    fn add_rom(&mut self, rom: &SourceRecord) -> Result<(), BridgeError> {
        let mapping = self.table.lookup(&rom.platform)?.clone();

        let rom_src = Path::new(&rom.filename);
        let rom_basename = rom_src.file_name().ok_or_else(|| {
            BridgeError::invalid_record(format!("ROM '{}' has no file name", rom.name))
        })?;

        let config = self.config;
        let system = self.catalog.get_or_register_with(&mapping.id, || {
            log::info!("New system {} ({})", mapping.id, mapping.name);
            DestinationSystem::new(
                mapping.id.clone(),
                mapping.name.clone(),
                config.output_roms_root.join(&mapping.id),
                config.launch_command(&mapping.core),
            )
        });
        let rom_dest = system.path.join(rom_basename);
        system.add_extension(&dotted_extension(&rom_dest));
        let system_dir = system.path.clone();

        log::info!("ROM {}", rom_basename.to_string_lossy());
        self.sync.sync(rom_src, &rom_dest)?;

        let image = match rom.artwork.as_deref() {
            Some(art) => Some(self.sync_artwork(art, &system_dir, &file_stem(&rom_dest))?),
            None => {
                log::info!("No artwork available");
                None
            }
        };

        let game = DestinationRecord {
            name: rom.name.clone(),
            description: rom.description.clone(),
            release_date: release_date(&rom.year),
            developer: rom.developer.clone(),
            publisher: String::new(),
            genre: rom.genre.clone(),
            players: rom.players.clone(),
            path: rom_dest,
            image,
        };
        self.catalog.push_game(&mapping.id, game)?;
        Ok(())
    }

    /// Register the arcade system and convert AML favourite machines.
    ///
    /// Each machine's own ROM set goes next to the game list; every other
    /// set it depends on goes to the extra directory so ES does not list it.
    pub fn add_machines(&mut self, machines: &[MachineRecord]) -> Result<(), BridgeError> {
        let config = self.config;
        let arcade = &config.arcade;
        if self.catalog.contains(&arcade.platform_id) {
            return Err(BridgeError::PlatformCollision(arcade.platform_id.clone()));
        }

        let system_dir = config.output_roms_root.join(&arcade.platform_id);
        let extra_dir = config.output_roms_root.join(&arcade.extra_dir_name);
        let mut system = DestinationSystem::new(
            arcade.platform_id.clone(),
            "MAME",
            system_dir.clone(),
            config.arcade_launch_command(),
        );
        system.add_extension(".zip");
        self.catalog.register(system)?;

        for machine in machines {
            self.add_machine(machine, &system_dir, &extra_dir)?;
        }
        Ok(())
    }

    fn add_machine(
        &mut self,
        machine: &MachineRecord,
        system_dir: &Path,
        extra_dir: &Path,
    ) -> Result<(), BridgeError> {
        log::info!("Machine {}", machine.name);
        let config = self.config;
        let arcade = &config.arcade;

        for set in &machine.rom_sets {
            let zip = format!("{set}.zip");
            log::info!("ROM {zip}");
            let dest_dir = if *set == machine.name {
                system_dir
            } else {
                extra_dir
            };
            self.sync
                .sync(&arcade.mame_roms_dir.join(&zip), &dest_dir.join(&zip))?;
        }

        let image = match machine.artwork.as_deref() {
            Some(art) => Some(self.sync_artwork(art, system_dir, &machine.name)?),
            None => {
                log::info!("Empty artwork {}", arcade.artwork_field);
                None
            }
        };

        let game = DestinationRecord {
            name: machine.description.clone(),
            description: String::new(),
            release_date: release_date(&machine.year),
            developer: machine.manufacturer.clone(),
            publisher: String::new(),
            genre: machine.genre.clone(),
            players: machine.players.clone(),
            path: system_dir.join(format!("{}.zip", machine.name)),
            image,
        };
        self.catalog.push_game(&arcade.platform_id, game)?;
        Ok(())
    }

    /// Copy artwork next to its ROM as `<stem><art ext>` so ES pairs them.
    fn sync_artwork(
        &mut self,
        art: &str,
        system_dir: &Path,
        stem: &str,
    ) -> Result<PathBuf, BridgeError> {
        let art_src = self.config.resolve_profile_path(art);
        let art_dest = system_dir.join(format!("{stem}{}", dotted_extension(Path::new(art))));
        log::info!(
            "Art {}",
            art_src
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        );
        self.sync.sync(&art_src, &art_dest)?;
        Ok(art_dest)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Finish the run, handing back the catalog and the synchronizer state.
    pub fn finish(self) -> (Catalog, FileSynchronizer) {
        (self.catalog, self.sync)
    }
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
