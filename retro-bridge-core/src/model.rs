//! Source and destination records.
//!
//! Source records are produced by the catalog readers and never modified.
//! Destination systems and games are built by the transform engine and
//! consumed by the frontend writers.

use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};

use crate::error::CoreError;

/// One ROM entry from an AEL collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    pub name: String,
    /// Free-text plot.
    pub description: String,
    /// Release year as entered in AEL; may be empty or non-numeric.
    pub year: String,
    pub developer: String,
    pub genre: String,
    /// Player count, e.g. "1", "1-2".
    pub players: String,
    /// AEL platform name, e.g. "Nintendo SNES".
    pub platform: String,
    /// Absolute path of the ROM file.
    pub filename: String,
    /// Artwork path for the configured asset field, if set.
    pub artwork: Option<String>,
}

/// One AML favourite machine plus the files it needs on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineRecord {
    /// MAME short name, e.g. "dkong". Also the main ROM set basename.
    pub name: String,
    /// Display title, e.g. "Donkey Kong (US set 1)".
    pub description: String,
    pub year: String,
    pub manufacturer: String,
    pub genre: String,
    pub players: String,
    pub artwork: Option<String>,
    /// ROM set basenames (no `.zip`) the machine depends on, its own included.
    pub rom_sets: Vec<String>,
}

/// One game entry in an EmulationStation gamelist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationRecord {
    pub name: String,
    pub description: String,
    /// `YYYYMMDDTHHMMSS`, or empty.
    pub release_date: String,
    pub developer: String,
    /// Always empty: AEL has no publisher field.
    pub publisher: String,
    pub genre: String,
    pub players: String,
    pub path: PathBuf,
    pub image: Option<PathBuf>,
}

/// One system entry in `es_systems.cfg`, owning its games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSystem {
    pub id: String,
    pub fullname: String,
    pub path: PathBuf,
    pub command: String,
    pub platform: String,
    pub theme: String,
    /// Extensions with the leading dot, in first-seen order.
    pub extensions: IndexSet<String>,
    pub games: Vec<DestinationRecord>,
}

impl DestinationSystem {
    /// New system whose platform and theme ids equal its system id.
    pub fn new(
        id: impl Into<String>,
        fullname: impl Into<String>,
        path: impl Into<PathBuf>,
        command: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            platform: id.clone(),
            theme: id.clone(),
            id,
            fullname: fullname.into(),
            path: path.into(),
            command: command.into(),
            extensions: IndexSet::new(),
            games: Vec::new(),
        }
    }

    /// Record a ROM extension. Empty extensions and repeats are ignored.
    pub fn add_extension(&mut self, ext: &str) -> bool {
        if ext.is_empty() {
            return false;
        }
        self.extensions.insert(ext.to_string())
    }

    /// Extensions joined the way `es_systems.cfg` expects.
    pub fn extension_list(&self) -> String {
        self.extensions
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The full destination catalog: systems keyed by id, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    systems: IndexMap<String, DestinationSystem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system. Fails if the id is already taken.
    pub fn register(&mut self, system: DestinationSystem) -> Result<(), CoreError> {
        if self.systems.contains_key(&system.id) {
            return Err(CoreError::DuplicateSystem(system.id));
        }
        self.systems.insert(system.id.clone(), system);
        Ok(())
    }

    /// Get the system for `id`, creating it with `make` on first use.
    pub fn get_or_register_with(
        &mut self,
        id: &str,
        make: impl FnOnce() -> DestinationSystem,
    ) -> &mut DestinationSystem {
        self.systems.entry(id.to_string()).or_insert_with(make)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.systems.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&DestinationSystem> {
        self.systems.get(id)
    }

    /// Append a game to a registered system.
    pub fn push_game(&mut self, id: &str, game: DestinationRecord) -> Result<(), CoreError> {
        let system = self
            .systems
            .get_mut(id)
            .ok_or_else(|| CoreError::UnregisteredSystem(id.to_string()))?;
        system.games.push(game);
        Ok(())
    }

    pub fn systems(&self) -> impl Iterator<Item = &DestinationSystem> {
        self.systems.values()
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn game_count(&self) -> usize {
        self.systems.values().map(|s| s.games.len()).sum()
    }
}
