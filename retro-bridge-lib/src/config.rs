//! Run configuration (`~/.config/retro-bridge/config.toml`).
//!
//! Every path the conversion touches comes from here; nothing reads ambient
//! globals, so tests can point a run at temporary directories.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use retro_bridge_core::{PROFILE_PREFIX, PlatformMapping, PlatformTable};
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Top-level settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// AEL collection to export.
    pub collection_name: String,
    /// ROM asset field used as the ES image (`s_3dbox`, `s_title`, ...).
    pub artwork_field: String,
    /// AEL addon data directory (holds `collections.xml`).
    pub ael_data_dir: PathBuf,
    /// Kodi userdata directory; replaces the `special://profile/` prefix.
    pub kodi_userdata_dir: PathBuf,
    /// Destination ROM root. Anything under it not produced by the run is deleted.
    pub output_roms_root: PathBuf,
    /// EmulationStation config directory (`es_systems.cfg`, `gamelists/`).
    pub output_config_root: PathBuf,
    /// RetroArch binary used in launch commands.
    pub emulator_binary_path: PathBuf,
    /// Directory holding libretro core libraries.
    pub core_library_path: PathBuf,
    pub arcade: ArcadeConfig,
    /// Extra or replacement platform mappings keyed by AEL platform name.
    pub platforms: IndexMap<String, PlatformMapping>,
}

/// Settings for the AML favourites (MAME) pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub enabled: bool,
    /// AML addon data directory (holds `Favourite_Machines.json`).
    pub aml_data_dir: PathBuf,
    /// Directory of MAME ROM set ZIPs.
    pub mame_roms_dir: PathBuf,
    pub mame_binary_path: PathBuf,
    /// ES system id for arcade games. Must not clash with a mapped platform.
    pub platform_id: String,
    /// Directory name (under the ROM root) for dependency ROM sets that
    /// must exist on disk but not show up as games.
    pub extra_dir_name: String,
    /// Machine asset field used as the ES image (`snap`, `title`, ...).
    pub artwork_field: String,
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn kodi_userdata_dir() -> PathBuf {
    home_dir().join(".kodi").join("userdata")
}

impl Default for Config {
    fn default() -> Self {
        let home = home_dir();
        Self {
            collection_name: "EmulationStation".to_string(),
            artwork_field: "s_3dbox".to_string(),
            ael_data_dir: kodi_userdata_dir()
                .join("addon_data")
                .join("plugin.program.advanced.emulator.launcher"),
            kodi_userdata_dir: kodi_userdata_dir(),
            output_roms_root: home.join("EmulationStation-ROMs"),
            output_config_root: home.join(".emulationstation"),
            emulator_binary_path: home.join("bin").join("retroarch"),
            core_library_path: home.join("bin").join("libretro"),
            arcade: ArcadeConfig::default(),
            platforms: IndexMap::new(),
        }
    }
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        let home = home_dir();
        Self {
            enabled: true,
            aml_data_dir: kodi_userdata_dir()
                .join("addon_data")
                .join("plugin.program.AML"),
            mame_roms_dir: home.join("MAME-ROMs"),
            mame_binary_path: home.join("bin").join("mame64"),
            platform_id: "mame".to_string(),
            extra_dir_name: "mame-extra".to_string(),
            artwork_field: "snap".to_string(),
        }
    }
}

impl Config {
    /// Default config file location: `~/.config/retro-bridge/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("retro-bridge").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// read if present, otherwise built-in defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, BridgeError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    log::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        log::debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|e| BridgeError::io(&path, e))?;
        Self::from_toml_str(&contents)
            .map_err(|e| BridgeError::config(format!("{}: {}", path.display(), e)))
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, BridgeError> {
        let config: Self = toml::from_str(s).map_err(|e| BridgeError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, BridgeError> {
        toml::to_string_pretty(self).map_err(|e| BridgeError::config(e.to_string()))
    }

    /// Reject settings that would make a run misbehave.
    ///
    /// System ids and the extra directory name become single directory
    /// names under `output_roms_root`, so anything that could escape it is
    /// refused here, before a single file is copied.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.collection_name.is_empty() {
            return Err(BridgeError::config("collection_name must not be empty"));
        }
        check_dir_name("arcade.platform_id", &self.arcade.platform_id)?;
        check_dir_name("arcade.extra_dir_name", &self.arcade.extra_dir_name)?;
        if self.arcade.extra_dir_name == self.arcade.platform_id {
            return Err(BridgeError::config(
                "arcade.extra_dir_name must differ from arcade.platform_id",
            ));
        }
        for (source, mapping) in &self.platforms {
            check_dir_name(&format!("platforms.\"{source}\".id"), &mapping.id)?;
        }
        Ok(())
    }

    /// Built-in platform table with `[platforms]` entries applied on top.
    pub fn platform_table(&self) -> PlatformTable {
        let mut table = PlatformTable::builtin();
        for (source, mapping) in &self.platforms {
            table.insert(source.clone(), mapping.clone());
        }
        table
    }

    /// Rewrite a Kodi `special://profile/` path to a real filesystem path.
    pub fn resolve_profile_path(&self, path: &str) -> PathBuf {
        match path.strip_prefix(PROFILE_PREFIX) {
            Some(rest) => self.kodi_userdata_dir.join(rest),
            None => PathBuf::from(path),
        }
    }

    /// `<ael_data_dir>/collections.xml`
    pub fn collections_path(&self) -> PathBuf {
        self.ael_data_dir.join(retro_bridge_catalog::COLLECTIONS_FILE)
    }

    /// `<ael_data_dir>/db_Collections/<roms_base_noext>.json`
    pub fn collection_db_path(&self, roms_base_noext: &str) -> PathBuf {
        self.ael_data_dir
            .join(retro_bridge_catalog::COLLECTION_DB_DIR)
            .join(format!("{roms_base_noext}.json"))
    }

    /// RetroArch launch command for a libretro core.
    pub fn launch_command(&self, core: &str) -> String {
        format!(
            "{} -L {} %ROM%",
            self.emulator_binary_path.display(),
            self.core_library_path.join(core).display()
        )
    }

    /// MAME launch command; MAME takes the set name, not a path.
    pub fn arcade_launch_command(&self) -> String {
        format!("{} %BASENAME%", self.arcade.mame_binary_path.display())
    }
}

/// A value used as one path component under the ROM root.
fn check_dir_name(key: &str, value: &str) -> Result<(), BridgeError> {
    if value.is_empty() {
        return Err(BridgeError::config(format!("{key} must not be empty")));
    }
    if value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(BridgeError::config(format!(
            "{key} '{value}' must be a plain directory name"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
