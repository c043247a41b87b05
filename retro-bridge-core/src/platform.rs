use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Source platforms that have a built-in EmulationStation mapping.
///
/// Variants are identified in catalogs by their AEL display name
/// (e.g. `"Nintendo SNES"`), which is what [`SourcePlatform::ael_name`]
/// returns and what `FromStr` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourcePlatform {
    // Atari
    Atari2600,

    // NEC
    PcEngine,
    PcEngineCd,

    // Nintendo
    GameBoy,
    GameBoyColor,
    GameBoyAdvance,
    Ds,
    FamicomDiskSystem,
    Nes,
    Snes,
    N64,
    GameCube,

    // Sega
    GameGear,
    MasterSystem,
    MegaDrive,
    MegaCd,
    Sega32x,
    Saturn,
    Dreamcast,

    // Sony
    PlayStation,
    Psp,
}

/// All source platforms in registration order.
const ALL_SOURCE_PLATFORMS: &[SourcePlatform] = &[
    SourcePlatform::Atari2600,
    SourcePlatform::PcEngine,
    SourcePlatform::PcEngineCd,
    SourcePlatform::GameBoy,
    SourcePlatform::GameBoyColor,
    SourcePlatform::GameBoyAdvance,
    SourcePlatform::Ds,
    SourcePlatform::FamicomDiskSystem,
    SourcePlatform::Nes,
    SourcePlatform::Snes,
    SourcePlatform::N64,
    SourcePlatform::GameCube,
    SourcePlatform::GameGear,
    SourcePlatform::MasterSystem,
    SourcePlatform::MegaDrive,
    SourcePlatform::MegaCd,
    SourcePlatform::Sega32x,
    SourcePlatform::Saturn,
    SourcePlatform::Dreamcast,
    SourcePlatform::PlayStation,
    SourcePlatform::Psp,
];

impl SourcePlatform {
    /// Platform name as stored in AEL ROM databases.
    pub fn ael_name(&self) -> &'static str {
        match self {
            Self::Atari2600 => "Atari 2600",
            Self::PcEngine => "NEC PC Engine",
            Self::PcEngineCd => "NEC PC Engine CDROM2",
            Self::GameBoy => "Nintendo GameBoy",
            Self::GameBoyColor => "Nintendo GameBoy Color",
            Self::GameBoyAdvance => "Nintendo GameBoy Advance",
            Self::Ds => "Nintendo DS",
            Self::FamicomDiskSystem => "Nintendo Famicon Disk System",
            Self::Nes => "Nintendo NES",
            Self::Snes => "Nintendo SNES",
            Self::N64 => "Nintendo 64",
            Self::GameCube => "Nintendo GameCube",
            Self::GameGear => "Sega Game Gear",
            Self::MasterSystem => "Sega Master System",
            Self::MegaDrive => "Sega Mega Drive",
            Self::MegaCd => "Sega MegaCD",
            Self::Sega32x => "Sega 32X",
            Self::Saturn => "Sega Saturn",
            Self::Dreamcast => "Sega Dreamcast",
            Self::PlayStation => "Sony PlayStation",
            Self::Psp => "Sony PlayStation Portable",
        }
    }

    /// EmulationStation system id. Also used as platform and theme id.
    ///
    /// See <https://github.com/RetroPie/es-theme-carbon> for the vocabulary.
    pub fn es_id(&self) -> &'static str {
        match self {
            Self::Atari2600 => "atari2600",
            Self::PcEngine => "pcengine",
            Self::PcEngineCd => "pcenginecd",
            Self::GameBoy => "gb",
            Self::GameBoyColor => "gbc",
            Self::GameBoyAdvance => "gba",
            Self::Ds => "nds",
            Self::FamicomDiskSystem => "fds",
            Self::Nes => "nes",
            Self::Snes => "snes",
            Self::N64 => "n64",
            Self::GameCube => "gc",
            Self::GameGear => "gamegear",
            Self::MasterSystem => "mastersystem",
            Self::MegaDrive => "megadrive",
            Self::MegaCd => "segacd",
            Self::Sega32x => "sega32x",
            Self::Saturn => "saturn",
            Self::Dreamcast => "dreamcast",
            Self::PlayStation => "psx",
            Self::Psp => "psp",
        }
    }

    /// Full name shown by EmulationStation.
    pub fn es_name(&self) -> &'static str {
        match self {
            Self::Atari2600 => "Atari 2600",
            Self::PcEngine => "PC Engine",
            Self::PcEngineCd => "PC Engine CDROM2",
            Self::GameBoy => "Nintendo GameBoy",
            Self::GameBoyColor => "Nintendo GameBoy Color",
            Self::GameBoyAdvance => "Nintendo GameBoy Advance",
            Self::Ds => "Nintendo DS",
            Self::FamicomDiskSystem => "Nintendo Famicon Disk System",
            Self::Nes => "Nintendo Entertainment System",
            Self::Snes => "Super Nintendo",
            Self::N64 => "Nintendo 64",
            Self::GameCube => "Nintendo GameCube",
            Self::GameGear => "Sega Game Gear",
            Self::MasterSystem => "Master System",
            Self::MegaDrive => "Mega Drive",
            Self::MegaCd => "Sega MegaCD",
            Self::Sega32x => "Sega 32X",
            Self::Saturn => "Sega Saturn",
            Self::Dreamcast => "Sega Dreamcast",
            Self::PlayStation => "PlayStation",
            Self::Psp => "PlayStation Portable",
        }
    }

    /// Libretro core library file that runs this platform.
    pub fn core(&self) -> &'static str {
        match self {
            Self::Atari2600 => "stella_libretro.so",
            Self::PcEngine | Self::PcEngineCd => "mednafen_pce_fast_libretro.so",
            Self::GameBoy | Self::GameBoyColor => "sameboy_libretro.so",
            Self::GameBoyAdvance => "mgba_libretro.so",
            Self::Ds => "desmume_libretro.so",
            Self::FamicomDiskSystem | Self::Nes => "mesen_libretro.so",
            Self::Snes => "snes9x_libretro.so",
            Self::N64 => "mupen64plus_next_libretro.so",
            Self::GameCube => "dolphin_libretro.so",
            Self::GameGear | Self::MasterSystem | Self::MegaDrive | Self::MegaCd => {
                "genesis_plus_gx_libretro.so"
            }
            Self::Sega32x => "picodrive_libretro.so",
            Self::Saturn => "mednafen_saturn_libretro.so",
            Self::Dreamcast => "flycast_libretro.so",
            Self::PlayStation => "mednafen_psx_libretro.so",
            Self::Psp => "ppsspp_libretro.so",
        }
    }

    /// The EmulationStation mapping for this platform.
    pub fn mapping(&self) -> PlatformMapping {
        PlatformMapping {
            id: self.es_id().to_string(),
            name: self.es_name().to_string(),
            core: self.core().to_string(),
        }
    }

    pub fn all() -> &'static [SourcePlatform] {
        ALL_SOURCE_PLATFORMS
    }
}

impl std::fmt::Display for SourcePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ael_name())
    }
}

/// Error returned when a string is not a known AEL platform name.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for SourcePlatform {
    type Err = PlatformParseError;

    /// Parse from the exact AEL platform name. Matching is case-sensitive
    /// because AEL stores a closed vocabulary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SOURCE_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.ael_name() == s)
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}

/// Destination side of a platform mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformMapping {
    /// EmulationStation system id (`snes`, `megadrive`, ...).
    pub id: String,
    /// Display name (`Super Nintendo`).
    pub name: String,
    /// Libretro core filename (`snes9x_libretro.so`).
    pub core: String,
}

/// Lookup table from AEL platform name to EmulationStation mapping.
///
/// Starts from the built-in [`SourcePlatform`] entries; configuration may
/// add or replace entries. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct PlatformTable {
    entries: IndexMap<String, PlatformMapping>,
}

impl PlatformTable {
    /// An empty table. Every lookup fails until entries are inserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding every built-in [`SourcePlatform`] mapping.
    pub fn builtin() -> Self {
        let entries = SourcePlatform::all()
            .iter()
            .map(|p| (p.ael_name().to_string(), p.mapping()))
            .collect();
        Self { entries }
    }

    /// Add or replace the mapping for `source`. Returns the previous mapping.
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        mapping: PlatformMapping,
    ) -> Option<PlatformMapping> {
        self.entries.insert(source.into(), mapping)
    }

    /// Resolve an AEL platform name.
    ///
    /// A miss is fatal for the whole run: skipping the record would
    /// silently drop games from the exported library.
    pub fn lookup(&self, source: &str) -> Result<&PlatformMapping, CoreError> {
        self.entries
            .get(source)
            .ok_or_else(|| CoreError::unknown_platform(source))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlatformMapping)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
