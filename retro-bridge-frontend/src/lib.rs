pub mod emulationstation;
pub mod error;

pub use emulationstation::EmulationStation;
pub use error::FrontendError;

use std::path::{Path, PathBuf};

use retro_bridge_core::Catalog;

/// Trait for gaming frontend catalog writers.
pub trait Frontend {
    fn name(&self) -> &'static str;

    /// Write the system list and every per-system game list under
    /// `config_root`. Returns the paths written, system list first.
    fn write_catalog(
        &self,
        catalog: &Catalog,
        config_root: &Path,
    ) -> Result<Vec<PathBuf>, FrontendError>;
}
