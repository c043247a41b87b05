use thiserror::Error;

use retro_bridge_catalog::CatalogError;
use retro_bridge_core::CoreError;
use retro_bridge_frontend::FrontendError;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The arcade system id is already taken by a mapped platform.
    #[error("Platform '{0}' already registered; pick another arcade platform_id")]
    PlatformCollision(String),

    /// A source record cannot be converted (e.g. no file name).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl BridgeError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
