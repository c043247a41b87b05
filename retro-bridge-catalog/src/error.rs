use thiserror::Error;

/// Errors that can occur while reading AEL/AML catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("Repeated collection '{0}'")]
    DuplicateCollection(String),

    #[error("Collection '{0}' not found")]
    CollectionNotFound(String),

    #[error("Collection '{collection}' has no '{field}' field")]
    MissingField { collection: String, field: String },

    #[error("Invalid ROM database: {0}")]
    InvalidRomDatabase(String),

    #[error("Machine '{0}' has no entry in the ROM set manifest")]
    MissingMachineFiles(String),
}

impl CatalogError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_rom_database(msg: impl Into<String>) -> Self {
        Self::InvalidRomDatabase(msg.into())
    }
}
