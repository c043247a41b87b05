/// Errors that can occur while writing frontend catalogs.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid system id: '{0}'")]
    InvalidSystemId(String),
}

impl FrontendError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
