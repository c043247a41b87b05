use thiserror::Error;

/// Errors raised by the shared catalog model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A source record names a platform with no EmulationStation mapping.
    #[error("Unknown platform: '{0}' has no EmulationStation mapping")]
    UnknownPlatform(String),

    /// A system id was registered twice in one catalog.
    #[error("Platform '{0}' is already registered")]
    DuplicateSystem(String),

    /// A game was added to a system that was never registered.
    #[error("System '{0}' is not registered")]
    UnregisteredSystem(String),
}

impl CoreError {
    pub fn unknown_platform(name: impl Into<String>) -> Self {
        Self::UnknownPlatform(name.into())
    }
}
