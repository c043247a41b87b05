//! Shared types for converting an AEL/AML game library into an
//! EmulationStation catalog.
//!
//! This crate holds the record model, the platform mapping table and the
//! small text helpers (XML entity escaping, release dates) that both the
//! readers and the writers depend on.

pub mod error;
pub mod model;
pub mod platform;
pub mod text;
pub mod util;

pub use error::CoreError;
pub use model::{Catalog, DestinationRecord, DestinationSystem, MachineRecord, SourceRecord};
pub use platform::{PlatformMapping, PlatformParseError, PlatformTable, SourcePlatform};
pub use text::{escape_xml, release_date, unescape_xml};

/// Prefix Kodi uses for paths relative to the user profile directory.
pub const PROFILE_PREFIX: &str = "special://profile/";
