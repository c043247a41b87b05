//! Readers for the source side of the conversion.
//!
//! AEL keeps its collection index in `collections.xml` and each
//! collection's ROMs in a JSON database. AML keeps favourite machines and
//! the per-machine ROM set manifest in two JSON files. Every reader returns
//! the uniform records defined in `retro-bridge-core`.

pub mod aml;
pub mod collections;
pub mod error;
mod json;
pub mod roms;

pub use aml::{load_favourite_machines, parse_favourite_machines};
pub use collections::{Collection, CollectionIndex, load_collections, parse_collections};
pub use error::CatalogError;
pub use roms::{load_collection_roms, parse_collection_roms};

/// File name of the AEL collection index inside the AEL data directory.
pub const COLLECTIONS_FILE: &str = "collections.xml";
/// Directory (inside the AEL data directory) holding collection ROM databases.
pub const COLLECTION_DB_DIR: &str = "db_Collections";
/// AML favourites file inside the AML data directory.
pub const FAVOURITES_FILE: &str = "Favourite_Machines.json";
/// AML ROM set manifest inside the AML data directory.
pub const MACHINE_FILES_FILE: &str = "ROM_Set_machine_files.json";
