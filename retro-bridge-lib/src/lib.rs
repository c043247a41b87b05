//! Conversion engine: AEL collection + AML favourites in, EmulationStation
//! catalog out.
//!
//! The run is strictly sequential: read sources, transform every record
//! (copying ROMs and artwork as it goes), remove stale files from the ROM
//! root, then write `es_systems.cfg` and the per-system gamelists.

pub mod clean;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod sync;
pub mod transform;

pub use clean::{CleanStats, clean_destination};
pub use config::{ArcadeConfig, Config};
pub use error::BridgeError;
pub use pipeline::{RunSummary, run_pipeline};
pub use sync::{FileSynchronizer, SyncOutcome, SyncStats};
pub use transform::Transformer;

pub use retro_bridge_core::{
    Catalog, DestinationRecord, DestinationSystem, MachineRecord, PlatformMapping, PlatformTable,
    SourcePlatform, SourceRecord,
};
