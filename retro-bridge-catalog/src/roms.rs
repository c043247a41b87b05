use std::io::Read;
use std::path::Path;

use retro_bridge_core::SourceRecord;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CatalogError;
use crate::json::{asset_path, lenient_string};

/// ROM entry as stored in an AEL collection database.
#[derive(Debug, Deserialize)]
struct AelRom {
    #[serde(default, deserialize_with = "lenient_string")]
    m_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    m_plot: String,
    #[serde(default, deserialize_with = "lenient_string")]
    m_year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    m_developer: String,
    #[serde(default, deserialize_with = "lenient_string")]
    m_genre: String,
    #[serde(default, deserialize_with = "lenient_string")]
    m_nplayers: String,
    #[serde(default, deserialize_with = "lenient_string")]
    platform: String,
    #[serde(default, deserialize_with = "lenient_string")]
    filename: String,
    /// Everything else, including the `s_*` asset paths.
    #[serde(flatten)]
    other: serde_json::Map<String, Value>,
}

impl AelRom {
    fn into_record(self, artwork_field: &str) -> SourceRecord {
        SourceRecord {
            artwork: asset_path(&self.other, artwork_field),
            name: self.m_name,
            description: self.m_plot,
            year: self.m_year,
            developer: self.m_developer,
            genre: self.m_genre,
            players: self.m_nplayers,
            platform: self.platform,
            filename: self.filename,
        }
    }
}

/// Parse an AEL collection ROM database.
///
/// The file is a two-element JSON array: a control header followed by the
/// ROM list. `artwork_field` selects which asset path (e.g. `s_3dbox`)
/// becomes the record's artwork.
pub fn parse_collection_roms<R: Read>(
    reader: R,
    artwork_field: &str,
) -> Result<Vec<SourceRecord>, CatalogError> {
    parse_with_label(reader, artwork_field, "<reader>")
}

fn parse_with_label<R: Read>(
    reader: R,
    artwork_field: &str,
    label: &str,
) -> Result<Vec<SourceRecord>, CatalogError> {
    let raw: Value = serde_json::from_reader(reader).map_err(|e| CatalogError::json(label, e))?;

    let roms = match raw {
        Value::Array(mut parts) if parts.len() >= 2 => parts.swap_remove(1),
        _ => {
            return Err(CatalogError::invalid_rom_database(format!(
                "{label}: expected [control, roms] array"
            )));
        }
    };

    let Value::Array(entries) = roms else {
        return Err(CatalogError::invalid_rom_database(format!(
            "{label}: ROM list is not an array"
        )));
    };

    entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value::<AelRom>(entry)
                .map(|rom| rom.into_record(artwork_field))
                .map_err(|e| CatalogError::json(label, e))
        })
        .collect()
}

/// Load a collection ROM database from disk.
pub fn load_collection_roms(
    path: &Path,
    artwork_field: &str,
) -> Result<Vec<SourceRecord>, CatalogError> {
    log::info!("Loading {}", path.display());
    let file = std::fs::File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let label = path.display().to_string();
    let roms = parse_with_label(std::io::BufReader::new(file), artwork_field, &label)?;
    log::info!("Loaded {} ROMs", roms.len());
    Ok(roms)
}

#[cfg(test)]
#[path = "tests/roms_tests.rs"]
mod tests;
