use std::fs;
use std::path::{Path, PathBuf};

use retro_bridge_core::{Catalog, DestinationRecord, DestinationSystem, escape_xml};

use crate::{Frontend, FrontendError};

const GENERATED_HEADER: &str = "<!-- Generated automatically, do not edit! -->";

/// EmulationStation (`es_systems.cfg` + `gamelists/<id>/gamelist.xml`).
pub struct EmulationStation;

impl EmulationStation {
    pub fn new() -> Self {
        Self
    }

    /// Location of the system list inside the ES config directory.
    pub fn system_list_path(config_root: &Path) -> PathBuf {
        config_root.join("es_systems.cfg")
    }

    /// Location of a system's game list inside the ES config directory.
    pub fn game_list_path(config_root: &Path, system_id: &str) -> PathBuf {
        config_root
            .join("gamelists")
            .join(system_id)
            .join("gamelist.xml")
    }

    /// Render `es_systems.cfg`.
    pub fn render_system_list<'a>(
        &self,
        systems: impl IntoIterator<Item = &'a DestinationSystem>,
    ) -> String {
        let mut xml = String::new();
        xml.push_str(GENERATED_HEADER);
        xml.push('\n');
        xml.push_str("<systemList>\n");

        for system in systems {
            xml.push_str("<system>\n");
            write_tag(&mut xml, "name", &system.id);
            write_tag(&mut xml, "fullname", &system.fullname);
            write_tag(&mut xml, "path", &system.path.to_string_lossy());
            write_tag(&mut xml, "extension", &system.extension_list());
            write_tag(&mut xml, "command", &system.command);
            write_tag(&mut xml, "platform", &system.platform);
            write_tag(&mut xml, "theme", &system.theme);
            xml.push_str("</system>\n");
        }

        xml.push_str("</systemList>\n");
        xml
    }

    /// Render one system's `gamelist.xml`.
    pub fn render_game_list(&self, games: &[DestinationRecord]) -> String {
        let mut xml = String::new();
        xml.push_str(GENERATED_HEADER);
        xml.push('\n');
        xml.push_str("<gameList>\n");

        for game in games {
            xml.push_str("<game>\n");
            write_tag(&mut xml, "name", &game.name);
            write_tag(&mut xml, "desc", &game.description);
            write_tag(&mut xml, "releasedate", &game.release_date);
            write_tag(&mut xml, "developer", &game.developer);
            write_tag(&mut xml, "publisher", &game.publisher);
            write_tag(&mut xml, "genre", &game.genre);
            write_tag(&mut xml, "players", &game.players);
            write_tag(&mut xml, "path", &game.path.to_string_lossy());
            let image = game
                .image
                .as_deref()
                .map(|p| p.to_string_lossy())
                .unwrap_or_default();
            write_tag(&mut xml, "image", &image);
            xml.push_str("</game>\n");
        }

        xml.push_str("</gameList>\n");
        xml
    }
}

impl Default for EmulationStation {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for EmulationStation {
    fn name(&self) -> &'static str {
        "EmulationStation"
    }

    fn write_catalog(
        &self,
        catalog: &Catalog,
        config_root: &Path,
    ) -> Result<Vec<PathBuf>, FrontendError> {
        if let Some(bad) = catalog
            .systems()
            .find(|s| s.id.is_empty() || s.id.contains(['/', '\\']) || s.id == "..")
        {
            return Err(FrontendError::InvalidSystemId(bad.id.clone()));
        }

        let mut written = Vec::with_capacity(catalog.system_count() + 1);

        let systems_path = Self::system_list_path(config_root);
        log::info!("Writing {}", systems_path.display());
        write_file(&systems_path, &self.render_system_list(catalog.systems()))?;
        written.push(systems_path);

        for system in catalog.systems() {
            let path = Self::game_list_path(config_root, &system.id);
            log::info!(
                "Writing gamelist for {} ({} games)",
                system.id,
                system.games.len()
            );
            write_file(&path, &self.render_game_list(&system.games))?;
            written.push(path);
        }

        Ok(written)
    }
}

/// Write one field line. Empty text becomes a self-closing tag.
fn write_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str("  <");
    xml.push_str(tag);
    if value.is_empty() {
        xml.push_str(" />\n");
        return;
    }
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

/// Write through a temporary sibling and rename, so a crash never leaves
/// ES with a truncated config.
fn write_file(path: &Path, contents: &str) -> Result<(), FrontendError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FrontendError::io(parent, e))?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents).map_err(|e| FrontendError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| FrontendError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/emulationstation_tests.rs"]
mod tests;
