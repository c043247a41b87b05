use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use retro_bridge_core::unescape_xml;

use crate::error::CatalogError;

/// One `<Collection>` element from `collections.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Value of `m_name`.
    pub name: String,
    /// Every child element, unescaped, in document order.
    pub fields: IndexMap<String, String>,
}

impl Collection {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Basename (no extension) of this collection's ROM database.
    pub fn roms_base_noext(&self) -> Result<&str, CatalogError> {
        self.field("roms_base_noext")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CatalogError::MissingField {
                collection: self.name.clone(),
                field: "roms_base_noext".to_string(),
            })
    }
}

/// All collections in document order, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct CollectionIndex {
    collections: Vec<Collection>,
    by_name: HashMap<String, usize>,
}

impl CollectionIndex {
    fn push(&mut self, collection: Collection) -> Result<(), CatalogError> {
        if self.by_name.contains_key(&collection.name) {
            return Err(CatalogError::DuplicateCollection(collection.name));
        }
        self.by_name
            .insert(collection.name.clone(), self.collections.len());
        self.collections.push(collection);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.by_name.get(name).map(|&i| &self.collections[i])
    }

    /// Look up a collection by name, failing if it does not exist.
    pub fn select(&self, name: &str) -> Result<&Collection, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::CollectionNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// Parse an AEL `collections.xml` document.
///
/// Only direct `<Collection>` children of the root element are read; their
/// child elements become string fields. Self-closing children are empty
/// strings. A collection without `m_name` or a repeated name is an error.
pub fn parse_collections<R: BufRead>(reader: R) -> Result<CollectionIndex, CatalogError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut index = CollectionIndex::default();

    let mut depth = 0usize;
    let mut current: Option<IndexMap<String, String>> = None;
    let mut current_field: Option<(String, String)> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                depth += 1;
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match depth {
                    2 if tag == "Collection" => current = Some(IndexMap::new()),
                    3 if current.is_some() => current_field = Some((tag, String::new())),
                    _ => {}
                }
            }
            Event::Empty(ref e) => {
                if depth == 2 {
                    if let Some(ref mut fields) = current {
                        let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                        fields.insert(tag, String::new());
                    }
                }
            }
            Event::Text(e) => {
                if let Some((_, ref mut text)) = current_field {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::CData(e) => {
                if let Some((_, ref mut text)) = current_field {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                match depth {
                    3 => {
                        if let (Some((tag, text)), Some(fields)) =
                            (current_field.take(), current.as_mut())
                        {
                            fields.insert(tag, unescape_xml(&text));
                        }
                    }
                    2 => {
                        if let Some(fields) = current.take() {
                            index.push(collection_from_fields(fields)?)?;
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(index)
}

fn collection_from_fields(fields: IndexMap<String, String>) -> Result<Collection, CatalogError> {
    let name = fields
        .get("m_name")
        .cloned()
        .ok_or_else(|| CatalogError::MissingField {
            collection: format!("#{}", fields.len()),
            field: "m_name".to_string(),
        })?;
    Ok(Collection { name, fields })
}

/// Load and parse `collections.xml` from disk.
pub fn load_collections(path: &Path) -> Result<CollectionIndex, CatalogError> {
    log::info!("Loading {}", path.display());
    let file = std::fs::File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let index = parse_collections(std::io::BufReader::new(file))?;
    log::info!("Loaded {} collections", index.len());
    for collection in index.iter() {
        log::debug!("Collection '{}'", collection.name);
    }
    Ok(index)
}

#[cfg(test)]
#[path = "tests/collections_tests.rs"]
mod tests;
