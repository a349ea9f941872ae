//! Country catalog
//!
//! Loads the fixed set of entities, keeps them in load order for day indexing,
//! and answers exact lookups and autocomplete searches.

mod embedded;
pub mod loader;

pub use embedded::COUNTRIES_JSON;

use crate::core::Entity;
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Maximum number of names returned by `Catalog::search`
pub const SEARCH_LIMIT: usize = 10;

/// Failure to build a playable catalog
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog must be a JSON array of records")]
    NotAnArray,
    #[error("catalog contains no usable records")]
    Empty,
}

/// The set of guessable entities
///
/// Never empty: every constructor fails with `LoadError::Empty` instead.
#[derive(Debug, Clone)]
pub struct Catalog {
    entities: Vec<Entity>,
    /// Lowercased names, parallel to `entities`
    folded: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Load a catalog from a JSON array of records
    ///
    /// Records without a usable name are skipped; the load fails only when
    /// nothing was accepted.
    ///
    /// # Errors
    /// Returns `LoadError` if the source is not a JSON array or yields no entities.
    ///
    /// # Examples
    /// ```
    /// use geodle::catalog::Catalog;
    ///
    /// let catalog = Catalog::load(r#"[{"name": "Mali"}, {"country": "Chad"}, {"name": ""}]"#).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.lookup("Chad").is_some());
    ///
    /// assert!(Catalog::load("[]").is_err());
    /// ```
    pub fn load(source: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(source)?;
        let Value::Array(records) = value else {
            return Err(LoadError::NotAnArray);
        };
        Self::from_records(&records)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns `LoadError` if the file cannot be read or its contents are not a usable catalog.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read catalog file");
        Self::load(&source)
    }

    /// Load the catalog compiled into the binary
    ///
    /// # Errors
    /// Returns `LoadError` only if the embedded data is corrupt.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::load(COUNTRIES_JSON)
    }

    /// Build a catalog from already-parsed JSON records
    ///
    /// # Errors
    /// Returns `LoadError::Empty` if no record is accepted.
    pub fn from_records(records: &[Value]) -> Result<Self, LoadError> {
        let entities: Vec<Entity> = records.iter().filter_map(loader::parse_record).collect();
        let skipped = records.len() - entities.len();
        if skipped > 0 {
            debug!(skipped, "skipped catalog records without a usable name");
        }
        Self::from_entities(entities)
    }

    /// Build a catalog from entities, in order
    ///
    /// Names are trimmed and blank names are dropped. A repeated name replaces
    /// the earlier entity's data but keeps its position.
    ///
    /// # Errors
    /// Returns `LoadError::Empty` if no entity remains.
    pub fn from_entities<I>(entities: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = Entity>,
    {
        let mut catalog = Self {
            entities: Vec::new(),
            folded: Vec::new(),
            index: FxHashMap::default(),
        };

        for mut entity in entities {
            let trimmed = entity.name.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.len() != entity.name.len() {
                entity.name = trimmed.to_string();
            }
            catalog.insert(entity);
        }

        if catalog.entities.is_empty() {
            return Err(LoadError::Empty);
        }

        debug!(entities = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn insert(&mut self, entity: Entity) {
        if let Some(&position) = self.index.get(&entity.name) {
            warn!(name = %entity.name, "duplicate catalog name, keeping the later record");
            self.entities[position] = entity;
            return;
        }

        self.index.insert(entity.name.clone(), self.entities.len());
        self.folded.push(entity.name.to_lowercase());
        self.entities.push(entity);
    }

    /// Number of entities
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always `false` for a constructed catalog
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities in load order
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entity at a load-order position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Entity> {
        self.entities.get(position)
    }

    /// Exact, case-sensitive lookup by name
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        self.index.get(name).map(|&position| &self.entities[position])
    }

    /// Check whether a name is in the catalog
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Autocomplete search
    ///
    /// Case-insensitive substring match against every name, sorted
    /// lexicographically and capped at `SEARCH_LIMIT`. An empty query matches
    /// nothing.
    ///
    /// # Examples
    /// ```
    /// use geodle::catalog::Catalog;
    ///
    /// let catalog = Catalog::load(r#"[{"name": "Niger"}, {"name": "Nigeria"}, {"name": "Mali"}]"#).unwrap();
    /// assert_eq!(catalog.search("GER"), vec!["Niger", "Nigeria"]);
    /// assert!(catalog.search("").is_empty());
    /// ```
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut matches: Vec<&str> = self
            .entities
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| folded.contains(&needle))
            .map(|(entity, _)| entity.name.as_str())
            .collect();

        matches.sort_unstable();
        matches.truncate(SEARCH_LIMIT);
        matches
    }
}
