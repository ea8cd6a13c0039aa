//! Monster catalogue loader.
//!
//! Loads the JSON array written by the monster data generator and runs every
//! record through [`crate::sanitize`].

use std::path::Path;

use calc_core::Monster;

use crate::loaders::{LoadResult, read_file};
use crate::sanitize::sanitize;

/// Loader for the monster catalogue from JSON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load the monster catalogue from a JSON file.
    ///
    /// JSON format: `Vec<Monster>`, one object per wiki page version.
    ///
    /// # Returns
    ///
    /// Sanitised monsters in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<Monster>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse monster catalogue at {}: {}",
                path.display(),
                e
            )
        })
    }

    /// Parse a catalogue from JSON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Monster>> {
        let raw: Vec<Monster> = serde_json::from_str(content)?;
        let total = raw.len();

        let monsters = sanitize(raw);
        tracing::debug!(total, kept = monsters.len(), "parsed monster catalogue");

        Ok(monsters)
    }
}
