//! Map sheet registry.
//!
//! Loads the year → map sheet mapping from a YAML config file. This is the
//! single source of truth for which comparison years the panel can render;
//! sheet paths in the config are resolved against the data directory.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One registered map sheet: a raster plus its world-file sidecar.
#[derive(Debug, Clone)]
pub struct MapSheet {
    /// Publication year of the sheet
    pub year: u16,
    /// Raster image path, resolved against the data directory
    pub image_path: PathBuf,
    /// World-file sidecar path, resolved against the data directory
    pub world_file_path: PathBuf,
}

// ============================================================================
// YAML Parsing Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct YamlMapsFile {
    maps: Vec<YamlMapSheet>,
}

#[derive(Debug, Deserialize)]
struct YamlMapSheet {
    year: u16,
    image: String,
    world_file: String,
}

// ============================================================================
// Registry
// ============================================================================

/// Registry of map sheets keyed by year.
#[derive(Debug, Clone, Default)]
pub struct MapRegistry {
    sheets: HashMap<u16, MapSheet>,
}

impl MapRegistry {
    /// Load the registry from a YAML file.
    ///
    /// Any failure leaves the registry empty: the API endpoints keep
    /// serving and every map request degrades to a not-found warning.
    pub fn load_from_file(path: &Path, data_dir: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, path = ?path, "Failed to read map registry file");
                return Self::default();
            }
        };

        let yaml: YamlMapsFile = match serde_yaml::from_str(&contents) {
            Ok(y) => y,
            Err(e) => {
                warn!(error = %e, path = ?path, "Failed to parse map registry file");
                return Self::default();
            }
        };

        let mut sheets = HashMap::with_capacity(yaml.maps.len());
        for entry in yaml.maps {
            let sheet = MapSheet {
                year: entry.year,
                image_path: data_dir.join(&entry.image),
                world_file_path: data_dir.join(&entry.world_file),
            };
            if sheets.insert(entry.year, sheet).is_some() {
                warn!(year = entry.year, "Duplicate year in map registry; keeping the later entry");
            }
        }

        let registry = Self { sheets };
        info!(sheets = registry.len(), "Map sheet registry loaded");
        registry
    }

    /// Get the sheet registered for a year.
    pub fn get(&self, year: u16) -> Option<&MapSheet> {
        self.sheets.get(&year)
    }

    /// All registered years, ascending.
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.sheets.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Number of registered sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the registry holds no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
