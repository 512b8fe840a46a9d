//! Shared application state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use landcover_common::LandCoverRecord;
use tracing::{info, warn};

use crate::maps::MapRegistry;

/// Statistics table location inside the data directory.
const STATISTICS_TABLE: &str = "historico/estatisticas_coverage_historico.csv";

/// Municipality coordinate table location inside the data directory.
const COORDINATE_TABLE: &str = "coordenadas/municipios_coord.csv";

/// State shared across request handlers.
///
/// The statistics table is loaded once at startup; map sheets and the
/// coordinate table are read again on every map request.
pub struct AppState {
    /// All statistics rows, in file order.
    pub records: Vec<LandCoverRecord>,
    /// Year-indexed map sheet registry.
    pub registry: MapRegistry,
    /// Root for per-request resources.
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load the statistics table and the map registry.
    ///
    /// A missing or malformed statistics table is fatal; an unusable map
    /// registry only disables the locator map endpoint.
    pub fn new(data_dir: &Path, maps_config: &Path) -> Result<Self> {
        let statistics_path = data_dir.join(STATISTICS_TABLE);
        let records = dataset::load_statistics(&statistics_path)
            .with_context(|| format!("loading statistics table {}", statistics_path.display()))?;
        info!(rows = records.len(), "Loaded land-cover statistics table");

        let registry = MapRegistry::load_from_file(maps_config, data_dir);
        if registry.is_empty() {
            warn!("Map registry is empty; locator map requests will be rejected");
        }

        Ok(Self {
            records,
            registry,
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// Path of the municipality coordinate table.
    pub fn coordinates_path(&self) -> PathBuf {
        self.data_dir.join(COORDINATE_TABLE)
    }
}
