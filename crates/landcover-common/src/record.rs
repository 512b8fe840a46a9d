//! Land-cover statistics records.

use serde::{Deserialize, Serialize};

/// One row of the land-cover statistics table: the area covered by one
/// MapBiomas class in one municipality in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandCoverRecord {
    /// Municipality name (`NM_MUN` in the source table)
    pub municipality: String,
    /// Two-letter federative unit code (`SIGLA_UF`)
    pub state: String,
    /// Observation year (`ano`)
    pub year: u16,
    /// Numeric MapBiomas class code (`classe_cobertura`)
    pub class_code: u8,
    /// Class display name resolved from the legend
    pub class_name: String,
    /// Covered area in hectares (`area_ha`)
    pub area_ha: f64,
}

impl LandCoverRecord {
    /// Decade bucket for this record's year (e.g. 1987 -> 1980).
    pub fn decade(&self) -> u16 {
        (self.year / 10) * 10
    }
}
