//! Municipality centroid coordinates.

use serde::{Deserialize, Serialize};

/// A municipality's representative geographic point, used to place the
/// locator pin on a map sheet.
///
/// Names in the source table are not required to be unique; lookups take
/// the first row whose normalized name matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityCoordinate {
    /// Municipality name (`nome_municipio` in the source table)
    #[serde(rename = "nome_municipio")]
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// Normalize a municipality name for matching: trim surrounding whitespace
/// and lowercase.
///
/// Accents and punctuation stay significant: "São Paulo" and "Sao Paulo"
/// are different names under this rule.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
