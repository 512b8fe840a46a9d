//! Statistics table loading.
//!
//! The source file follows the Brazilian CSV convention: semicolon field
//! separator and comma decimal separator. Rows are joined against the
//! MapBiomas legend on load; rows whose class code is missing from the
//! legend are dropped, mirroring how the table is curated upstream.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Deserializer};

use landcover_common::{CoverClass, LandCoverRecord};

use crate::DatasetError;

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "NM_MUN")]
    municipality: String,
    #[serde(rename = "SIGLA_UF")]
    state: String,
    #[serde(rename = "ano")]
    year: u16,
    #[serde(rename = "classe_cobertura")]
    class_code: u8,
    #[serde(rename = "area_ha", deserialize_with = "comma_decimal")]
    area_ha: f64,
}

/// Parse a decimal that uses a comma as the decimal separator.
fn comma_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid decimal number: {:?}", raw)))
}

/// Read statistics rows from semicolon-separated CSV content.
pub fn read_statistics<R: Read>(reader: R) -> Result<Vec<LandCoverRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(reader);

    let mut records = Vec::new();
    let mut unknown_codes = 0usize;

    for result in csv_reader.deserialize::<RawRecord>() {
        let raw = result?;
        match CoverClass::lookup(raw.class_code) {
            Some(class) => records.push(LandCoverRecord {
                municipality: raw.municipality,
                state: raw.state,
                year: raw.year,
                class_code: raw.class_code,
                class_name: class.name.to_string(),
                area_ha: raw.area_ha,
            }),
            None => unknown_codes += 1,
        }
    }

    if unknown_codes > 0 {
        tracing::debug!(unknown_codes, "Dropped rows with class codes missing from the legend");
    }

    Ok(records)
}

/// Load the statistics table from disk.
pub fn load_statistics(path: impl AsRef<Path>) -> Result<Vec<LandCoverRecord>, DatasetError> {
    let file = File::open(path)?;
    read_statistics(BufReader::new(file))
}
