//! Municipality coordinate table loading.
//!
//! Unlike the statistics table this file is plain comma-separated CSV
//! with dot decimals. Row order is preserved: marker lookup takes the
//! first match when a name appears twice.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use landcover_common::MunicipalityCoordinate;

use crate::DatasetError;

/// Read coordinate rows from CSV content.
pub fn read_coordinates<R: Read>(reader: R) -> Result<Vec<MunicipalityCoordinate>, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<MunicipalityCoordinate>() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Load the coordinate table from disk.
pub fn load_coordinates(path: impl AsRef<Path>) -> Result<Vec<MunicipalityCoordinate>, DatasetError> {
    let file = File::open(path)?;
    read_coordinates(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
nome_municipio,longitude,latitude
São Paulo,-46.6333,-23.5505
Porto Alegre,-51.2287,-30.0277
São Paulo,0.0,0.0
";

    #[test]
    fn test_read_coordinates() {
        let rows = read_coordinates(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "São Paulo");
        assert_eq!(rows[0].longitude, -46.6333);
        assert_eq!(rows[0].latitude, -23.5505);
    }

    #[test]
    fn test_read_coordinates_preserves_row_order() {
        let rows = read_coordinates(SAMPLE.as_bytes()).unwrap();
        // The duplicate name keeps both rows, in file order.
        assert_eq!(rows[2].name, "São Paulo");
        assert_eq!(rows[2].longitude, 0.0);
    }

    #[test]
    fn test_read_coordinates_rejects_bad_number() {
        let content = "\
nome_municipio,longitude,latitude
Lugar,leste,-23.0
";
        assert!(read_coordinates(content.as_bytes()).is_err());
    }
}
