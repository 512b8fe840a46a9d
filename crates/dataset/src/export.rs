//! CSV export of filtered rows.
//!
//! Output uses the same convention as the statistics input file:
//! semicolon separator, comma decimals.

use std::io::Write;

use landcover_common::LandCoverRecord;

use crate::DatasetError;

const HEADER: [&str; 6] = [
    "NM_MUN",
    "SIGLA_UF",
    "ano",
    "classe_cobertura",
    "nome_classe",
    "area_ha",
];

/// Write rows as semicolon-separated CSV.
pub fn write_csv<W: Write>(writer: W, records: &[&LandCoverRecord]) -> Result<(), DatasetError> {
    let mut csv_writer = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for record in records {
        let year = record.year.to_string();
        let code = record.class_code.to_string();
        let area = comma_decimal(record.area_ha);
        csv_writer.write_record([
            record.municipality.as_str(),
            record.state.as_str(),
            year.as_str(),
            code.as_str(),
            record.class_name.as_str(),
            area.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export rows to an in-memory CSV document.
pub fn export_csv(records: &[&LandCoverRecord]) -> Result<Vec<u8>, DatasetError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(buffer)
}

/// Format an area with a comma decimal separator. Whole numbers keep one
/// decimal digit so the column always reads as a decimal.
fn comma_decimal(value: f64) -> String {
    let text = if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    };
    text.replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LandCoverRecord> {
        vec![
            LandCoverRecord {
                municipality: "Alfenas".to_string(),
                state: "MG".to_string(),
                year: 1985,
                class_code: 3,
                class_name: "Formação Florestal".to_string(),
                area_ha: 1234.56,
            },
            LandCoverRecord {
                municipality: "Varginha".to_string(),
                state: "MG".to_string(),
                year: 2023,
                class_code: 24,
                class_name: "Área Urbana".to_string(),
                area_ha: 100.0,
            },
        ]
    }

    #[test]
    fn test_export_uses_brazilian_convention() {
        let records = sample();
        let refs: Vec<&LandCoverRecord> = records.iter().collect();
        let bytes = export_csv(&refs).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "NM_MUN;SIGLA_UF;ano;classe_cobertura;nome_classe;area_ha\n\
             Alfenas;MG;1985;3;Formação Florestal;1234,56\n\
             Varginha;MG;2023;24;Área Urbana;100,0\n"
        );
    }

    #[test]
    fn test_export_empty_selection_is_header_only() {
        let bytes = export_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "NM_MUN;SIGLA_UF;ano;classe_cobertura;nome_classe;area_ha\n");
    }

    #[test]
    fn test_export_reads_back_as_statistics() {
        let records = sample();
        let refs: Vec<&LandCoverRecord> = records.iter().collect();
        let bytes = export_csv(&refs).unwrap();

        let reloaded = crate::read_statistics(bytes.as_slice()).unwrap();
        assert_eq!(reloaded, records);
    }

    #[test]
    fn test_comma_decimal_formatting() {
        assert_eq!(comma_decimal(1234.56), "1234,56");
        assert_eq!(comma_decimal(100.0), "100,0");
        assert_eq!(comma_decimal(0.25), "0,25");
    }
}
