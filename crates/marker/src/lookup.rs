//! Municipality name matching and label formatting.

use landcover_common::{normalize_name, MunicipalityCoordinate};

/// Find the coordinate row for a municipality name.
///
/// Matching is insensitive to surrounding whitespace and letter case on
/// both sides; accents and punctuation must match. The first matching
/// row wins when the table carries duplicates.
pub fn find_coordinate<'a>(
    name: &str,
    coordinates: &'a [MunicipalityCoordinate],
) -> Option<&'a MunicipalityCoordinate> {
    let wanted = normalize_name(name);
    coordinates
        .iter()
        .find(|row| normalize_name(&row.name) == wanted)
}

/// Title-case a name for display: uppercase every letter that follows a
/// non-letter (start of string, space, hyphen, apostrophe, digit),
/// lowercase the rest.
///
/// "porto  alegre" becomes "Porto  Alegre", "d'água" becomes "D'Água",
/// "cana-de-açúcar" becomes "Cana-De-Açúcar".
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut boundary = true;
    for ch in name.chars() {
        if boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        boundary = !ch.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<MunicipalityCoordinate> {
        vec![
            MunicipalityCoordinate {
                name: "São Paulo".to_string(),
                longitude: -46.63,
                latitude: -23.55,
            },
            MunicipalityCoordinate {
                name: " Porto Alegre ".to_string(),
                longitude: -51.23,
                latitude: -30.03,
            },
            MunicipalityCoordinate {
                name: "São Paulo".to_string(),
                longitude: 0.0,
                latitude: 0.0,
            },
        ]
    }

    #[test]
    fn test_find_is_case_and_whitespace_insensitive() {
        let table = table();
        let row = find_coordinate("  sÃo paulo ", &table).unwrap();
        assert_eq!(row.longitude, -46.63);

        let row = find_coordinate("PORTO ALEGRE", &table).unwrap();
        assert_eq!(row.latitude, -30.03);
    }

    #[test]
    fn test_find_first_match_wins() {
        let table = table();
        // Two rows named "São Paulo"; the earlier one is returned.
        let row = find_coordinate("são paulo", &table).unwrap();
        assert_eq!(row.latitude, -23.55);
    }

    #[test]
    fn test_find_requires_accents_to_match() {
        let table = table();
        assert!(find_coordinate("sao paulo", &table).is_none());
    }

    #[test]
    fn test_find_missing_name() {
        let table = table();
        assert!(find_coordinate("Atlantis", &table).is_none());
    }

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("são paulo"), "São Paulo");
        assert_eq!(title_case("EXEMPLO"), "Exemplo");
    }

    #[test]
    fn test_title_case_after_punctuation_and_digits() {
        assert_eq!(title_case("d'água"), "D'Água");
        assert_eq!(title_case("cana-de-açúcar"), "Cana-De-Açúcar");
        assert_eq!(title_case("abc3d"), "Abc3D");
    }

    #[test]
    fn test_title_case_preserves_interior_whitespace() {
        assert_eq!(title_case("porto  alegre"), "Porto  Alegre");
    }
}
