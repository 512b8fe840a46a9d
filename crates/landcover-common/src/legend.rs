//! MapBiomas land-cover class legend.
//!
//! Class codes, Portuguese display names and colors follow the MapBiomas
//! collection the statistics table was computed from. Statistics rows whose
//! code is not listed here are dropped at load time.

/// One land-cover class of the MapBiomas legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverClass {
    /// Numeric class code as found in the statistics table
    pub code: u8,
    /// Display name
    pub name: &'static str,
    /// Display color as "#RRGGBB"
    pub color: &'static str,
}

const LEGEND: &[CoverClass] = &[
    CoverClass { code: 3, name: "Formação Florestal", color: "#006400" },
    CoverClass { code: 4, name: "Formação Savânica", color: "#DAA520" },
    CoverClass { code: 5, name: "Mangue", color: "#8B4513" },
    CoverClass { code: 6, name: "Floresta Alagável", color: "#00BFFF" },
    CoverClass { code: 9, name: "Silvicultura", color: "#A52A2A" },
    CoverClass { code: 11, name: "Área Úmida Natural", color: "#B0C4DE" },
    CoverClass { code: 12, name: "Campo Natural", color: "#D2B48C" },
    CoverClass { code: 15, name: "Pastagem", color: "#F5DEB3" },
    CoverClass { code: 18, name: "Agricultura (Outros)", color: "#F4A460" },
    CoverClass { code: 19, name: "Lavoura Temporária", color: "#FFA500" },
    CoverClass { code: 20, name: "Cana-de-açúcar", color: "#B22222" },
    CoverClass { code: 21, name: "Mosaico de Usos", color: "#FFDEAD" },
    CoverClass { code: 23, name: "Praia e Duna", color: "#EEE8AA" },
    CoverClass { code: 24, name: "Área Urbana", color: "#FF0000" },
    CoverClass { code: 25, name: "Outras Áreas Não Vegetadas", color: "#8B0000" },
    CoverClass { code: 29, name: "Afloramento Rochoso", color: "#A9A9A9" },
    CoverClass { code: 30, name: "Mineração", color: "#808000" },
    CoverClass { code: 31, name: "Aquicultura", color: "#1E90FF" },
    CoverClass { code: 39, name: "Soja", color: "#FFA07A" },
];

impl CoverClass {
    /// Look up a class by its numeric code.
    pub fn lookup(code: u8) -> Option<&'static CoverClass> {
        LEGEND.iter().find(|class| class.code == code)
    }

    /// The full legend, ordered by class code.
    pub fn all() -> &'static [CoverClass] {
        LEGEND
    }

    /// Parse the display color into RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(self.color)
    }
}

/// Parse a "#RRGGBB" color string to RGB. Malformed input yields black.
fn parse_hex_color(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return (0, 0, 0);
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);

    (r, g, b)
}
