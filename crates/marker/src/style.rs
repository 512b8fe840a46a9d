//! Marker styling configuration.

use image::Rgba;

/// Configuration for the pin glyph and its label
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    /// Fill color for the pin head and stem (default: red)
    pub fill: Rgba<u8>,
    /// Outline color for the pin head (default: black)
    pub outline: Rgba<u8>,
    /// Pin head radius in pixels (default: 10)
    pub radius: i32,
    /// Stem length below the anchor in pixels (default: 15)
    pub stem_length: i32,
    /// Stem width in pixels (default: 3)
    pub stem_width: i32,
    /// Label offset from the anchor in pixels (default: (10, -5))
    pub label_offset: (i32, i32),
    /// Label font size (default: 12.0)
    pub label_size: f32,
    /// Label text color (default: black)
    pub label_color: Rgba<u8>,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill: Rgba([255, 0, 0, 255]),
            outline: Rgba([0, 0, 0, 255]),
            radius: 10,
            stem_length: 15,
            stem_width: 3,
            label_offset: (10, -5),
            label_size: 12.0,
            label_color: Rgba([0, 0, 0, 255]),
        }
    }
}
