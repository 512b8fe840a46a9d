//! Pin overlay drawing.

use std::path::PathBuf;
use std::sync::OnceLock;

use georef::{AffineTransform, TransformError};
use image::RgbaImage;
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_text_mut,
};
use landcover_common::{normalize_name, MunicipalityCoordinate};
use rusttype::{Font, Scale};

use crate::lookup::{find_coordinate, title_case};
use crate::style::MarkerStyle;

/// Environment variable naming a TTF file for marker labels.
pub const LABEL_FONT_ENV: &str = "LANDCOVER_LABEL_FONT";

/// Well-known font locations tried when the env var is unset.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

static LABEL_FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();

/// Resolve the label font once per process.
///
/// Tries `LANDCOVER_LABEL_FONT` first, then the usual system locations.
/// Returns `None` when no usable font exists; markers are then drawn
/// without their text label.
fn label_font() -> Option<&'static Font<'static>> {
    LABEL_FONT
        .get_or_init(|| {
            let mut candidates: Vec<PathBuf> = Vec::new();
            if let Ok(path) = std::env::var(LABEL_FONT_ENV) {
                candidates.push(PathBuf::from(path));
            }
            candidates.extend(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));

            for path in candidates {
                if let Ok(bytes) = std::fs::read(&path) {
                    match Font::try_from_vec(bytes) {
                        Some(font) => {
                            tracing::debug!(path = %path.display(), "Loaded marker label font");
                            return Some(font);
                        }
                        None => {
                            tracing::warn!(path = %path.display(), "Font file is not a usable TTF");
                        }
                    }
                }
            }

            tracing::warn!("No label font found; markers will be drawn without labels");
            None
        })
        .as_ref()
}

/// Draw a location pin for a municipality onto a copy of the basemap.
///
/// The base image is never touched: the pin is drawn on a fresh copy,
/// which is returned. When `name` has no row in the coordinate table the
/// unannotated copy is returned as-is. A degenerate georeference (zero
/// pixel scale) is the only error.
///
/// The pin is a downward stem from the anchor, a filled circle with an
/// outline on top of it, and the requested name (normalized, then
/// title-cased) next to the circle. Anchors that project outside the
/// canvas draw a clipped glyph or nothing; that is not an error.
pub fn overlay_marker(
    name: &str,
    base: &RgbaImage,
    coordinates: &[MunicipalityCoordinate],
    transform: &AffineTransform,
    style: &MarkerStyle,
) -> Result<RgbaImage, TransformError> {
    let mut annotated = base.clone();

    let row = match find_coordinate(name, coordinates) {
        Some(row) => row,
        None => {
            tracing::debug!(name, "Municipality not in coordinate table, returning plain copy");
            return Ok(annotated);
        }
    };

    let (x, y) = transform.pixel_from_geo(row.longitude, row.latitude)?;

    // Stem first so the pin head covers its top end.
    let first_column = x - style.stem_width / 2;
    for column in first_column..first_column + style.stem_width {
        draw_line_segment_mut(
            &mut annotated,
            (column as f32, y as f32),
            (column as f32, (y + style.stem_length) as f32),
            style.fill,
        );
    }

    draw_filled_circle_mut(&mut annotated, (x, y), style.radius, style.fill);
    draw_hollow_circle_mut(&mut annotated, (x, y), style.radius, style.outline);

    if let Some(font) = label_font() {
        let label = title_case(&normalize_name(name));
        let (dx, dy) = style.label_offset;
        draw_text_mut(
            &mut annotated,
            style.label_color,
            x + dx,
            y + dy,
            Scale::uniform(style.label_size),
            font,
            &label,
        );
    }

    Ok(annotated)
}
