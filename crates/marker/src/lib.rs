//! Marker overlay rendering for municipality locator maps.
//!
//! Takes a decoded basemap, a coordinate table and a georeference
//! transform, and produces an annotated copy with a pin glyph at the
//! requested municipality:
//! - Pin glyph (stem + filled circle with outline)
//! - Title-cased label next to the pin
//! - Output scaling and PNG encoding

pub mod lookup;
pub mod overlay;
pub mod png;
pub mod scale;
pub mod style;

pub use lookup::{find_coordinate, title_case};
pub use overlay::overlay_marker;
pub use png::encode_png;
pub use scale::resize_to_width;
pub use style::MarkerStyle;
