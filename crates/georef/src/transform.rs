//! Affine pixel/geographic transforms in world-file convention.

use thiserror::Error;

/// The six affine coefficients of a world file.
///
/// The forward (pixel to geographic) mapping is
/// `lon = a*x + b*y + c`, `lat = d*x + e*y + f`, where `a` and `e` are the
/// pixel scales, `b` and `d` the rotation terms, and `(c, f)` the
/// geographic position of the origin pixel.
///
/// The inverse used for marker placement assumes a north-up raster and
/// isolates x and y from the diagonal terms alone. The rotation terms are
/// accepted and stored but never validated or consulted by the inverse, so
/// a rotated world file projects to wrong pixels. Known limitation:
/// marker placement parity on existing sheets depends on this exact
/// behavior, so the inverse must not grow a rotation check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    /// Pixel width in geographic units (x scale)
    pub a: f64,
    /// Row rotation term
    pub d: f64,
    /// Column rotation term
    pub b: f64,
    /// Pixel height in geographic units (negative for north-up rasters)
    pub e: f64,
    /// Longitude of the origin pixel
    pub c: f64,
    /// Latitude of the origin pixel
    pub f: f64,
}

/// Errors from applying an affine transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A scale coefficient is exactly zero, so the inverse would divide by
    /// zero. Almost always a corrupt or mismatched sidecar file.
    #[error("degenerate world-file transform: {axis} scale is zero")]
    ZeroScale { axis: char },
}

impl AffineTransform {
    /// Create a transform from coefficients in world-file line order
    /// (A, D, B, E, C, F).
    pub fn new(a: f64, d: f64, b: f64, e: f64, c: f64, f: f64) -> Self {
        Self { a, d, b, e, c, f }
    }

    /// Project a geographic coordinate onto pixel space.
    ///
    /// This is a truncating projection: `x = trunc((lon - c) / a)`,
    /// `y = trunc((lat - f) / e)`, with the fractional pixel position cast
    /// toward zero rather than rounded. Rounding would shift some markers
    /// by a pixel and break placement parity with previously rendered maps.
    ///
    /// Fails with [`TransformError::ZeroScale`] when `a` or `e` is zero;
    /// f64 division would otherwise yield an infinite coordinate silently.
    pub fn pixel_from_geo(&self, lon: f64, lat: f64) -> Result<(i32, i32), TransformError> {
        if self.a == 0.0 {
            return Err(TransformError::ZeroScale { axis: 'x' });
        }
        if self.e == 0.0 {
            return Err(TransformError::ZeroScale { axis: 'y' });
        }

        let x = ((lon - self.c) / self.a) as i32;
        let y = ((lat - self.f) / self.e) as i32;
        Ok((x, y))
    }

    /// Map a pixel position to geographic coordinates.
    ///
    /// The standard forward world-file transform. Unlike the inverse, it
    /// honors the rotation terms.
    pub fn geo_from_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let lon = self.a * x + self.b * y + self.c;
        let lat = self.d * x + self.e * y + self.f;
        (lon, lat)
    }
}
