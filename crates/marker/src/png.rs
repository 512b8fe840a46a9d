//! PNG encoding for annotated map images.
//!
//! Annotated maps are resampled truecolor rasters, so this writes RGBA
//! PNGs (color type 6) directly: signature, IHDR, one zlib-compressed
//! IDAT and IEND, with CRCs from crc32fast.

use std::io::Write;

use image::RgbaImage;

/// Encode an RGBA image as a PNG byte stream.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, String> {
    let width = image.width();
    let height = image.height();

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(6); // color type 6 = truecolor with alpha
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr);

    // IDAT chunk
    let idat = deflate_scanlines(image.as_raw(), width as usize, height as usize)
        .map_err(|e| format!("IDAT compression failed: {}", e))?;
    write_chunk(&mut png, b"IDAT", &idat);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write one PNG chunk: length, type, data, CRC over type+data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each scanline with filter type 0 and zlib-compress the result.
fn deflate_scanlines(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    let stride = width * 4;
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for y in 0..height {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(&pixels[y * stride..(y + 1) * stride]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_encode_png_header() {
        let image = RgbaImage::from_pixel(800, 600, Rgba([12, 34, 56, 255]));
        let png = encode_png(&image).unwrap();

        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        // IHDR payload starts at offset 16: width then height, big-endian.
        assert_eq!(&png[16..20], &800u32.to_be_bytes());
        assert_eq!(&png[20..24], &600u32.to_be_bytes());
        assert_eq!(png[24], 8); // bit depth
        assert_eq!(png[25], 6); // truecolor with alpha
    }

    #[test]
    fn test_encode_png_roundtrips_through_decoder() {
        let mut image = RgbaImage::from_pixel(5, 3, Rgba([200, 200, 200, 255]));
        image.put_pixel(2, 1, Rgba([255, 0, 0, 255]));

        let png = encode_png(&image).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

        assert_eq!(decoded, image);
    }
}
