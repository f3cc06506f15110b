use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};

use crate::consts::DEFAULT_JPEG_QUALITY;
use crate::error::Result;

/// Decode JPEG/PNG bytes into an RGB image. The format is sniffed from the
/// content.
pub fn decode_photo(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Load an image file as RGB.
pub fn load_photo(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?;
    Ok(img.to_rgb8())
}

/// Encode an image as baseline JPEG at `quality` (1-100).
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_jpeg(image, &mut bytes, quality)?;
    Ok(bytes)
}

fn write_jpeg<W: Write>(image: &RgbImage, writer: W, quality: u8) -> Result<()> {
    let encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
    image.write_with_encoder(encoder)?;
    Ok(())
}

/// Save an image as JPEG at `quality`.
pub fn save_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_jpeg(image, &mut writer, quality)?;
    writer.flush()?;
    Ok(())
}

/// Save an 8-bit RGB PNG.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save image, choosing format from file extension. Anything that is not
/// `.png` is written as JPEG at the default quality.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_png(image, path),
        _ => save_jpeg(image, path, DEFAULT_JPEG_QUALITY),
    }
}
