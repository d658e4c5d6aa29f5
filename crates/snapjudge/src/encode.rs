//! Image encoding: decode raw bytes, flatten alpha, encode JPEG, wrap as a data URL.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgb, RgbImage};

use crate::error::{AnalysisError, Result};

/// JPEG quality (1-100). Keeps payloads small while on-screen text stays legible.
pub const JPEG_QUALITY: u8 = 70;

pub const JPEG_MIME: &str = "image/jpeg";

/// Decode an in-memory image file (PNG, JPEG, ...) as picked from a photo library.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| AnalysisError::InvalidImage(e.to_string()))
}

/// Read and decode an image file from disk.
pub fn open_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path)
        .map_err(|e| AnalysisError::InvalidImage(format!("{}: {}", path.display(), e)))
}

/// Encode as JPEG at [`JPEG_QUALITY`]. Transparent pixels are composited over white.
pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return Err(AnalysisError::InvalidImage(format!(
            "image has no pixels ({}x{})",
            image.width(),
            image.height()
        )));
    }

    let rgb = flatten_alpha(image);
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    DynamicImage::ImageRgb8(rgb)
        .write_with_encoder(encoder)
        .map_err(|e| AnalysisError::InvalidImage(e.to_string()))?;
    Ok(bytes)
}

fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }
    let rgba = image.to_rgba8();
    let mut flattened = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = u16::from(pixel[3]);
        let blend = |channel: u8| -> u8 {
            (((u16::from(channel) * alpha) + (255 * (255 - alpha))) / 255) as u8
        };
        flattened.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }
    flattened
}

/// `data:<mime>;base64,<payload>`
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Encode `image` and wrap it as a JPEG data URL in one step.
pub fn jpeg_data_url(image: &DynamicImage) -> Result<String> {
    let bytes = encode_jpeg(image)?;
    Ok(data_url(JPEG_MIME, &bytes))
}
