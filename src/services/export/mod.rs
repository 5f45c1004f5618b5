//! PNG export of the rendered card.
//!
//! The capture arrives as a raw RGBA buffer cropped to the card's screen
//! region. It is resized to the card's logical size times a fixed
//! oversampling factor before encoding, so output resolution does not depend
//! on the monitor's pixels-per-point.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use thiserror::Error;

/// Oversampling factor applied to the card's logical size.
pub const OVERSAMPLE_FACTOR: u32 = 10;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("captured card region is empty")]
    EmptyCapture,
    #[error("capture buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Default file name offered for an export on the given date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("ramadan_graphic_{}.png", date.format("%Y-%m-%d"))
}

/// Output pixel dimensions for a card with the given logical size.
pub fn oversampled_size(width: f32, height: f32) -> [u32; 2] {
    [
        (width.round().max(1.0) as u32) * OVERSAMPLE_FACTOR,
        (height.round().max(1.0) as u32) * OVERSAMPLE_FACTOR,
    ]
}

/// Encode a cropped RGBA capture as a PNG scaled to `target` pixels.
pub fn encode_card_png(
    rgba: &[u8],
    source: [usize; 2],
    target: [u32; 2],
) -> Result<Vec<u8>, ExportError> {
    let [width, height] = source;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCapture);
    }

    let expected = width * height * 4;
    if rgba.len() != expected {
        return Err(ExportError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let capture = RgbaImage::from_raw(width as u32, height as u32, rgba.to_vec()).ok_or(
        ExportError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        },
    )?;
    let scaled = image::imageops::resize(&capture, target[0], target[1], FilterType::CatmullRom);

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(scaled).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode the capture and write the PNG to `path`.
pub fn write_card_png(
    path: &Path,
    rgba: &[u8],
    source: [usize; 2],
    target: [u32; 2],
) -> Result<()> {
    let bytes = encode_card_png(rgba, source, target).context("Failed to encode card PNG")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write card PNG to {}", path.display()))?;
    Ok(())
}
