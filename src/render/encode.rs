//! ICO and PNG encoding for rendered canvases.
//!
//! Both encoders write into memory with fixed parameters, so identical
//! canvases always produce identical bytes.

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{DotgenError, Result};
use crate::types::AssetFormat;

use super::circle::downscale;

/// Largest edge length an ICO directory entry can declare.
pub const MAX_ICO_SIZE: u32 = 256;

/// One state's icon encoded into one container format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    /// State the icon represents.
    pub state: String,

    /// Container format of `bytes`.
    pub format: AssetFormat,

    /// A complete, standalone file of `format`.
    pub bytes: Vec<u8>,
}

impl EncodedAsset {
    pub fn new(state: impl Into<String>, format: AssetFormat, bytes: Vec<u8>) -> Self {
        Self {
            state: state.into(),
            format,
            bytes,
        }
    }
}

/// Encode a canvas into the given format.
pub fn encode(canvas: &RgbaImage, format: AssetFormat, small_size: u32) -> Result<Vec<u8>> {
    match format {
        AssetFormat::Ico => encode_ico(canvas, small_size),
        AssetFormat::Png => encode_png(canvas),
    }
}

/// Encode a canvas as a single-frame RGBA PNG at its native size.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Default, PngFilter::Adaptive);

    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| encode_error(AssetFormat::Png, e))?;

    Ok(bytes)
}

/// Encode a canvas as an ICO holding a `small_size` rendition and the
/// native canvas, in that order.
///
/// Both sizes must fit an ICO directory entry (1 to 256 pixels) and the
/// canvas must be square.
pub fn encode_ico(canvas: &RgbaImage, small_size: u32) -> Result<Vec<u8>> {
    if canvas.width() != canvas.height() {
        return Err(encode_error(
            AssetFormat::Ico,
            format!("canvas is {}x{}, expected a square", canvas.width(), canvas.height()),
        ));
    }

    let mut sizes = vec![small_size, canvas.width()];
    sizes.sort_unstable();
    sizes.dedup();

    if let Some(&size) = sizes.iter().find(|s| !(1..=MAX_ICO_SIZE).contains(*s)) {
        return Err(encode_error(
            AssetFormat::Ico,
            format!("entry size {} is outside 1..={}", size, MAX_ICO_SIZE),
        ));
    }

    let mut dir = IconDir::new(ResourceType::Icon);
    for size in sizes {
        let rendition = downscale(canvas, size);
        let image = IconImage::from_rgba_data(size, size, rendition.into_raw());
        let entry = IconDirEntry::encode(&image).map_err(|e| encode_error(AssetFormat::Ico, e))?;
        dir.add_entry(entry);
    }

    let mut bytes = Vec::new();
    dir.write(&mut bytes)
        .map_err(|e| encode_error(AssetFormat::Ico, e))?;

    Ok(bytes)
}

fn encode_error(format: AssetFormat, err: impl std::fmt::Display) -> DotgenError {
    DotgenError::Encode {
        state: "canvas".to_string(),
        format: format.label().to_string(),
        message: err.to_string(),
    }
}
