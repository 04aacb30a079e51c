//! Validation checks for encoded assets and generated documents.
//!
//! Each check returns a `ValidationResult`; none of them fail fast.

use std::collections::HashSet;
use std::io::Cursor;

use ico::IconDir;
use image::{ImageFormat, RgbaImage};

use crate::types::{AssetFormat, Colour, Palette};

use super::diagnostic::{Diagnostic, ValidationResult};

/// What a decoded asset is expected to look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    /// Palette colour at the circle's centre.
    pub colour: Colour,
    /// Native canvas size.
    pub size: u32,
    /// Secondary ICO entry size.
    pub small_size: u32,
}

impl Expectation {
    /// Resolutions an ICO asset should expose, smallest first.
    pub fn ico_sizes(&self) -> Vec<u32> {
        let mut sizes = vec![self.small_size, self.size];
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

/// Decode an asset and check its resolutions, centre colour and corners.
pub fn check_asset(
    name: &str,
    format: AssetFormat,
    bytes: &[u8],
    expected: &Expectation,
) -> ValidationResult {
    match format {
        AssetFormat::Png => check_png(name, bytes, expected),
        AssetFormat::Ico => check_ico(name, bytes, expected),
    }
}

fn check_png(name: &str, bytes: &[u8], expected: &Expectation) -> ValidationResult {
    let mut result = ValidationResult::new();

    let img = match image::load_from_memory_with_format(bytes, ImageFormat::Png) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            result.push(decode_error(name, AssetFormat::Png, e));
            return result;
        }
    };

    if img.dimensions() != (expected.size, expected.size) {
        result.push(Diagnostic::error(
            "dotgen::validate::size",
            name,
            format!(
                "PNG is {}x{}, expected {}x{}",
                img.width(),
                img.height(),
                expected.size,
                expected.size
            ),
        ));
        return result;
    }

    result.merge(check_pixels(name, &img, expected.colour, 0));
    result
}

fn check_ico(name: &str, bytes: &[u8], expected: &Expectation) -> ValidationResult {
    let mut result = ValidationResult::new();

    let dir = match IconDir::read(Cursor::new(bytes)) {
        Ok(dir) => dir,
        Err(e) => {
            result.push(decode_error(name, AssetFormat::Ico, e));
            return result;
        }
    };

    let mut sizes: Vec<u32> = dir.entries().iter().map(|e| e.width()).collect();
    sizes.sort_unstable();
    if sizes != expected.ico_sizes() {
        result.push(
            Diagnostic::error(
                "dotgen::validate::size",
                name,
                format!(
                    "ICO holds sizes {:?}, expected {:?}",
                    sizes,
                    expected.ico_sizes()
                ),
            )
            .with_help("Regenerate the icons with the current size settings"),
        );
    }

    for entry in dir.entries() {
        let decoded = entry
            .decode()
            .map_err(|e| e.to_string())
            .and_then(|image| {
                RgbaImage::from_raw(image.width(), image.height(), image.rgba_data().to_vec())
                    .ok_or_else(|| "pixel buffer does not match entry size".to_string())
            });

        match decoded {
            Ok(img) => {
                // Resampled entries may round by one step
                let tolerance = if img.width() == expected.size { 0 } else { 1 };
                result.merge(check_pixels(name, &img, expected.colour, tolerance));
            }
            Err(message) => result.push(decode_error(name, AssetFormat::Ico, message)),
        }
    }

    result
}

/// Centre pixel matches `colour`; corner pixels are fully transparent.
fn check_pixels(name: &str, img: &RgbaImage, colour: Colour, tolerance: u8) -> ValidationResult {
    let mut result = ValidationResult::new();
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return result;
    }

    let centre = Colour::from(*img.get_pixel(w / 2, h / 2));
    if centre.distance(colour) > tolerance {
        result.push(Diagnostic::error(
            "dotgen::validate::colour",
            name,
            format!("{}x{} centre pixel is {}, expected {}", w, h, centre, colour),
        ));
    }

    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        let alpha = img.get_pixel(x, y).0[3];
        if alpha != 0 {
            result.push(Diagnostic::error(
                "dotgen::validate::transparency",
                name,
                format!("{}x{} corner ({}, {}) has alpha {}", w, h, x, y, alpha),
            ));
        }
    }

    result
}

/// Check that declaration names are pairwise distinct.
pub fn check_unique_names<'a>(names: impl IntoIterator<Item = &'a str>) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for name in names {
        if !seen.insert(name) {
            result.push(Diagnostic::error(
                "dotgen::validate::duplicate-name",
                name,
                "Declared more than once",
            ));
        }
    }

    result
}

/// Warn about palette colours that would render an invisible or
/// see-through icon.
pub fn check_palette(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    for state in palette.iter() {
        if state.colour.is_transparent() {
            result.push(
                Diagnostic::warning(
                    "dotgen::validate::invisible",
                    &state.name,
                    format!("Colour {} is fully transparent", state.colour),
                )
                .with_help("Give the state a non-zero alpha"),
            );
        } else if !state.colour.is_opaque() {
            result.push(Diagnostic::warning(
                "dotgen::validate::translucent",
                &state.name,
                format!(
                    "Colour {} is partly transparent and will blend with the tray",
                    state.colour
                ),
            ));
        }
    }

    result
}

fn decode_error(name: &str, format: AssetFormat, err: impl std::fmt::Display) -> Diagnostic {
    Diagnostic::error(
        "dotgen::validate::decode",
        name,
        format!("Not a decodable {}: {}", format, err),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{encode_ico, encode_png, rasterize_circle};
    use crate::types::StateColour;

    const IDLE: Colour = Colour::rgb(128, 128, 128);

    fn expectation() -> Expectation {
        Expectation {
            colour: IDLE,
            size: 32,
            small_size: 16,
        }
    }

    #[test]
    fn test_valid_png_passes() {
        let bytes = encode_png(&rasterize_circle(IDLE, 32, 4)).unwrap();
        let result = check_asset("DataIdlePNG", AssetFormat::Png, &bytes, &expectation());
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_valid_ico_passes() {
        let bytes = encode_ico(&rasterize_circle(IDLE, 32, 4), 16).unwrap();
        let result = check_asset("DataIdleICO", AssetFormat::Ico, &bytes, &expectation());
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_wrong_colour_is_reported() {
        let bytes = encode_png(&rasterize_circle(Colour::rgb(232, 17, 35), 32, 4)).unwrap();
        let result = check_asset("DataIdle", AssetFormat::Png, &bytes, &expectation());
        assert_eq!(result.error_count(), 1);
        assert_eq!(
            result.iter().next().map(|d| d.code.as_str()),
            Some("dotgen::validate::colour")
        );
    }

    #[test]
    fn test_opaque_corner_is_reported() {
        let canvas = RgbaImage::from_pixel(32, 32, IDLE.into());
        let bytes = encode_png(&canvas).unwrap();
        let result = check_asset("DataIdle", AssetFormat::Png, &bytes, &expectation());
        assert_eq!(result.error_count(), 4);
    }

    #[test]
    fn test_wrong_size_is_reported() {
        let bytes = encode_png(&rasterize_circle(IDLE, 24, 4)).unwrap();
        let result = check_asset("DataIdle", AssetFormat::Png, &bytes, &expectation());
        assert!(result.has_errors());
    }

    #[test]
    fn test_ico_missing_resolution_is_reported() {
        let bytes = encode_ico(&rasterize_circle(IDLE, 32, 4), 32).unwrap();
        let result = check_asset("DataIdle", AssetFormat::Ico, &bytes, &expectation());
        assert!(result
            .iter()
            .any(|d| d.code == "dotgen::validate::size"));
    }

    #[test]
    fn test_garbage_is_undecodable() {
        for format in [AssetFormat::Png, AssetFormat::Ico] {
            let result = check_asset("DataIdle", format, b"not an image", &expectation());
            assert!(result
                .iter()
                .any(|d| d.code == "dotgen::validate::decode"));
        }
    }

    #[test]
    fn test_png_bytes_declared_as_ico() {
        let bytes = encode_png(&rasterize_circle(IDLE, 32, 4)).unwrap();
        let result = check_asset("DataIdle", AssetFormat::Ico, &bytes, &expectation());
        assert!(result.has_errors());
    }

    #[test]
    fn test_unique_names() {
        assert!(check_unique_names(["DataIdle", "DataError"]).is_ok());
        let result = check_unique_names(["DataIdle", "DataError", "DataIdle"]);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_palette_warnings() {
        assert!(check_palette(&Palette::tray_states()).is_ok());

        let palette = Palette::new(vec![
            StateColour::new("Hidden", Colour::TRANSPARENT),
            StateColour::new("Faint", IDLE.with_alpha(128)),
            StateColour::new("Shown", IDLE),
        ])
        .unwrap();
        let result = check_palette(&palette);
        let codes: Vec<(&str, &str)> = result
            .iter()
            .map(|d| (d.subject.as_str(), d.code.as_str()))
            .collect();
        assert_eq!(
            codes,
            vec![
                ("Hidden", "dotgen::validate::invisible"),
                ("Faint", "dotgen::validate::translucent"),
            ]
        );
        assert!(!result.has_errors());
    }
}
