//! Generation pipeline.
//!
//! Palette -> rasterizer -> encoder -> emitter. Each state is rasterized
//! once and encoded into every selected format.

use crate::emit::Emitter;
use crate::error::{DotgenError, Result};
use crate::render::{
    encode, rasterize_circle, EncodedAsset, DEFAULT_MARGIN, DEFAULT_SIZE, DEFAULT_SMALL_SIZE,
    MAX_ICO_SIZE,
};
use crate::types::{AssetFormat, Palette};

/// Canvas and format parameters for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Canvas edge length.
    pub size: u32,

    /// Gap between circle and canvas edge.
    pub margin: u32,

    /// Edge length of the secondary ICO entry.
    pub small_size: u32,

    /// Formats to encode, in any order.
    pub formats: Vec<AssetFormat>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            margin: DEFAULT_MARGIN,
            small_size: DEFAULT_SMALL_SIZE,
            formats: vec![AssetFormat::Ico],
        }
    }
}

impl GeneratorOptions {
    /// Selected formats, sorted and deduplicated.
    pub fn formats(&self) -> Vec<AssetFormat> {
        AssetFormat::normalize(&self.formats)
    }

    /// Reject option combinations no encoder can honour.
    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(config_error(
                "No output formats selected",
                Some("Select at least one of: ico, png"),
            ));
        }

        if self.size == 0 || self.size > MAX_ICO_SIZE {
            return Err(config_error(
                &format!("Canvas size {} is out of range", self.size),
                Some("Use a size between 1 and 256"),
            ));
        }

        if self.margin.saturating_mul(2) >= self.size {
            return Err(config_error(
                &format!(
                    "Margin {} leaves no room for a circle on a {}px canvas",
                    self.margin, self.size
                ),
                None,
            ));
        }

        if self.formats.contains(&AssetFormat::Ico)
            && (self.small_size == 0 || self.small_size >= self.size)
        {
            return Err(config_error(
                &format!(
                    "Small ICO size {} must be between 1 and {}",
                    self.small_size,
                    self.size - 1
                ),
                None,
            ));
        }

        Ok(())
    }
}

/// Rasterize and encode every state in `palette`.
///
/// Assets come back format-major: all ICO assets in palette order, then
/// all PNG assets in palette order. Any encode failure aborts the run.
pub fn generate_assets(palette: &Palette, options: &GeneratorOptions) -> Result<Vec<EncodedAsset>> {
    options.validate()?;
    let formats = options.formats();

    let mut by_format: Vec<Vec<EncodedAsset>> = vec![Vec::new(); formats.len()];
    for state in palette.iter() {
        let canvas = rasterize_circle(state.colour, options.size, options.margin);

        for (slot, &format) in by_format.iter_mut().zip(&formats) {
            let bytes = encode(&canvas, format, options.small_size)
                .map_err(|e| e.for_state(&state.name))?;
            slot.push(EncodedAsset::new(state.name.clone(), format, bytes));
        }
    }

    Ok(by_format.into_iter().flatten().collect())
}

/// Generate assets and emit them as one document.
pub fn render_document(
    palette: &Palette,
    options: &GeneratorOptions,
    emitter: &Emitter,
) -> Result<String> {
    emitter.validate()?;
    let assets = generate_assets(palette, options)?;
    Ok(emitter.emit(&assets))
}

fn config_error(message: &str, help: Option<&str>) -> DotgenError {
    DotgenError::Config {
        message: message.to_string(),
        help: help.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GeneratorOptions::default();
        assert_eq!(options.size, 32);
        assert_eq!(options.margin, 4);
        assert_eq!(options.small_size, 16);
        assert_eq!(options.formats, vec![AssetFormat::Ico]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_options() {
        let base = GeneratorOptions::default();

        let cases = [
            GeneratorOptions { formats: vec![], ..base.clone() },
            GeneratorOptions { size: 0, ..base.clone() },
            GeneratorOptions { size: 300, ..base.clone() },
            GeneratorOptions { margin: 16, ..base.clone() },
            GeneratorOptions { small_size: 32, ..base.clone() },
            GeneratorOptions { small_size: 0, ..base.clone() },
        ];
        for options in cases {
            assert!(options.validate().is_err(), "{:?} should be rejected", options);
        }
    }

    #[test]
    fn test_small_size_ignored_without_ico() {
        let options = GeneratorOptions {
            small_size: 64,
            formats: vec![AssetFormat::Png],
            ..GeneratorOptions::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_generate_one_asset_per_state() {
        let palette = Palette::tray_states();
        let assets = generate_assets(&palette, &GeneratorOptions::default()).unwrap();
        assert_eq!(assets.len(), 6);
        assert!(assets.iter().all(|a| a.format == AssetFormat::Ico));
        assert_eq!(assets[0].state, "Idle");
        assert_eq!(assets[5].state, "Error");
    }

    #[test]
    fn test_generate_format_major() {
        let palette = Palette::tray_states();
        let options = GeneratorOptions {
            formats: vec![AssetFormat::Png, AssetFormat::Ico],
            ..GeneratorOptions::default()
        };
        let assets = generate_assets(&palette, &options).unwrap();
        assert_eq!(assets.len(), 12);
        assert!(assets[..6].iter().all(|a| a.format == AssetFormat::Ico));
        assert!(assets[6..].iter().all(|a| a.format == AssetFormat::Png));
        assert_eq!(assets[6].state, "Idle");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let palette = Palette::tray_states();
        let options = GeneratorOptions {
            formats: vec![AssetFormat::Ico, AssetFormat::Png],
            ..GeneratorOptions::default()
        };
        assert_eq!(
            generate_assets(&palette, &options).unwrap(),
            generate_assets(&palette, &options).unwrap()
        );
    }
}
