//! Output image formats.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A binary image container an asset is encoded into.
///
/// Ordering puts ICO before PNG; generated documents group declarations
/// in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    /// Windows icon with a downscaled secondary entry
    Ico,
    /// Single-frame PNG at native size
    Png,
}

impl AssetFormat {
    /// Upper-case label used in declaration names.
    pub fn label(self) -> &'static str {
        match self {
            AssetFormat::Ico => "ICO",
            AssetFormat::Png => "PNG",
        }
    }

    /// Sort and deduplicate a format selection.
    pub fn normalize(formats: &[AssetFormat]) -> Vec<AssetFormat> {
        let mut formats = formats.to_vec();
        formats.sort();
        formats.dedup();
        formats
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
