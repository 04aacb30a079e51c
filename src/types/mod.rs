//! Core domain types for dotgen.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - Ordered named tray states
//! - `AssetFormat` - Image containers an icon is encoded into

mod colour;
mod format;
mod palette;

pub use colour::Colour;
pub use format::AssetFormat;
pub use palette::{Palette, StateColour};
