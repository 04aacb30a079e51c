//! dotgen - Tray status icon generator
//!
//! Rasterizes one coloured circle per tray state, encodes it as ICO and/or
//! PNG, and emits the bytes as array literals in a generated source file.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use config::{Config, CONFIG_FILENAME};
pub use emit::{declaration_name, format_bytes, parse_document, Emitter, Language};
pub use error::{DotgenError, Result};
pub use generate::{generate_assets, render_document, GeneratorOptions};
pub use render::{downscale, encode_ico, encode_png, rasterize_circle, EncodedAsset};
pub use types::{AssetFormat, Colour, Palette, StateColour};
pub use validation::{validate_assets, validate_document, Diagnostic, Severity, ValidationResult};
