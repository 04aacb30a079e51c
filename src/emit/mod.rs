//! Source emitter for encoded assets.
//!
//! Turns encoded assets into a generated source document: a fixed preamble,
//! then one named byte array per asset, wrapped at a fixed number of values
//! per line. Documents can be parsed back to recover the arrays.

mod language;

use std::collections::BTreeSet;

pub use language::{is_go_package_name, Language};

use crate::error::{DotgenError, Result};
use crate::render::EncodedAsset;
use crate::types::AssetFormat;

/// Hex values per data line.
pub const BYTES_PER_LINE: usize = 12;

/// Default Go package name.
pub const DEFAULT_PACKAGE: &str = "icon";

/// Document emitter configuration.
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Language of the generated document.
    pub language: Language,

    /// Package name (Go only).
    pub package: String,

    /// Append state lookup functions.
    pub lookup: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Emitter {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            package: DEFAULT_PACKAGE.to_string(),
            lookup: false,
        }
    }

    /// Set the package name.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Enable or disable lookup functions.
    pub fn with_lookup(mut self, lookup: bool) -> Self {
        self.lookup = lookup;
        self
    }

    /// Reject settings that would emit a document the target compiler refuses.
    pub fn validate(&self) -> Result<()> {
        if self.language == Language::Go && !is_go_package_name(&self.package) {
            return Err(DotgenError::Config {
                message: format!("Invalid Go package name: {:?}", self.package),
                help: Some(
                    "Use a Go identifier such as `icon` (letters, digits and underscores)"
                        .to_string(),
                ),
            });
        }
        Ok(())
    }

    /// Emit a complete document for `assets`.
    ///
    /// Assets keep their relative order within a format; all ICO
    /// declarations come before all PNG declarations.
    pub fn emit(&self, assets: &[EncodedAsset]) -> String {
        let lang = self.language;
        let mut ordered: Vec<&EncodedAsset> = assets.iter().collect();
        ordered.sort_by_key(|a| a.format);

        let formats: BTreeSet<AssetFormat> = ordered.iter().map(|a| a.format).collect();
        let disambiguate = formats.len() > 1;

        let mut lines = lang.preamble(&self.package);
        lines.push(String::new());

        for asset in &ordered {
            let name = declaration_name(&asset.state, asset.format, disambiguate);
            lines.push(lang.asset_comment(&name, &asset.state, asset.format));
            lines.push(lang.open_declaration(&name));
            lines.extend(format_bytes(&asset.bytes, lang.indent()));
            lines.push(lang.close_declaration().to_string());
            lines.push(String::new());
        }

        if self.lookup {
            for &format in &formats {
                let names: Vec<(&str, String)> = ordered
                    .iter()
                    .filter(|a| a.format == format)
                    .map(|a| {
                        (
                            a.state.as_str(),
                            declaration_name(&a.state, format, disambiguate),
                        )
                    })
                    .collect();
                let arms: Vec<(&str, &str)> =
                    names.iter().map(|(s, n)| (*s, n.as_str())).collect();

                let function = lang.lookup_name(format, disambiguate);
                lines.extend(lang.lookup_function(&function, format, &arms));
                lines.push(String::new());
            }
        }

        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let mut document = lines.join("\n");
        document.push('\n');
        document
    }
}

/// Declaration name for an asset.
///
/// `Data<State>` when a document holds a single format, otherwise
/// `Data<State><FORMAT>`.
pub fn declaration_name(state: &str, format: AssetFormat, disambiguate: bool) -> String {
    if disambiguate {
        format!("Data{}{}", state, format.label())
    } else {
        format!("Data{}", state)
    }
}

/// Format bytes as `0xhh` literals, `BYTES_PER_LINE` to a line.
///
/// Every line carries a trailing comma; the last may be shorter.
pub fn format_bytes(bytes: &[u8], indent: &str) -> Vec<String> {
    bytes
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let values: Vec<String> = chunk.iter().map(|b| format!("0x{:02x}", b)).collect();
            format!("{}{},", indent, values.join(", "))
        })
        .collect()
}

/// Recover `(name, bytes)` pairs from a generated document.
///
/// Accepts documents in any supported language.
pub fn parse_document(text: &str) -> Result<Vec<(String, Vec<u8>)>> {
    let mut arrays = Vec::new();
    let mut current: Option<(Language, String, Vec<u8>)> = None;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;

        if let Some((lang, name, mut bytes)) = current.take() {
            let trimmed = line.trim();
            if trimmed == lang.close_declaration() {
                arrays.push((name, bytes));
                continue;
            }

            for token in trimmed.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                bytes.push(parse_byte(token).ok_or_else(|| DotgenError::Validation {
                    message: format!("Invalid byte literal {:?} in {} (line {})", token, name, line_no),
                    help: None,
                })?);
            }
            current = Some((lang, name, bytes));
            continue;
        }

        for lang in [Language::Rust, Language::Go] {
            if let Some(name) = lang.parse_declaration(line) {
                current = Some((lang, name.to_string(), Vec::new()));
                break;
            }
        }
    }

    if let Some((_, name, _)) = current {
        return Err(DotgenError::Validation {
            message: format!("Unterminated declaration: {}", name),
            help: Some("The document may be truncated; regenerate it".to_string()),
        });
    }

    Ok(arrays)
}

fn parse_byte(token: &str) -> Option<u8> {
    let hex = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))?;
    u8::from_str_radix(hex, 16).ok()
}
