//! Validation of generated icons.
//!
//! Decodes assets back with standard decoders and checks them against
//! the palette. Used by `dotgen validate`, both on freshly generated
//! assets and on a committed document.

mod checks;
mod diagnostic;

pub use checks::{check_asset, check_palette, check_unique_names, Expectation};
pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use std::collections::HashMap;

use crate::emit::{declaration_name, parse_document};
use crate::generate::GeneratorOptions;
use crate::output::Printer;
use crate::render::EncodedAsset;
use crate::types::{AssetFormat, Colour, Palette};

/// Validate freshly generated assets.
pub fn validate_assets(
    assets: &[EncodedAsset],
    palette: &Palette,
    options: &GeneratorOptions,
) -> ValidationResult {
    let mut result = check_palette(palette);
    let disambiguate = options.formats().len() > 1;

    let names: Vec<String> = assets
        .iter()
        .map(|a| declaration_name(&a.state, a.format, disambiguate))
        .collect();
    result.merge(check_unique_names(names.iter().map(String::as_str)));

    for (asset, name) in assets.iter().zip(&names) {
        match palette.get(&asset.state) {
            Some(colour) => {
                let expected = expectation(colour, options);
                result.merge(check_asset(name, asset.format, &asset.bytes, &expected));
            }
            None => result.push(Diagnostic::error(
                "dotgen::validate::unknown-state",
                name.as_str(),
                format!("State {} is not in the palette", asset.state),
            )),
        }
    }

    result
}

/// Validate a committed document against the palette and a fresh rendition.
///
/// Every declaration the palette and options call for must be present and
/// decodable, nothing else may be declared, and the text must match `fresh`.
pub fn validate_document(
    text: &str,
    fresh: &str,
    palette: &Palette,
    options: &GeneratorOptions,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    let arrays = match parse_document(text) {
        Ok(arrays) => arrays,
        Err(e) => {
            result.push(Diagnostic::error(
                "dotgen::validate::parse",
                "document",
                e.to_string(),
            ));
            return result;
        }
    };

    result.merge(check_unique_names(arrays.iter().map(|(n, _)| n.as_str())));

    let formats = options.formats();
    let disambiguate = formats.len() > 1;
    let mut wanted: HashMap<String, (AssetFormat, Colour)> = HashMap::new();
    for format in &formats {
        for state in palette.iter() {
            wanted.insert(
                declaration_name(&state.name, *format, disambiguate),
                (*format, state.colour),
            );
        }
    }

    for (name, bytes) in &arrays {
        match wanted.remove(name) {
            Some((format, colour)) => {
                result.merge(check_asset(name, format, bytes, &expectation(colour, options)));
            }
            None => result.push(
                Diagnostic::error(
                    "dotgen::validate::unexpected",
                    name.as_str(),
                    "Declaration does not match any palette state and format",
                )
                .with_help("Check the --format selection matches the committed file"),
            ),
        }
    }

    let mut missing: Vec<String> = wanted.into_keys().collect();
    missing.sort();
    for name in missing {
        result.push(Diagnostic::error(
            "dotgen::validate::missing",
            name,
            "Declaration is missing from the document",
        ));
    }

    if text != fresh {
        result.push(
            Diagnostic::error(
                "dotgen::validate::stale",
                "document",
                "Document differs from freshly generated output",
            )
            .with_help("Run `dotgen generate` with the same options to regenerate it"),
        );
    }

    result
}

fn expectation(colour: Colour, options: &GeneratorOptions) -> Expectation {
    Expectation {
        colour,
        size: options.size,
        small_size: options.small_size,
    }
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let is_error = d.severity == Severity::Error;
        eprintln!(
            "  {}[{}]: {}: {}",
            printer.severity(&d.severity.to_string(), is_error),
            d.code,
            printer.bold(&d.subject),
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}
