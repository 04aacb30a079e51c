//! Validate command implementation.
//!
//! Regenerates every icon, decodes it back and checks it against the
//! palette. Given a committed document, also checks that it parses,
//! decodes and is up to date.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{DotgenError, Result};
use crate::generate::generate_assets;
use crate::output::{display_path, plural, Printer};
use crate::types::Palette;
use crate::validation::{print_diagnostics, validate_assets, validate_document};

use super::GeneratorArgs;

/// Decode generated icons and check them against the palette
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Committed document to check (default: the config's output, if set)
    pub file: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let config = args.generator.resolve()?;
    let palette = Palette::tray_states();
    let options = config.generator_options();
    let emitter = config.emitter()?;

    printer.status("Checking", &plural(palette.len(), "state", "states"));
    let assets = generate_assets(&palette, &options)?;
    let mut result = validate_assets(&assets, &palette, &options);

    if let Some(path) = args.file.or(config.output) {
        printer.status("Checking", &display_path(&path));
        let text = fs::read_to_string(&path).map_err(|e| DotgenError::Io {
            path: path.clone(),
            message: format!("Failed to read document: {}", e),
        })?;
        let fresh = emitter.emit(&assets);
        result.merge(validate_document(&text, &fresh, &palette, &options));
    }

    print_diagnostics(&result, printer);

    let errors = result.error_count();
    let warnings = result.warning_count();
    if errors > 0 {
        printer.error("Failed", &plural(errors, "error", "errors"));
        return Err(DotgenError::Validation {
            message: format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning("Finished", &plural(warnings, "warning", "warnings"));
    } else {
        printer.status("Finished", &format!("{} valid", plural(assets.len(), "asset", "assets")));
    }

    Ok(())
}
