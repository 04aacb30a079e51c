//! Palette command implementation.

use clap::Args;
use serde_json::json;

use crate::error::{DotgenError, Result};
use crate::output::{plural, Printer};
use crate::types::Palette;

/// Print the state palette
#[derive(Args, Debug, Default)]
pub struct PaletteArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = Palette::tray_states();
    printer.info("Palette", &plural(palette.len(), "state", "states"));
    println!("{}", render(&palette, args.json)?);
    Ok(())
}

/// Render the palette as text lines or a JSON array.
fn render(palette: &Palette, as_json: bool) -> Result<String> {
    if as_json {
        let states: Vec<_> = palette
            .iter()
            .map(|s| {
                json!({
                    "name": s.name,
                    "colour": s.colour.to_string(),
                    "rgba": s.colour.to_rgba(),
                })
            })
            .collect();
        return serde_json::to_string_pretty(&states).map_err(|e| DotgenError::Validation {
            message: format!("Failed to serialise palette: {}", e),
            help: None,
        });
    }

    let width = palette.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let lines: Vec<String> = palette
        .iter()
        .map(|s| format!("{:width$}  {}", s.name, s.colour, width = width))
        .collect();
    Ok(lines.join("\n"))
}
