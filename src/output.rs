//! Terminal output formatting for the dotgen CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! All status output goes to stderr; stdout is reserved for the generated
//! document and other machine-readable output.

use std::io::{self, IsTerminal, Write};

use crate::render::EncodedAsset;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled when stderr is a terminal. A quiet printer drops
/// status, info and warning lines but still reports errors.
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// A printer that never emits ANSI codes.
    pub fn plain() -> Self {
        Self {
            color: false,
            quiet: false,
        }
    }

    /// Suppress everything but errors.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a status line with a green bold verb.
    /// e.g. "    Rendered Idle (ICO, 1150 bytes)"
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Print a status line for one encoded asset.
    pub fn asset(&self, asset: &EncodedAsset) {
        self.status("Rendered", &describe_asset(asset));
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(CYAN, verb, message);
        }
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(YELLOW, verb, message);
        }
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a diagnostic severity label with colour.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Short description of an asset: "Idle (ICO, 1150 bytes)".
pub fn describe_asset(asset: &EncodedAsset) -> String {
    format!(
        "{} ({}, {})",
        asset.state,
        asset.format,
        plural(asset.bytes.len(), "byte", "bytes")
    )
}

/// Pluralize a count: `plural(1, "asset", "assets")` → "1 asset".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetFormat;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "asset", "assets"), "1 asset");
        assert_eq!(plural(0, "asset", "assets"), "0 assets");
        assert_eq!(plural(12, "asset", "assets"), "12 assets");
    }

    #[test]
    fn test_plain_printer_has_no_escapes() {
        let printer = Printer::plain();
        assert_eq!(printer.bold("DataIdle"), "DataIdle");
        assert_eq!(printer.dim("help:"), "help:");
        assert_eq!(printer.severity("error", true), "error");
    }

    #[test]
    fn test_describe_asset() {
        let asset = EncodedAsset::new("Idle", AssetFormat::Ico, vec![0; 1150]);
        assert_eq!(describe_asset(&asset), "Idle (ICO, 1150 bytes)");

        let asset = EncodedAsset::new("Error", AssetFormat::Png, vec![0]);
        assert_eq!(describe_asset(&asset), "Error (PNG, 1 byte)");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = std::path::Path::new("/nonexistent/icons/icon_data.go");
        assert_eq!(display_path(p), "/nonexistent/icons/icon_data.go");
    }
}
