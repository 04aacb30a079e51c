//! Syntax of the languages a document can be emitted in.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::AssetFormat;

/// Target language of the generated source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// A Rust module of `pub static` byte slices
    #[default]
    Rust,
    /// A Go package of `[]byte` variables
    Go,
}

impl Language {
    /// One level of indentation for data lines.
    pub fn indent(self) -> &'static str {
        match self {
            Language::Rust => "    ",
            Language::Go => "\t",
        }
    }

    /// Header lines, ending with the module or package declaration.
    pub fn preamble(self, package: &str) -> Vec<String> {
        match self {
            Language::Rust => vec![
                "//! Tray status icons, one coloured circle per state.".to_string(),
                "//!".to_string(),
                "//! Code generated by dotgen. DO NOT EDIT.".to_string(),
                "#![allow(non_upper_case_globals)]".to_string(),
            ],
            Language::Go => vec![
                "// Code generated by dotgen. DO NOT EDIT.".to_string(),
                String::new(),
                format!("// Package {package} holds the tray status icons, one coloured circle per state."),
                format!("package {package}"),
            ],
        }
    }

    /// Comment line placed directly above an asset declaration.
    pub fn asset_comment(self, name: &str, state: &str, format: AssetFormat) -> String {
        match self {
            Language::Rust => format!("/// {format} icon for the {state} state."),
            Language::Go => format!("// {name} is the {format} icon for the {state} state."),
        }
    }

    /// Opening line of an asset declaration.
    pub fn open_declaration(self, name: &str) -> String {
        match self {
            Language::Rust => format!("pub static {name}: &[u8] = &["),
            Language::Go => format!("var {name} = []byte{{"),
        }
    }

    /// Closing line of an asset declaration.
    pub fn close_declaration(self) -> &'static str {
        match self {
            Language::Rust => "];",
            Language::Go => "}",
        }
    }

    /// Recover the declared name from an opening line.
    pub fn parse_declaration(self, line: &str) -> Option<&str> {
        let line = line.trim();
        let name = match self {
            Language::Rust => line
                .strip_prefix("pub static ")?
                .strip_suffix(": &[u8] = &[")?,
            Language::Go => line.strip_prefix("var ")?.strip_suffix(" = []byte{")?,
        };
        Some(name.trim())
    }

    /// Name of the state lookup function for a format.
    pub fn lookup_name(self, format: AssetFormat, disambiguate: bool) -> String {
        match (self, disambiguate) {
            (Language::Rust, false) => "icon_for_state".to_string(),
            (Language::Rust, true) => {
                format!("icon_for_state_{}", format.label().to_ascii_lowercase())
            }
            (Language::Go, false) => "IconForState".to_string(),
            (Language::Go, true) => format!("IconForState{}", format.label()),
        }
    }

    /// A function mapping state names to their declarations.
    ///
    /// `arms` pairs each state name with its declaration name.
    pub fn lookup_function(
        self,
        function: &str,
        format: AssetFormat,
        arms: &[(&str, &str)],
    ) -> Vec<String> {
        let indent = self.indent();
        let mut lines = Vec::new();
        match self {
            Language::Rust => {
                lines.push(format!(
                    "/// Returns the {format} icon for `state`, or `None` if the state is unknown."
                ));
                lines.push(format!(
                    "pub fn {function}(state: &str) -> Option<&'static [u8]> {{"
                ));
                lines.push(format!("{indent}match state {{"));
                for (state, name) in arms {
                    lines.push(format!("{indent}{indent}{state:?} => Some({name}),"));
                }
                lines.push(format!("{indent}{indent}_ => None,"));
                lines.push(format!("{indent}}}"));
                lines.push("}".to_string());
            }
            Language::Go => {
                lines.push(format!(
                    "// {function} returns the {format} icon for state, or nil if the state is unknown."
                ));
                lines.push(format!("func {function}(state string) []byte {{"));
                lines.push(format!("{indent}switch state {{"));
                for (state, name) in arms {
                    lines.push(format!("{indent}case {state:?}:"));
                    lines.push(format!("{indent}{indent}return {name}"));
                }
                lines.push(format!("{indent}}}"));
                lines.push(format!("{indent}return nil"));
                lines.push("}".to_string());
            }
        }
        lines
    }
}

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Whether `name` can appear in a Go `package` clause.
///
/// Accepts ASCII identifiers that are neither a keyword nor the blank
/// identifier.
pub fn is_go_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    first_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_"
        && !GO_KEYWORDS.contains(&name)
}
