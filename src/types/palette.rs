//! Palette of named tray states.

use std::collections::HashSet;

use crate::error::{DotgenError, Result};

use super::Colour;

/// A named state and its display colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateColour {
    /// State name, used verbatim as an identifier suffix.
    pub name: String,

    /// Fill colour for the state's icon.
    pub colour: Colour,
}

impl StateColour {
    pub fn new(name: impl Into<String>, colour: Colour) -> Self {
        Self {
            name: name.into(),
            colour,
        }
    }
}

/// An ordered collection of state colours.
///
/// Order is significant: generated declarations follow it.
#[derive(Debug, Clone)]
pub struct Palette {
    states: Vec<StateColour>,
}

impl Palette {
    /// Create a palette, checking that names are unique identifier suffixes.
    pub fn new(states: Vec<StateColour>) -> Result<Self> {
        if states.is_empty() {
            return Err(DotgenError::Validation {
                message: "Palette has no states".to_string(),
                help: None,
            });
        }

        let mut seen = HashSet::new();
        for state in &states {
            if !is_identifier(&state.name) {
                return Err(DotgenError::Validation {
                    message: format!("Invalid state name: {:?}", state.name),
                    help: Some(
                        "State names start with a letter and contain only letters, digits or '_'"
                            .to_string(),
                    ),
                });
            }
            if !seen.insert(state.name.as_str()) {
                return Err(DotgenError::Validation {
                    message: format!("Duplicate state name: {}", state.name),
                    help: None,
                });
            }
        }

        Ok(Self { states })
    }

    /// The builtin tray states.
    pub fn tray_states() -> Self {
        Self {
            states: vec![
                StateColour::new("Idle", Colour::rgb(128, 128, 128)),
                StateColour::new("Watching", Colour::rgb(0, 120, 215)),
                StateColour::new("Preparing", Colour::rgb(255, 185, 0)),
                StateColour::new("Running", Colour::rgb(16, 124, 16)),
                StateColour::new("Paused", Colour::rgb(255, 140, 0)),
                StateColour::new("Error", Colour::rgb(232, 17, 35)),
            ],
        }
    }

    /// Look up a state's colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.states
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.colour)
    }

    /// Iterate over states in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &StateColour> {
        self.states.iter()
    }

    /// Get the number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tray_states()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
