//! Color handling for Gyre diagrams
//!
//! This module provides the [`Color`] type which validates CSS color strings
//! with the `DynamicColor` type from the color crate. Only the spelling the
//! user wrote is kept, and it reaches the output unchanged.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A validated CSS color.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Color {
    source: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use gyre::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert_eq!(blue.to_string(), "blue");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let source = color_str.trim();
        match DynamicColor::from_str(source) {
            Ok(_) => Ok(Self {
                source: source.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Wraps a CSS named color that is known to parse.
    pub(crate) fn named(name: &'static str) -> Self {
        Self {
            source: name.to_string(),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::named("black")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
