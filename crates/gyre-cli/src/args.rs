//! Command-line argument definitions for the Gyre CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the ring to generate, where the output
//! goes, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Gyre diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram name, also used as the output file stem
    #[arg(help = "Name of the diagram")]
    pub name: Option<String>,

    /// Number of ring slots, one of which stays vacant
    #[arg(short, long, required_unless_present = "preset")]
    pub vertices: Option<usize>,

    /// Rotation step, coprime with the vertex count
    #[arg(short = 'k', long, required_unless_present = "preset")]
    pub coprime: Option<usize>,

    /// Generate one of the canonical diagrams
    #[arg(long, value_enum, conflicts_with_all = ["vertices", "coprime"])]
    pub preset: Option<Preset>,

    /// Directory the diagram is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Wrap the SVG in an HTML document
    #[arg(long)]
    pub html: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// The canonical ring diagrams.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Five slots rotating by two
    Pentagon,
    /// Four slots rotating by one
    Square,
    /// Three slots rotating by one
    Triangle,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Self::Pentagon => "pentagon",
            Self::Square => "square",
            Self::Triangle => "triangle",
        }
    }

    /// Returns `(vertices, coprime)`.
    pub fn ring(self) -> (usize, usize) {
        match self {
            Self::Pentagon => (5, 2),
            Self::Square => (4, 1),
            Self::Triangle => (3, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_ring() {
        let args = Args::try_parse_from(["gyre", "star", "-v", "7", "-k", "3", "--html"]).unwrap();
        assert_eq!(args.name.as_deref(), Some("star"));
        assert_eq!(args.vertices, Some(7));
        assert_eq!(args.coprime, Some(3));
        assert!(args.html);
        assert_eq!(args.output_dir, ".");
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_parse_preset() {
        let args = Args::try_parse_from(["gyre", "--preset", "pentagon"]).unwrap();
        assert_eq!(args.preset, Some(Preset::Pentagon));
        assert_eq!(args.vertices, None);
    }

    #[test]
    fn test_ring_is_required_without_preset() {
        assert!(Args::try_parse_from(["gyre", "star", "-v", "7"]).is_err());
        assert!(Args::try_parse_from(["gyre", "--preset", "square", "-v", "7"]).is_err());
    }

    #[test]
    fn test_preset_rings() {
        assert_eq!(Preset::Pentagon.ring(), (5, 2));
        assert_eq!(Preset::Square.ring(), (4, 1));
        assert_eq!(Preset::Triangle.ring(), (3, 1));
        assert_eq!(Preset::Triangle.name(), "triangle");
    }
}
