//! SVG path-data commands.
//!
//! Each function returns one [`PathCommand`] token. Uppercase commands use
//! absolute coordinates and lowercase commands are relative to the current
//! point, following the SVG path mini-language:
//!
//! | Function               | Token                    |
//! |------------------------|--------------------------|
//! | [`move_to`]            | `M x y`                  |
//! | [`line_to`]            | `L x y`                  |
//! | [`horizontal_to`]      | `H x`                    |
//! | [`vertical_to`]        | `V y`                    |
//! | [`cubic_to`]           | `C x1 y1, x2 y2, x y`    |
//! | [`smooth_cubic_to`]    | `S x2 y2, x y`           |
//! | [`quadratic_to`]       | `Q x1 y1, x y`           |
//! | [`smooth_quadratic_to`]| `T x y`                  |
//! | [`close`]              | `Z`                      |
//!
//! Tokens are joined with single spaces by [`join`].
//!
//! ```
//! # use gyre_core::path;
//! let d = path::join(&[path::move_to(100.0, 350.0), path::line_by(150.0, -300.0)]);
//! assert_eq!(d, "M 100 350 l 150 -300");
//! ```

use std::fmt;

use crate::format_number;

/// One path-data instruction, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathCommand(String);

impl PathCommand {
    /// Returns the formatted token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathCommand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Joins commands into a single path-data string separated by spaces.
pub fn join(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(PathCommand::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn pair(x: f64, y: f64) -> String {
    format!("{} {}", format_number(x), format_number(y))
}

fn command(letter: char, args: &str) -> PathCommand {
    PathCommand(format!("{letter} {args}"))
}

// =============================================================================
// Move and line commands
// =============================================================================

pub fn move_to(x: f64, y: f64) -> PathCommand {
    command('M', &pair(x, y))
}

pub fn move_by(dx: f64, dy: f64) -> PathCommand {
    command('m', &pair(dx, dy))
}

pub fn line_to(x: f64, y: f64) -> PathCommand {
    command('L', &pair(x, y))
}

pub fn line_by(dx: f64, dy: f64) -> PathCommand {
    command('l', &pair(dx, dy))
}

pub fn horizontal_to(x: f64) -> PathCommand {
    command('H', &format_number(x))
}

pub fn horizontal_by(dx: f64) -> PathCommand {
    command('h', &format_number(dx))
}

pub fn vertical_to(y: f64) -> PathCommand {
    command('V', &format_number(y))
}

pub fn vertical_by(dy: f64) -> PathCommand {
    command('v', &format_number(dy))
}

// =============================================================================
// Curve commands
// =============================================================================

/// Cubic Bézier with both control points.
pub fn cubic_to(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> PathCommand {
    command(
        'C',
        &format!("{}, {}, {}", pair(x1, y1), pair(x2, y2), pair(x, y)),
    )
}

pub fn cubic_by(dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx: f64, dy: f64) -> PathCommand {
    command(
        'c',
        &format!("{}, {}, {}", pair(dx1, dy1), pair(dx2, dy2), pair(dx, dy)),
    )
}

/// Cubic Bézier whose first control point mirrors the previous curve's.
pub fn smooth_cubic_to(x2: f64, y2: f64, x: f64, y: f64) -> PathCommand {
    command('S', &format!("{}, {}", pair(x2, y2), pair(x, y)))
}

pub fn smooth_cubic_by(dx2: f64, dy2: f64, dx: f64, dy: f64) -> PathCommand {
    command('s', &format!("{}, {}", pair(dx2, dy2), pair(dx, dy)))
}

pub fn quadratic_to(x1: f64, y1: f64, x: f64, y: f64) -> PathCommand {
    command('Q', &format!("{}, {}", pair(x1, y1), pair(x, y)))
}

pub fn quadratic_by(dx1: f64, dy1: f64, dx: f64, dy: f64) -> PathCommand {
    command('q', &format!("{}, {}", pair(dx1, dy1), pair(dx, dy)))
}

/// Quadratic Bézier whose control point mirrors the previous curve's.
pub fn smooth_quadratic_to(x: f64, y: f64) -> PathCommand {
    command('T', &pair(x, y))
}

pub fn smooth_quadratic_by(dx: f64, dy: f64) -> PathCommand {
    command('t', &pair(dx, dy))
}

pub fn close() -> PathCommand {
    PathCommand("Z".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_and_line_tokens() {
        assert_eq!(move_to(100.0, 350.0).as_str(), "M 100 350");
        assert_eq!(move_by(-20.0, 10.0).as_str(), "m -20 10");
        assert_eq!(line_to(1.5, 2.0).as_str(), "L 1.5 2");
        assert_eq!(line_by(150.0, -300.0).as_str(), "l 150 -300");
    }

    #[test]
    fn test_axis_aligned_tokens() {
        assert_eq!(horizontal_to(10.0).to_string(), "H 10");
        assert_eq!(horizontal_by(-4.0).to_string(), "h -4");
        assert_eq!(vertical_to(0.25).to_string(), "V 0.25");
        assert_eq!(vertical_by(3.0).to_string(), "v 3");
    }

    #[test]
    fn test_curve_tokens() {
        assert_eq!(
            cubic_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).as_str(),
            "C 1 2, 3 4, 5 6"
        );
        assert_eq!(
            cubic_by(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).as_str(),
            "c 1 2, 3 4, 5 6"
        );
        assert_eq!(smooth_cubic_to(1.0, 2.0, 3.0, 4.0).as_str(), "S 1 2, 3 4");
        assert_eq!(smooth_cubic_by(1.0, 2.0, 3.0, 4.0).as_str(), "s 1 2, 3 4");
        assert_eq!(
            quadratic_to(160.0, 185.0, 200.0, 180.0).as_str(),
            "Q 160 185, 200 180"
        );
        assert_eq!(
            quadratic_by(150.0, -300.0, 300.0, 0.0).as_str(),
            "q 150 -300, 300 0"
        );
        assert_eq!(smooth_quadratic_to(255.0, 195.0).as_str(), "T 255 195");
        assert_eq!(smooth_quadratic_by(5.0, 19.0).as_str(), "t 5 19");
    }

    #[test]
    fn test_close() {
        assert_eq!(close().as_str(), "Z");
    }

    #[test]
    fn test_join() {
        let d = join(&[
            move_to(-20.0, 10.0),
            line_by(40.0, -10.0),
            line_by(-20.0, -8.0),
            close(),
        ]);
        assert_eq!(d, "M -20 10 l 40 -10 l -20 -8 Z");
        assert_eq!(join(&[]), "");
    }
}
