//! Geometric primitives for ring layouts.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`PolarPosition`] - A placement on a ring, as radius and turn fraction
//! - [`polar_to_cartesian`] - The projection from ring placement to canvas
//!
//! # Coordinate System
//!
//! Canvas coordinates follow SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Polar fractions are measured in turns, starting straight up from the
//! center and increasing clockwise: `0.0` is up, `0.25` is right, `0.5` is
//! down and `0.75` is left.

use std::f64::consts::TAU;

/// A 2D point in canvas coordinates.
///
/// # Examples
///
/// ```
/// # use gyre_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A placement on a ring around the canvas center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPosition {
    radius: f64,
    fraction: f64,
}

impl PolarPosition {
    /// Creates a placement at `radius` pixels from the center and `fraction`
    /// of a clockwise turn from straight up.
    pub fn new(radius: f64, fraction: f64) -> Self {
        Self { radius, fraction }
    }

    pub fn radius(self) -> f64 {
        self.radius
    }

    pub fn fraction(self) -> f64 {
        self.fraction
    }
}

/// Projects a ring placement onto the canvas.
///
/// `center` is the canvas half-extent, so the ring is centred on
/// `(center, center)`. The angular origin is rotated a quarter turn
/// counter-clockwise so that fraction `0` lands directly above the center.
///
/// # Examples
///
/// ```
/// # use gyre_core::geometry::{PolarPosition, polar_to_cartesian};
/// let top = polar_to_cartesian(20.0, PolarPosition::new(10.0, 0.0));
/// assert!((top.x() - 20.0).abs() < 1e-9);
/// assert!((top.y() - 10.0).abs() < 1e-9);
/// ```
pub fn polar_to_cartesian(center: f64, position: PolarPosition) -> Point {
    let angle = TAU * (position.fraction - 0.25);
    Point::new(
        center + position.radius * angle.cos(),
        center + position.radius * angle.sin(),
    )
}
