//! Configuration types for Gyre diagram generation.
//!
//! This module provides configuration structures that control the canvas,
//! animation timing, colors and output format of generated diagrams. All
//! types implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`CanvasConfig`] - Canvas extent and node sizing.
//! - [`AnimationConfig`] - Move duration and loop behaviour.
//! - [`StyleConfig`] - Node and edge colors.
//! - [`OutputConfig`] - HTML embedding and line width of the rendered text.
//!
//! Raw configuration is resolved once into a [`RingLayout`], the immutable
//! set of derived values a graph is built with.
//!
//! # Example
//!
//! ```
//! # use gyre::config::AppConfig;
//! let config = AppConfig::default();
//! let layout = config.ring_layout().unwrap();
//! assert_eq!(layout.stroke_width(), 2.5);
//! assert_eq!(layout.ring_radius(), 12.5);
//! ```

use serde::Deserialize;

use crate::{GyreError, color::Color};

const DEFAULT_NODE_FILL: &str = "red";
const DEFAULT_STROKE: &str = "black";

/// Top-level configuration combining every section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Animation configuration section.
    #[serde(default)]
    animation: AnimationConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        canvas: CanvasConfig,
        animation: AnimationConfig,
        style: StyleConfig,
        output: OutputConfig,
    ) -> Self {
        Self {
            canvas,
            animation,
            style,
            output,
        }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Replaces the output section (builder style).
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Replaces the animation section (builder style).
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Resolves this configuration into the values a graph is built with.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Config`] if a dimension or duration is not
    /// positive, or if a configured color cannot be parsed.
    pub fn ring_layout(&self) -> Result<RingLayout, GyreError> {
        let canvas = &self.canvas;
        if canvas.center <= 0.0 {
            return Err(GyreError::Config(format!(
                "canvas center must be positive, got {}",
                canvas.center
            )));
        }
        if canvas.node_radius < 0.0 || canvas.max_stroke_width < 0.0 {
            return Err(GyreError::Config(
                "node radius and stroke width must not be negative".to_string(),
            ));
        }
        if self.animation.seconds_per_move <= 0.0 {
            return Err(GyreError::Config(format!(
                "seconds per move must be positive, got {}",
                self.animation.seconds_per_move
            )));
        }

        Ok(RingLayout::derive(
            canvas,
            &self.animation,
            parse_color("node_fill", &self.style.node_fill)?,
            parse_color("node_stroke", &self.style.node_stroke)?,
            parse_color("edge_stroke", &self.style.edge_stroke)?,
        ))
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, GyreError> {
    Color::new(value).map_err(|err| GyreError::Config(format!("Invalid {field} in config: {err}")))
}

/// Canvas extent and node sizing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Distance in pixels from the center of the canvas to its edge.
    center: f64,

    /// Radius of each node circle.
    node_radius: f64,

    /// Upper bound on the stroke width of nodes and edges.
    max_stroke_width: f64,
}

impl CanvasConfig {
    pub fn new(center: f64, node_radius: f64, max_stroke_width: f64) -> Self {
        Self {
            center,
            node_radius,
            max_stroke_width,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            center: 20.0,
            node_radius: 5.0,
            max_stroke_width: 6.0,
        }
    }
}

/// Animation timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of a single move.
    seconds_per_move: f64,

    /// Restart the move chain when its last move ends.
    loop_forever: bool,
}

impl AnimationConfig {
    pub fn new(seconds_per_move: f64, loop_forever: bool) -> Self {
        Self {
            seconds_per_move,
            loop_forever,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            seconds_per_move: 0.5,
            loop_forever: false,
        }
    }
}

/// Node and edge colors, as CSS color strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    node_fill: String,
    node_stroke: String,
    edge_stroke: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            node_fill: DEFAULT_NODE_FILL.to_string(),
            node_stroke: DEFAULT_STROKE.to_string(),
            edge_stroke: DEFAULT_STROKE.to_string(),
        }
    }
}

/// Output format of rendered diagrams.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Wrap the SVG in a minimal HTML document.
    embed_in_html: bool,

    /// Soft limit for rendered line width.
    max_line_width: usize,
}

impl OutputConfig {
    pub fn new(embed_in_html: bool, max_line_width: usize) -> Self {
        Self {
            embed_in_html,
            max_line_width,
        }
    }

    pub fn embed_in_html(&self) -> bool {
        self.embed_in_html
    }

    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Returns the file extension matching the output format.
    pub fn extension(&self) -> &'static str {
        if self.embed_in_html { "html" } else { "svg" }
    }

    /// Sets whether the SVG is wrapped in HTML (builder style).
    pub fn with_embed_in_html(mut self, embed_in_html: bool) -> Self {
        self.embed_in_html = embed_in_html;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            embed_in_html: false,
            max_line_width: gyre_core::render::DEFAULT_MAX_LINE_WIDTH,
        }
    }
}

/// Immutable values a ring graph is built with.
///
/// Derived once from an [`AppConfig`] by [`AppConfig::ring_layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    center: f64,
    ring_radius: f64,
    node_radius: f64,
    stroke_width: f64,
    seconds_per_move: f64,
    loop_forever: bool,
    node_fill: Color,
    node_stroke: Color,
    edge_stroke: Color,
}

impl RingLayout {
    /// Canvas half-extent; the ring is centred on `(center, center)`.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Radius of the ring nodes are placed on.
    pub fn ring_radius(&self) -> f64 {
        self.ring_radius
    }

    pub fn node_radius(&self) -> f64 {
        self.node_radius
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn seconds_per_move(&self) -> f64 {
        self.seconds_per_move
    }

    pub fn loop_forever(&self) -> bool {
        self.loop_forever
    }

    pub fn node_fill(&self) -> &Color {
        &self.node_fill
    }

    pub fn node_stroke(&self) -> &Color {
        &self.node_stroke
    }

    pub fn edge_stroke(&self) -> &Color {
        &self.edge_stroke
    }

    /// Side length of the square canvas.
    pub fn canvas_size(&self) -> f64 {
        self.center * 2.0
    }
}

impl RingLayout {
    fn derive(
        canvas: &CanvasConfig,
        animation: &AnimationConfig,
        node_fill: Color,
        node_stroke: Color,
        edge_stroke: Color,
    ) -> Self {
        // Small nodes get a proportionally thin stroke, and the ring shrinks
        // so that nodes are never clipped by the canvas edge.
        let stroke_width = canvas.max_stroke_width.min(canvas.node_radius / 2.0);
        let ring_radius =
            (canvas.center * 2.0 / 3.0).min(canvas.center - canvas.node_radius - stroke_width);

        Self {
            center: canvas.center,
            ring_radius,
            node_radius: canvas.node_radius,
            stroke_width,
            seconds_per_move: animation.seconds_per_move,
            loop_forever: animation.loop_forever,
            node_fill,
            node_stroke,
            edge_stroke,
        }
    }
}

impl Default for RingLayout {
    fn default() -> Self {
        Self::derive(
            &CanvasConfig::default(),
            &AnimationConfig::default(),
            Color::named(DEFAULT_NODE_FILL),
            Color::named(DEFAULT_STROKE),
            Color::named(DEFAULT_STROKE),
        )
    }
}
