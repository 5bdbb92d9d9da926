//! Gyre - Animated displacing ring-graph diagrams.
//!
//! A ring of `N` slots holds `N - 1` nodes joined into a cycle. Nodes rotate
//! one at a time into the vacant slot, and the whole rotation is emitted as a
//! self-contained animated SVG (optionally wrapped in HTML).

pub mod color;
pub mod config;
pub mod export;
pub mod graph;
pub mod sequence;

mod error;

pub use gyre_core::{geometry, markup, path, render};

pub use error::GyreError;

use log::info;

use config::AppConfig;
use export::Sink;
use graph::Graph;

/// Builder for generating and rendering ring-graph diagrams.
///
/// # Examples
///
/// ```rust
/// use gyre::{DiagramBuilder, config::AppConfig, export::MemorySink};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Generate the graph model
/// let graph = builder.generate("triangle", 3, 1)
///     .expect("Failed to generate");
/// assert_eq!(graph.nodes().len(), 2);
///
/// // Render straight into a sink
/// let mut sink = MemorySink::new();
/// builder.render_to("pentagon", 5, 2, &mut sink)
///     .expect("Failed to render");
/// assert!(sink.get("pentagon.svg").is_some());
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Canvas, animation, style and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generate the ring graph for `vertices` slots rotating by `coprime`.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Precondition`] when `coprime` is not a valid
    /// rotation step for `vertices`, or [`GyreError::Config`] when the
    /// configuration cannot be resolved.
    pub fn generate(&self, name: &str, vertices: usize, coprime: usize) -> Result<Graph, GyreError> {
        sequence::generate_displacing_ring_graph(name, vertices, coprime, &self.config)
    }

    /// Render a ring graph to text.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::generate`], plus markup errors.
    pub fn render(&self, name: &str, vertices: usize, coprime: usize) -> Result<String, GyreError> {
        let graph = self.generate(name, vertices, coprime)?;
        let rendered = graph.render_to_string()?;
        info!(name, bytes = rendered.len(); "Diagram rendered");
        Ok(rendered)
    }

    /// Render a ring graph and hand it to `sink`.
    ///
    /// The destination is `<name>.svg`, or `<name>.html` when the output is
    /// embedded in HTML.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::render`], plus whatever the sink reports.
    pub fn render_to(
        &self,
        name: &str,
        vertices: usize,
        coprime: usize,
        sink: &mut dyn Sink,
    ) -> Result<(), GyreError> {
        let graph = self.generate(name, vertices, coprime)?;
        graph.render(sink)?;
        info!(destination = graph.destination().as_str(); "Diagram exported");
        Ok(())
    }
}
