//! Export of rendered diagrams.
//!
//! This module provides the [`Sink`] trait, the final stage of the Gyre
//! pipeline. The library never opens files or prints; it hands rendered text
//! and a destination name to a sink, which decides what persisting means.
//!
//! # Pipeline Position
//!
//! ```text
//! Ring parameters
//!     ↓ sequence
//! Graph (nodes, edges, moves)
//!     ↓ markup
//! Markup tree
//!     ↓ render
//! Text
//!     ↓ export (this module)
//! Sink
//! ```
//!
//! [`MemorySink`] keeps every output in memory. File output lives in the
//! command-line crate.

use crate::GyreError;

/// Receiver of rendered diagrams.
pub trait Sink {
    /// Accepts the rendered text of a diagram.
    ///
    /// # Arguments
    ///
    /// * `rendered` - The serialized markup.
    /// * `destination` - The output name, such as `triangle.svg`.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Io`] or [`GyreError::Export`] if the output
    /// cannot be stored.
    fn write(&mut self, rendered: &str, destination: &str) -> Result<(), GyreError>;
}

/// A sink that collects outputs in the order they were written.
#[derive(Debug, Default)]
pub struct MemorySink {
    outputs: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(destination, rendered)` pairs in write order.
    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    /// Returns the most recent output written to `destination`.
    pub fn get(&self, destination: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(name, _)| name == destination)
            .map(|(_, rendered)| rendered.as_str())
    }
}

impl Sink for MemorySink {
    fn write(&mut self, rendered: &str, destination: &str) -> Result<(), GyreError> {
        self.outputs
            .push((destination.to_string(), rendered.to_string()));
        Ok(())
    }
}
