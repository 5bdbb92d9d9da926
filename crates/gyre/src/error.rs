//! Error types for Gyre operations.
//!
//! This module provides the main error type [`GyreError`] which wraps the
//! error conditions that can occur while generating and rendering diagrams.

use std::io;

use thiserror::Error;

use gyre_core::MarkupError;

use crate::sequence::SequenceError;

/// The main error type for Gyre operations.
///
/// Every variant describes a contract violation reported at the call that
/// caused it. Nothing is retried, and no output is produced once an error
/// has been returned.
#[derive(Debug, Error)]
pub enum GyreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("Precondition violated: {0}")]
    Precondition(#[from] SequenceError),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}
