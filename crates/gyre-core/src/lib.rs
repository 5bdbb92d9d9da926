//! Gyre Core Types and Definitions
//!
//! This crate provides the markup layer that Gyre diagrams are assembled
//! from. It includes:
//!
//! - **Markup**: Typed element tree with attribute whitelisting ([`markup`] module)
//! - **Path**: SVG path-data command tokens ([`path`] module)
//! - **Render**: Deterministic, width-aware serializer ([`render::Renderer`])
//! - **Geometry**: Points and polar placement on a ring ([`geometry`] module)

pub mod geometry;
pub mod markup;
pub mod path;
pub mod render;

mod number;

pub use markup::{ElementKind, MarkupError, MarkupNode};
pub use number::format_number;
pub use render::Renderer;
