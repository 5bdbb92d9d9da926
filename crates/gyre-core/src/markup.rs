//! Typed markup tree.
//!
//! A document is a tree of [`MarkupNode`]s. Each node has an [`ElementKind`]
//! that fixes its tag, whether it may hold children, and the whitelist of
//! attribute names it accepts. Attributes keep their insertion order so that
//! rendering is deterministic.
//!
//! # Example
//!
//! ```
//! # use gyre_core::{MarkupNode, path};
//! # fn main() -> Result<(), gyre_core::MarkupError> {
//! let svg = MarkupNode::svg()
//!     .with_size(100.0, 100.0)?
//!     .with_child(
//!         MarkupNode::path()
//!             .with_id("diagonal")?
//!             .with_attribute("stroke", "red")?
//!             .with_path_data(&[path::move_to(0.0, 0.0), path::line_to(100.0, 100.0)])?,
//!     )?;
//!
//! assert!(svg.to_string().contains(r#"d="M 0 0 L 100 100""#));
//! # Ok(())
//! # }
//! ```

mod element;
mod error;
mod node;

pub use element::ElementKind;
pub use error::MarkupError;
pub use node::MarkupNode;
