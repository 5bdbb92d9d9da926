//! Deterministic text serializer for markup trees.
//!
//! The [`Renderer`] writes one element per line, indents children by two
//! spaces, and wraps long attribute lists so that continuation lines start
//! in the column of the element's first attribute:
//!
//! ```text
//! <circle id="n0" stroke="black" stroke-width="2.5" fill="red" cx="20" cy="6.667"
//!         r="5">
//! ```
//!
//! The line width is a soft target. A line is broken only when appending the
//! next attribute would reach the limit, so an attribute that is already on
//! a line stays there even if it alone exceeds the width.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::markup::{ElementKind, MarkupNode};

/// Preamble written before an HTML document root.
const DOCTYPE: &str = "<!DOCTYPE html>\n\n";

/// Indentation added for each level of nesting.
const INDENT: &str = "  ";

/// Default soft line-width limit.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 80;

/// Serializes [`MarkupNode`] trees to text.
///
/// Rendering is a pure function of the tree and the configured line width:
/// the same tree always produces the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    max_line_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
        }
    }
}

impl Renderer {
    /// Creates a renderer with the given soft line-width limit.
    pub fn new(max_line_width: usize) -> Self {
        Self { max_line_width }
    }

    /// Returns the configured soft line-width limit.
    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Renders a tree starting at column zero.
    ///
    /// An [`ElementKind::Html`] root is preceded by the HTML doctype.
    pub fn render(&self, node: &MarkupNode) -> String {
        let mut out = String::new();
        if node.kind() == ElementKind::Html {
            out.push_str(DOCTYPE);
        }
        self.write_node(&mut out, node, "");
        out
    }

    /// Renders a tree with every line prefixed by `prefix`.
    ///
    /// No doctype is written, whatever the element kind.
    pub fn render_at(&self, node: &MarkupNode, prefix: &str) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node, prefix);
        out
    }

    fn write_node(&self, out: &mut String, node: &MarkupNode, prefix: &str) {
        let closing_cap = if node.kind().is_self_closing() {
            "/>"
        } else {
            ">"
        };
        self.write_open_tag(out, node, prefix, closing_cap);

        if node.kind().is_self_closing() {
            return;
        }

        let child_prefix = format!("{prefix}{INDENT}");
        if let Some(text) = node.text_content() {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{child_prefix}{text}");
        }
        for child in node.children() {
            self.write_node(out, child, &child_prefix);
        }
        let _ = writeln!(out, "{prefix}</{}>", node.tag());
    }

    /// Writes `<tag attr="..." ...>` followed by a newline, wrapping the
    /// attribute list as needed.
    fn write_open_tag(&self, out: &mut String, node: &MarkupNode, prefix: &str, closing_cap: &str) {
        let mut line = format!("{prefix}<{}", node.tag());
        let continuation_indent = " ".repeat(line.width());

        let attributes: Vec<String> = node
            .attributes()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect();

        for (idx, attribute) in attributes.iter().enumerate() {
            line.push(' ');
            line.push_str(attribute);

            let Some(next) = attributes.get(idx + 1) else {
                break;
            };
            if line.width() + next.width() >= self.max_line_width {
                out.push_str(&line);
                out.push('\n');
                line.clone_from(&continuation_indent);
            }
        }

        out.push_str(&line);
        out.push_str(closing_cap);
        out.push('\n');
    }
}
