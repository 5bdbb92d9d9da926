//! The [`MarkupNode`] tree type and its builder API.

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use super::{ElementKind, MarkupError};
use crate::{format_number, path, render::Renderer};

/// One element of a markup document.
///
/// Attributes are validated against the element kind's whitelist and kept in
/// insertion order; setting an existing attribute overwrites its value in
/// place. Children are owned exclusively by their parent.
///
/// Two flavours of mutation are provided:
/// - `with_*` methods consume the node and return it, for building trees in a
///   single expression.
/// - `set_*`/`add_*` methods mutate through `&mut self` and return
///   `&mut Self`, for extending a node that already lives inside a structure.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    kind: ElementKind,
    attributes: IndexMap<String, String>,
    children: Vec<MarkupNode>,
    text: Option<String>,
}

impl MarkupNode {
    /// Creates an empty element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn html() -> Self {
        Self::new(ElementKind::Html)
    }

    pub fn body() -> Self {
        Self::new(ElementKind::Body)
    }

    pub fn svg() -> Self {
        Self::new(ElementKind::Svg)
    }

    pub fn group() -> Self {
        Self::new(ElementKind::Group)
    }

    pub fn circle() -> Self {
        Self::new(ElementKind::Circle)
    }

    pub fn line() -> Self {
        Self::new(ElementKind::Line)
    }

    pub fn path() -> Self {
        Self::new(ElementKind::Path)
    }

    /// Creates a text element with the given literal content.
    ///
    /// The content is written verbatim on its own line when rendered.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::new(ElementKind::Text)
        }
    }

    pub fn animate() -> Self {
        Self::new(ElementKind::Animate)
    }

    pub fn animate_motion() -> Self {
        Self::new(ElementKind::AnimateMotion)
    }

    pub fn mpath() -> Self {
        Self::new(ElementKind::MPath)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns the tag name.
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Returns the value of an attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the child elements in insertion order.
    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    /// Returns the literal text content of a text element.
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Sets an attribute, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidAttribute`] if `key` is not on the
    /// whitelist of this element's kind.
    pub fn set_attribute(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self, MarkupError> {
        if !self.kind.allows(key) {
            debug!(attribute = key, element = self.kind.tag(); "Rejected attribute");
            return Err(MarkupError::InvalidAttribute {
                attribute: key.to_string(),
                kind: self.kind,
            });
        }
        self.attributes.insert(key.to_string(), value.into());
        Ok(self)
    }

    /// Appends a child element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnsupportedOperation`] if this element's kind
    /// cannot hold children.
    pub fn add_child(&mut self, child: MarkupNode) -> Result<&mut Self, MarkupError> {
        self.ensure_container()?;
        self.children.push(child);
        Ok(self)
    }

    /// Appends several child elements, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnsupportedOperation`] if this element's kind
    /// cannot hold children.
    pub fn add_children(
        &mut self,
        children: impl IntoIterator<Item = MarkupNode>,
    ) -> Result<&mut Self, MarkupError> {
        self.ensure_container()?;
        self.children.extend(children);
        Ok(self)
    }

    fn ensure_container(&self) -> Result<(), MarkupError> {
        if self.kind.accepts_children() {
            Ok(())
        } else {
            Err(MarkupError::UnsupportedOperation {
                operation: "child elements",
                kind: self.kind,
            })
        }
    }

    // =========================================================================
    // Builder-style API
    // =========================================================================

    /// Sets an attribute and returns the node (builder style).
    ///
    /// # Errors
    ///
    /// See [`MarkupNode::set_attribute`].
    pub fn with_attribute(
        mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<Self, MarkupError> {
        self.set_attribute(key, value)?;
        Ok(self)
    }

    /// Appends a child and returns the node (builder style).
    ///
    /// # Errors
    ///
    /// See [`MarkupNode::add_child`].
    pub fn with_child(mut self, child: MarkupNode) -> Result<Self, MarkupError> {
        self.add_child(child)?;
        Ok(self)
    }

    /// Appends children and returns the node (builder style).
    ///
    /// # Errors
    ///
    /// See [`MarkupNode::add_children`].
    pub fn with_children(
        mut self,
        children: impl IntoIterator<Item = MarkupNode>,
    ) -> Result<Self, MarkupError> {
        self.add_children(children)?;
        Ok(self)
    }

    fn with_number(self, key: &str, value: f64) -> Result<Self, MarkupError> {
        self.with_attribute(key, format_number(value))
    }

    /// Sets `id`.
    pub fn with_id(self, id: impl Into<String>) -> Result<Self, MarkupError> {
        self.with_attribute("id", id)
    }

    /// Sets `width` and `height`.
    pub fn with_size(self, width: f64, height: f64) -> Result<Self, MarkupError> {
        self.with_number("width", width)?
            .with_number("height", height)
    }

    /// Sets the circle center (`cx`, `cy`).
    pub fn with_center(self, cx: f64, cy: f64) -> Result<Self, MarkupError> {
        self.with_number("cx", cx)?.with_number("cy", cy)
    }

    /// Sets the circle radius (`r`).
    pub fn with_radius(self, r: f64) -> Result<Self, MarkupError> {
        self.with_number("r", r)
    }

    /// Sets the line start point (`x1`, `y1`).
    pub fn with_start(self, x: f64, y: f64) -> Result<Self, MarkupError> {
        self.with_number("x1", x)?.with_number("y1", y)
    }

    /// Sets the line end point (`x2`, `y2`).
    pub fn with_end(self, x: f64, y: f64) -> Result<Self, MarkupError> {
        self.with_number("x2", x)?.with_number("y2", y)
    }

    /// Sets the text anchor corner (`x`, `y`).
    pub fn with_corner(self, x: f64, y: f64) -> Result<Self, MarkupError> {
        self.with_number("x", x)?.with_number("y", y)
    }

    /// Sets the path data from a sequence of commands.
    ///
    /// A `path` element stores it in `d`; an `animateMotion` element stores it
    /// in `path`. Any other kind rejects the attribute.
    pub fn with_path_data(self, commands: &[path::PathCommand]) -> Result<Self, MarkupError> {
        let key = match self.kind {
            ElementKind::AnimateMotion => "path",
            _ => "d",
        };
        self.with_attribute(key, path::join(commands))
    }

    /// Points `xlink:href` at the element with the given id.
    pub fn with_link(self, id: &str) -> Result<Self, MarkupError> {
        self.with_attribute("xlink:href", format!("#{id}"))
    }

    /// Sets the animated value range (`from`, `to`).
    pub fn with_transition(self, from: f64, to: f64) -> Result<Self, MarkupError> {
        self.with_number("from", from)?.with_number("to", to)
    }
}

impl fmt::Display for MarkupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().render(self))
    }
}
