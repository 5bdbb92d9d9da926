//! The closed catalog of element kinds and their attribute whitelists.

use std::fmt;

// =============================================================================
// Attribute whitelists
// =============================================================================

const NO_ATTRIBUTES: &[&str] = &[];

const SVG_ATTRIBUTES: &[&str] = &["width", "height", "viewBox", "xmlns", "xmlns:xlink"];

const GROUP_ATTRIBUTES: &[&str] = &[
    "font-size",
    "font-family",
    "fill",
    "stroke",
    "text-anchor",
    "stroke-width",
];

const CIRCLE_ATTRIBUTES: &[&str] = &["id", "cx", "cy", "r", "stroke", "stroke-width", "fill"];

const LINE_ATTRIBUTES: &[&str] = &["x1", "x2", "y1", "y2", "stroke", "stroke-width", "id"];

const PATH_ATTRIBUTES: &[&str] = &["id", "stroke", "stroke-width", "d", "fill", "visibility"];

const TEXT_ATTRIBUTES: &[&str] = &["x", "y", "dx"];

const ANIMATE_ATTRIBUTES: &[&str] = &[
    "attributeName",
    "attributeType",
    "begin",
    "dur",
    "from",
    "to",
    "fill",
    "id",
    "repeatCount",
];

const ANIMATE_MOTION_ATTRIBUTES: &[&str] = &["id", "path", "begin", "dur", "fill", "repeatCount"];

const MPATH_ATTRIBUTES: &[&str] = &["xlink:href"];

// =============================================================================
// Element kinds
// =============================================================================

/// Every element the builder knows how to produce.
///
/// The kind decides the tag name, whether the element can hold children, and
/// which attribute names it accepts. Validation is a lookup in that table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Document root. Rendering it emits the HTML doctype first.
    Html,
    Body,
    Svg,
    /// `<g>` grouping element.
    Group,
    Circle,
    Line,
    Path,
    /// Text element carrying literal content.
    Text,
    /// `<animate>`: animates a single attribute of its parent.
    Animate,
    /// `<animateMotion>`: moves its parent along a path.
    AnimateMotion,
    /// `<mpath>`: links an `animateMotion` to a path defined elsewhere.
    MPath,
}

impl ElementKind {
    /// Returns the tag name written to the output.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Body => "body",
            Self::Svg => "svg",
            Self::Group => "g",
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Path => "path",
            Self::Text => "text",
            Self::Animate => "animate",
            Self::AnimateMotion => "animateMotion",
            Self::MPath => "mpath",
        }
    }

    /// Returns the attribute names this kind accepts.
    pub fn allowed_attributes(self) -> &'static [&'static str] {
        match self {
            Self::Html | Self::Body => NO_ATTRIBUTES,
            Self::Svg => SVG_ATTRIBUTES,
            Self::Group => GROUP_ATTRIBUTES,
            Self::Circle => CIRCLE_ATTRIBUTES,
            Self::Line => LINE_ATTRIBUTES,
            Self::Path => PATH_ATTRIBUTES,
            Self::Text => TEXT_ATTRIBUTES,
            Self::Animate => ANIMATE_ATTRIBUTES,
            Self::AnimateMotion => ANIMATE_MOTION_ATTRIBUTES,
            Self::MPath => MPATH_ATTRIBUTES,
        }
    }

    /// Returns `true` if `name` is on this kind's whitelist.
    pub fn allows(self, name: &str) -> bool {
        self.allowed_attributes().contains(&name)
    }

    /// Returns `true` if elements of this kind may own child elements.
    ///
    /// Leaf kinds render as self-closing tags, except [`ElementKind::Text`]
    /// which always renders an explicit closing tag around its content.
    pub fn accepts_children(self) -> bool {
        !matches!(self, Self::Path | Self::Text | Self::Animate | Self::MPath)
    }

    /// Returns `true` if an element of this kind renders as `<tag .../>`.
    pub fn is_self_closing(self) -> bool {
        !self.accepts_children() && self != Self::Text
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
