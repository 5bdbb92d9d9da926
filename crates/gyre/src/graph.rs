//! Ring-graph model.
//!
//! A [`Graph`] owns its [`Node`]s and [`Edge`]s. Nodes record every position
//! they visit along with the [`Move`] that takes them there; edges connect two
//! nodes and follow them as they move.
//!
//! Each node, edge, and the graph itself build their markup lazily on first
//! access and cache it. Any mutation through the graph discards the affected
//! caches so that markup always reflects the current model.
//!
//! # Animation model
//!
//! A move becomes a pair of `<animate>` elements on the node's circle
//! (`cx`, `cy`), plus a pair on every incident edge's line (`x1`/`y1` or
//! `x2`/`y2` depending on which end the node is). All animations of a move
//! share the same `begin` trigger, so the edge stays attached to its node.

use log::{debug, trace};
use once_cell::unsync::OnceCell;

use gyre_core::{
    MarkupNode, Renderer, format_number,
    geometry::{Point, PolarPosition, polar_to_cartesian},
};

use crate::{
    GyreError,
    config::{OutputConfig, RingLayout},
    export::Sink,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

// =============================================================================
// Indices
// =============================================================================

/// Position of a node in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Position of an edge in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which end of an edge a node sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeEnd {
    /// The first endpoint, drawn with `x1`/`y1`.
    Start,
    /// The second endpoint, drawn with `x2`/`y2`.
    End,
}

impl EdgeEnd {
    /// Returns the line attribute names for this end.
    fn attributes(self) -> (&'static str, &'static str) {
        match self {
            Self::Start => ("x1", "y1"),
            Self::End => ("x2", "y2"),
        }
    }
}

// =============================================================================
// Moves
// =============================================================================

/// One timed transition of a node between two consecutive positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    name: String,
    after: Option<String>,
    restart_after: Option<String>,
}

impl Move {
    /// Returns the move's name, which is also the id of its animation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the move this one is chained after, if any.
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    /// Returns the move whose end restarts this one, if any.
    pub fn restart_after(&self) -> Option<&str> {
        self.restart_after.as_deref()
    }

    /// Returns the SMIL `begin` value for this move.
    ///
    /// A move with no predecessor starts at document load. A restart
    /// trigger additionally starts it again whenever that move ends.
    pub fn begin(&self) -> String {
        match (&self.after, &self.restart_after) {
            (Some(after), _) => format!("{after}.end"),
            (None, Some(restart)) => format!("0s;{restart}.end"),
            (None, None) => "0s".to_string(),
        }
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// A node of the ring graph and its position history.
#[derive(Debug)]
pub struct Node {
    name: String,
    positions: Vec<PolarPosition>,
    moves: Vec<Move>,
    edges: Vec<(EdgeIndex, EdgeEnd)>,
    markup: OnceCell<MarkupNode>,
}

impl Node {
    /// Creates a node at its initial placement.
    pub fn new(name: impl Into<String>, position: PolarPosition) -> Self {
        Self {
            name: name.into(),
            positions: vec![position],
            moves: Vec::new(),
            edges: Vec::new(),
            markup: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns every position visited, starting with the initial placement.
    pub fn positions(&self) -> &[PolarPosition] {
        &self.positions
    }

    /// Returns the most recent position.
    pub fn current_position(&self) -> PolarPosition {
        // `positions` always holds the initial placement.
        self.positions[self.positions.len() - 1]
    }

    /// Returns the moves; move `i` goes from `positions[i]` to `positions[i + 1]`.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the edges registered on this node, in registration order.
    pub fn edges(&self) -> &[(EdgeIndex, EdgeEnd)] {
        &self.edges
    }

    /// Appends a position and the move that reaches it.
    ///
    /// The move is named `<node>_move_<n>`, where `n` is the number of
    /// positions before this one, and begins when `after` ends (or at load
    /// when `after` is `None`). Returns the new move's name so that the next
    /// move can be chained to it.
    pub fn add_position(&mut self, radius: f64, fraction: f64, after: Option<String>) -> String {
        let name = format!("{}_move_{}", self.name, self.positions.len());
        self.positions.push(PolarPosition::new(radius, fraction));
        self.moves.push(Move {
            name: name.clone(),
            after,
            restart_after: None,
        });
        self.markup.take();
        name
    }

    /// Makes the first move start again whenever the move `restart_after` ends.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Graph`] if the node has no moves.
    pub fn set_restart_trigger(&mut self, restart_after: String) -> Result<(), GyreError> {
        let first = self.moves.first_mut().ok_or_else(|| {
            GyreError::Graph(format!("node `{}` has no move to restart", self.name))
        })?;
        first.restart_after = Some(restart_after);
        self.markup.take();
        Ok(())
    }

    /// Returns the canvas endpoints of move `idx`.
    fn segment(&self, idx: usize, center: f64) -> (Point, Point) {
        (
            polar_to_cartesian(center, self.positions[idx]),
            polar_to_cartesian(center, self.positions[idx + 1]),
        )
    }

    fn initial_point(&self, center: f64) -> Point {
        polar_to_cartesian(center, self.positions[0])
    }

    /// Returns the node's circle with one `cx`/`cy` animation pair per move.
    fn markup(&self, layout: &RingLayout) -> Result<&MarkupNode, GyreError> {
        self.markup.get_or_try_init(|| -> Result<MarkupNode, GyreError> {
            let start = self.initial_point(layout.center());
            let mut circle = MarkupNode::circle()
                .with_id(self.name.as_str())?
                .with_attribute("stroke", layout.node_stroke().to_string())?
                .with_attribute("stroke-width", format_number(layout.stroke_width()))?
                .with_attribute("fill", layout.node_fill().to_string())?
                .with_center(start.x(), start.y())?
                .with_radius(layout.node_radius())?;

            for (idx, mv) in self.moves.iter().enumerate() {
                let (from, to) = self.segment(idx, layout.center());
                let begin = mv.begin();
                // The `cx` animation carries the move's name so that other
                // moves can chain on its end.
                circle.add_child(
                    animation(layout, &begin)?
                        .with_id(mv.name.as_str())?
                        .with_attribute("attributeName", "cx")?
                        .with_transition(from.x(), to.x())?,
                )?;
                circle.add_child(
                    animation(layout, &begin)?
                        .with_attribute("attributeName", "cy")?
                        .with_transition(from.y(), to.y())?,
                )?;
            }
            Ok(circle)
        })
    }
}

/// Returns an `<animate>` element with the timing shared by every animation
/// of a move.
fn animation(layout: &RingLayout, begin: &str) -> Result<MarkupNode, GyreError> {
    Ok(MarkupNode::animate()
        .with_attribute("dur", format!("{}s", format_number(layout.seconds_per_move())))?
        .with_attribute("begin", begin)?
        .with_attribute("fill", "freeze")?
        .with_attribute("attributeType", "XML")?)
}

// =============================================================================
// Edges
// =============================================================================

/// A line between two nodes.
#[derive(Debug)]
pub struct Edge {
    start: NodeIndex,
    end: NodeIndex,
    markup: OnceCell<MarkupNode>,
}

impl Edge {
    /// Returns the node at the `x1`/`y1` end.
    pub fn start(&self) -> NodeIndex {
        self.start
    }

    /// Returns the node at the `x2`/`y2` end.
    pub fn end(&self) -> NodeIndex {
        self.end
    }

    /// Returns the ends of this edge that `node` occupies.
    fn ends_of(&self, node: NodeIndex) -> impl Iterator<Item = EdgeEnd> {
        [
            (self.start == node).then_some(EdgeEnd::Start),
            (self.end == node).then_some(EdgeEnd::End),
        ]
        .into_iter()
        .flatten()
    }

    /// Returns the edge's line, animated to follow both endpoints.
    ///
    /// Endpoint animations are grouped by node in graph order, then by move.
    fn markup(&self, nodes: &[Node], layout: &RingLayout) -> Result<&MarkupNode, GyreError> {
        self.markup.get_or_try_init(|| -> Result<MarkupNode, GyreError> {
            let center = layout.center();
            let from = nodes[self.start.0].initial_point(center);
            let to = nodes[self.end.0].initial_point(center);
            let mut line = MarkupNode::line()
                .with_attribute("stroke", layout.edge_stroke().to_string())?
                .with_attribute("stroke-width", format_number(layout.stroke_width()))?
                .with_start(from.x(), from.y())?
                .with_end(to.x(), to.y())?;

            let mut endpoints = [self.start, self.end];
            endpoints.sort();
            let endpoints = if self.start == self.end {
                &endpoints[..1]
            } else {
                &endpoints[..]
            };

            for &endpoint in endpoints {
                let node = &nodes[endpoint.0];
                for (idx, mv) in node.moves.iter().enumerate() {
                    let (move_from, move_to) = node.segment(idx, center);
                    let begin = mv.begin();
                    for end in self.ends_of(endpoint) {
                        let (x_name, y_name) = end.attributes();
                        line.add_child(
                            animation(layout, &begin)?
                                .with_attribute("attributeName", x_name)?
                                .with_transition(move_from.x(), move_to.x())?,
                        )?;
                        line.add_child(
                            animation(layout, &begin)?
                                .with_attribute("attributeName", y_name)?
                                .with_transition(move_from.y(), move_to.y())?,
                        )?;
                    }
                }
            }
            Ok(line)
        })
    }

    fn invalidate(&mut self) {
        self.markup.take();
    }
}

// =============================================================================
// Graph
// =============================================================================

/// A named ring graph, ready to be rendered.
#[derive(Debug)]
pub struct Graph {
    name: String,
    layout: RingLayout,
    output: OutputConfig,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    markup: OnceCell<MarkupNode>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(name: impl Into<String>, layout: RingLayout, output: OutputConfig) -> Self {
        Self {
            name: name.into(),
            layout,
            output,
            nodes: Vec::new(),
            edges: Vec::new(),
            markup: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.0)
    }

    /// Returns a node for mutation, discarding cached markup that depends on it.
    pub fn node_mut(&mut self, idx: NodeIndex) -> Option<&mut Node> {
        self.invalidate();
        self.nodes.get_mut(idx.0)
    }

    /// Returns the destination name the rendered graph is written to.
    pub fn destination(&self) -> String {
        format!("{}.{}", self.name, self.output.extension())
    }

    /// Adds a node and returns its index.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        self.markup.take();
        self.nodes.push(node);
        NodeIndex(self.nodes.len() - 1)
    }

    /// Connects two nodes.
    ///
    /// The edge registers itself on both endpoints: `start` as
    /// [`EdgeEnd::Start`] and `end` as [`EdgeEnd::End`].
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Graph`] if either node is not in this graph.
    pub fn add_edge(&mut self, start: NodeIndex, end: NodeIndex) -> Result<EdgeIndex, GyreError> {
        for idx in [start, end] {
            if idx.0 >= self.nodes.len() {
                return Err(GyreError::Graph(format!(
                    "node index {} is out of range for graph `{}` with {} nodes",
                    idx.0,
                    self.name,
                    self.nodes.len()
                )));
            }
        }

        let edge_idx = EdgeIndex(self.edges.len());
        self.edges.push(Edge {
            start,
            end,
            markup: OnceCell::new(),
        });
        self.nodes[start.0].edges.push((edge_idx, EdgeEnd::Start));
        self.nodes[end.0].edges.push((edge_idx, EdgeEnd::End));
        for node in [start, end] {
            self.nodes[node.0].markup.take();
        }
        self.markup.take();
        Ok(edge_idx)
    }

    /// Returns the markup of a single node.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Graph`] for an unknown index, or a markup error
    /// if the element cannot be built.
    pub fn node_markup(&self, idx: NodeIndex) -> Result<&MarkupNode, GyreError> {
        self.node(idx)
            .ok_or_else(|| GyreError::Graph(format!("no node with index {}", idx.0)))?
            .markup(&self.layout)
    }

    /// Returns the markup of a single edge.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Graph`] for an unknown index, or a markup error
    /// if the element cannot be built.
    pub fn edge_markup(&self, idx: EdgeIndex) -> Result<&MarkupNode, GyreError> {
        self.edges
            .get(idx.0)
            .ok_or_else(|| GyreError::Graph(format!("no edge with index {}", idx.0)))?
            .markup(&self.nodes, &self.layout)
    }

    /// Returns the markup of the whole diagram.
    ///
    /// Edges are drawn first so that nodes sit on top of them. The result is
    /// an `<svg>` element, or an `<html>` document wrapping it when the
    /// output is configured to embed in HTML.
    ///
    /// # Errors
    ///
    /// Returns a markup error if any element cannot be built.
    pub fn markup(&self) -> Result<&MarkupNode, GyreError> {
        self.markup.get_or_try_init(|| -> Result<MarkupNode, GyreError> {
            let mut group = MarkupNode::group();
            for edge in &self.edges {
                group.add_child(edge.markup(&self.nodes, &self.layout)?.clone())?;
            }
            for node in &self.nodes {
                group.add_child(node.markup(&self.layout)?.clone())?;
            }

            let size = self.layout.canvas_size();
            let svg = MarkupNode::svg().with_size(size, size)?;
            let root = if self.output.embed_in_html() {
                MarkupNode::html().with_child(MarkupNode::body().with_child(svg.with_child(group)?)?)?
            } else {
                svg.with_attribute("xmlns", SVG_NAMESPACE)?
                    .with_attribute("xmlns:xlink", XLINK_NAMESPACE)?
                    .with_child(group)?
            };

            debug!(
                graph = self.name,
                nodes = self.nodes.len(),
                edges = self.edges.len();
                "Built graph markup"
            );
            Ok(root)
        })
    }

    /// Serializes the diagram to text.
    ///
    /// # Errors
    ///
    /// Returns a markup error if any element cannot be built.
    pub fn render_to_string(&self) -> Result<String, GyreError> {
        let renderer = Renderer::new(self.output.max_line_width());
        Ok(renderer.render(self.markup()?))
    }

    /// Serializes the diagram and hands it to `sink` under
    /// `<name>.svg` or `<name>.html`.
    ///
    /// # Errors
    ///
    /// Returns a markup error if the diagram cannot be built, or whatever
    /// error the sink reports.
    pub fn render(&self, sink: &mut dyn Sink) -> Result<(), GyreError> {
        let rendered = self.render_to_string()?;
        let destination = self.destination();
        trace!(destination = destination.as_str(); "Rendered graph:\n{rendered}");
        sink.write(&rendered, &destination)
    }

    fn invalidate(&mut self) {
        self.markup.take();
        for node in &mut self.nodes {
            node.markup.take();
        }
        for edge in &mut self.edges {
            edge.invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn graph() -> Graph {
        Graph::new("test", RingLayout::default(), OutputConfig::default())
    }

    #[test]
    fn test_add_position_names_and_chains_moves() {
        let mut node = Node::new("n0", PolarPosition::new(12.5, 0.0));
        let first = node.add_position(12.5, 0.5, None);
        let second = node.add_position(12.5, 0.25, Some(first.clone()));

        assert_eq!(first, "n0_move_1");
        assert_eq!(second, "n0_move_2");
        assert_eq!(node.positions().len(), 3);
        assert_eq!(node.moves().len(), node.positions().len() - 1);
        assert_eq!(node.moves()[0].after(), None);
        assert_eq!(node.moves()[1].after(), Some("n0_move_1"));
        assert_eq!(node.current_position(), PolarPosition::new(12.5, 0.25));
    }

    #[test]
    fn test_move_begin() {
        let mut node = Node::new("n1", PolarPosition::new(1.0, 0.0));
        node.add_position(1.0, 0.5, None);
        node.add_position(1.0, 0.0, Some("n0_move_3".to_string()));

        assert_eq!(node.moves()[0].begin(), "0s");
        assert_eq!(node.moves()[1].begin(), "n0_move_3.end");

        node.set_restart_trigger("n2_move_9".to_string()).unwrap();
        assert_eq!(node.moves()[0].begin(), "0s;n2_move_9.end");
    }

    #[test]
    fn test_restart_trigger_requires_a_move() {
        let mut node = Node::new("lonely", PolarPosition::new(1.0, 0.0));
        assert!(matches!(
            node.set_restart_trigger("x".to_string()),
            Err(GyreError::Graph(_))
        ));
    }

    #[test]
    fn test_add_edge_registers_both_ends() {
        let mut graph = graph();
        let a = graph.add_node(Node::new("a", PolarPosition::new(10.0, 0.0)));
        let b = graph.add_node(Node::new("b", PolarPosition::new(10.0, 0.5)));
        let edge = graph.add_edge(a, b).unwrap();

        assert_eq!(graph.node(a).unwrap().edges(), &[(edge, EdgeEnd::Start)]);
        assert_eq!(graph.node(b).unwrap().edges(), &[(edge, EdgeEnd::End)]);
        assert_eq!(graph.edges()[0].start(), a);
        assert_eq!(graph.edges()[0].end(), b);
    }

    #[test]
    fn test_add_edge_rejects_unknown_node() {
        let mut graph = graph();
        let a = graph.add_node(Node::new("a", PolarPosition::new(10.0, 0.0)));
        let result = graph.add_edge(a, NodeIndex::new(7));
        assert!(matches!(result, Err(GyreError::Graph(_))));
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_node_markup() {
        let mut graph = graph();
        let idx = graph.add_node(Node::new("n0", PolarPosition::new(12.5, 0.0)));
        graph
            .node_mut(idx)
            .unwrap()
            .add_position(12.5, 0.5, None);

        let circle = graph.node_markup(idx).unwrap();
        let attrs: Vec<_> = circle.attributes().collect();
        assert_eq!(
            attrs,
            vec![
                ("id", "n0"),
                ("stroke", "black"),
                ("stroke-width", "2.5"),
                ("fill", "red"),
                ("cx", "20"),
                ("cy", "7.5"),
                ("r", "5"),
            ]
        );

        assert_eq!(circle.children().len(), 2);
        let cx: Vec<_> = circle.children()[0].attributes().collect();
        assert_eq!(
            cx,
            vec![
                ("dur", "0.5s"),
                ("begin", "0s"),
                ("fill", "freeze"),
                ("attributeType", "XML"),
                ("id", "n0_move_1"),
                ("attributeName", "cx"),
                ("from", "20"),
                ("to", "20"),
            ]
        );
        let cy = &circle.children()[1];
        assert_eq!(cy.attribute("id"), None);
        assert_eq!(cy.attribute("attributeName"), Some("cy"));
        assert_eq!(cy.attribute("from"), Some("7.5"));
        assert_eq!(cy.attribute("to"), Some("32.5"));
    }

    #[test]
    fn test_edge_follows_its_endpoints() {
        let mut graph = graph();
        let a = graph.add_node(Node::new("a", PolarPosition::new(12.5, 0.0)));
        let b = graph.add_node(Node::new("b", PolarPosition::new(12.5, 0.25)));
        // `b` is listed first as the start to check graph-order grouping.
        let edge = graph.add_edge(b, a).unwrap();

        let first = graph.node_mut(a).unwrap().add_position(12.5, 0.5, None);
        graph
            .node_mut(b)
            .unwrap()
            .add_position(12.5, 0.0, Some(first));

        let line = graph.edge_markup(edge).unwrap();
        assert_eq!(line.attribute("x1"), Some("32.5"));
        assert_eq!(line.attribute("y1"), Some("20"));
        assert_eq!(line.attribute("x2"), Some("20"));
        assert_eq!(line.attribute("y2"), Some("7.5"));

        let targets: Vec<_> = line
            .children()
            .iter()
            .map(|anim| {
                (
                    anim.attribute("attributeName").unwrap(),
                    anim.attribute("begin").unwrap(),
                )
            })
            .collect();
        assert_eq!(
            targets,
            vec![
                ("x2", "0s"),
                ("y2", "0s"),
                ("x1", "a_move_1.end"),
                ("y1", "a_move_1.end"),
            ]
        );
    }

    #[test]
    fn test_self_loop_animates_both_ends() {
        let mut graph = graph();
        let a = graph.add_node(Node::new("a", PolarPosition::new(12.5, 0.0)));
        let edge = graph.add_edge(a, a).unwrap();
        graph.node_mut(a).unwrap().add_position(12.5, 0.5, None);

        let names: Vec<_> = graph
            .edge_markup(edge)
            .unwrap()
            .children()
            .iter()
            .filter_map(|anim| anim.attribute("attributeName"))
            .collect();
        assert_eq!(names, vec!["x1", "y1", "x2", "y2"]);
    }

    #[test]
    fn test_markup_is_cached_until_mutation() {
        let mut graph = graph();
        let a = graph.add_node(Node::new("a", PolarPosition::new(12.5, 0.0)));

        let first = graph.markup().unwrap() as *const MarkupNode;
        let second = graph.markup().unwrap() as *const MarkupNode;
        assert_eq!(first, second);

        graph.node_mut(a).unwrap().add_position(12.5, 0.5, None);
        let circle = &graph.markup().unwrap().children()[0].children()[0];
        assert_eq!(circle.children().len(), 2);
    }

    #[test]
    fn test_standalone_svg_root() {
        let graph = graph();
        let svg = graph.markup().unwrap();
        let attrs: Vec<_> = svg.attributes().map(|(k, _)| k).collect();
        assert_eq!(attrs, vec!["width", "height", "xmlns", "xmlns:xlink"]);
        assert_eq!(svg.attribute("width"), Some("40"));
        assert_eq!(graph.destination(), "test.svg");
    }

    #[test]
    fn test_html_root() {
        let config = AppConfig::default();
        let graph = Graph::new(
            "page",
            config.ring_layout().unwrap(),
            config.output().with_embed_in_html(true),
        );
        let rendered = graph.render_to_string().unwrap();
        assert!(rendered.starts_with("<!DOCTYPE html>\n\n<html>\n  <body>\n"));
        assert!(rendered.contains("    <svg width=\"40\" height=\"40\">\n"));
        assert!(!rendered.contains("xmlns"));
        assert_eq!(graph.destination(), "page.html");
    }
}
