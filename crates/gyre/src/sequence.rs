//! Rotation sequencing for displacing ring graphs.
//!
//! A ring of `vertices` slots holds `vertices - 1` nodes, leaving one slot
//! vacant. Each move shifts one node backwards by `coprime` slots into the
//! vacancy, which opens a new vacancy `coprime` slots further on. Because the
//! step is coprime with the slot count, the vacancy visits every slot before
//! returning to where it started.

use log::{debug, info};
use thiserror::Error;

use crate::{
    GyreError,
    config::AppConfig,
    graph::{Graph, Node, NodeIndex},
};

/// Invalid ring parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("a ring needs at least 2 vertices, got {vertices}")]
    TooFewVertices { vertices: usize },

    #[error("step {coprime} must be at least 1 and less than {vertices}")]
    StepOutOfRange { vertices: usize, coprime: usize },

    #[error("step {coprime} is not coprime with {vertices} vertices (both divisible by {divisor})")]
    NotCoprime {
        vertices: usize,
        coprime: usize,
        divisor: usize,
    },
}

/// Checks that `coprime` is a usable rotation step for a ring of `vertices`.
///
/// # Errors
///
/// Returns a [`SequenceError`] describing the first violated requirement.
pub fn validate(vertices: usize, coprime: usize) -> Result<(), SequenceError> {
    if vertices < 2 {
        return Err(SequenceError::TooFewVertices { vertices });
    }
    if coprime == 0 || coprime >= vertices {
        return Err(SequenceError::StepOutOfRange { vertices, coprime });
    }
    match gcd(vertices, coprime) {
        1 => Ok(()),
        divisor => Err(SequenceError::NotCoprime {
            vertices,
            coprime,
            divisor,
        }),
    }
}

/// Greatest common divisor.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns the slots whose occupants move during one pass, in order.
///
/// Starts at `coprime - 1` and advances by `coprime` until reaching the
/// initially vacant slot `vertices - 1`, which is not included.
///
/// # Errors
///
/// Returns a [`SequenceError`] if the parameters are invalid.
pub fn generate_move_sequence(vertices: usize, coprime: usize) -> Result<Vec<usize>, SequenceError> {
    validate(vertices, coprime)?;

    let mut sequence = Vec::with_capacity(vertices - 1);
    let mut idx = coprime - 1;
    while idx != vertices - 1 {
        sequence.push(idx);
        idx = (idx + coprime) % vertices;
    }
    Ok(sequence)
}

/// Returns how many passes bring every node back to its starting slot.
///
/// # Errors
///
/// Returns a [`SequenceError`] if the parameters are invalid.
pub fn num_move_repetitions(vertices: usize, coprime: usize) -> Result<usize, SequenceError> {
    validate(vertices, coprime)?;

    let mut repetitions = 1;
    let mut idx = coprime;
    while idx != 0 {
        repetitions += 1;
        idx = (idx + coprime) % vertices;
    }
    Ok(repetitions)
}

/// Moves a node `coprime` slots backwards around the ring.
///
/// The node's current slot is recovered from its latest position. The new
/// move is chained after `after` and its name is returned.
///
/// # Errors
///
/// Returns [`GyreError::Graph`] if the node does not exist, or a
/// precondition error for invalid ring parameters.
pub fn add_move(
    graph: &mut Graph,
    vertices: usize,
    coprime: usize,
    node: NodeIndex,
    after: Option<String>,
) -> Result<String, GyreError> {
    validate(vertices, coprime)?;

    let ring_radius = graph.layout().ring_radius();
    let node = graph
        .node_mut(node)
        .ok_or_else(|| GyreError::Graph(format!("no node with index {}", node.index())))?;

    let current = node.current_position().fraction() * vertices as f64;
    let current = (current.round() as usize) % vertices;
    let next = (current + vertices - coprime) % vertices;
    let name = node.add_position(ring_radius, next as f64 / vertices as f64, after);
    debug!(node = node.name(), from = current, to = next; "Added move");
    Ok(name)
}

/// Builds the animated ring graph for `vertices` slots and step `coprime`.
///
/// Node `n<i>` starts in slot `i`, and consecutive nodes are joined into a
/// ring. All moves form a single chain: each begins when the previous one
/// ends. With `loop_forever` enabled, the first move restarts when the last
/// one ends.
///
/// # Errors
///
/// Returns a precondition error for invalid ring parameters, or a
/// configuration error if `config` cannot be resolved.
pub fn generate_displacing_ring_graph(
    name: &str,
    vertices: usize,
    coprime: usize,
    config: &AppConfig,
) -> Result<Graph, GyreError> {
    let sequence = generate_move_sequence(vertices, coprime)?;
    let repetitions = num_move_repetitions(vertices, coprime)?;
    info!(name, vertices, coprime, repetitions; "Generating ring graph");

    let layout = config.ring_layout()?;
    let ring_radius = layout.ring_radius();
    let loop_forever = layout.loop_forever();
    let mut graph = Graph::new(name, layout, *config.output());

    let occupied = vertices - 1;
    let nodes: Vec<NodeIndex> = (0..occupied)
        .map(|i| {
            let position = gyre_core::geometry::PolarPosition::new(
                ring_radius,
                i as f64 / vertices as f64,
            );
            graph.add_node(Node::new(format!("n{i}"), position))
        })
        .collect();
    for i in 0..occupied {
        graph.add_edge(nodes[i], nodes[(i + 1) % occupied])?;
    }

    // Sequence entries index nodes by their starting slot.
    let mut previous: Option<String> = None;
    let mut first: Option<NodeIndex> = None;
    for _ in 0..repetitions {
        for &slot in &sequence {
            let node = nodes[slot];
            first.get_or_insert(node);
            previous = Some(add_move(&mut graph, vertices, coprime, node, previous)?);
        }
    }

    if loop_forever {
        if let (Some(first), Some(last)) = (first, previous) {
            graph
                .node_mut(first)
                .ok_or_else(|| GyreError::Graph(format!("no node with index {}", first.index())))?
                .set_restart_trigger(last)?;
        }
    }

    debug!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len();
        "Ring graph generated"
    );
    Ok(graph)
}
