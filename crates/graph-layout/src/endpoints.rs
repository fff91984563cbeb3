use crate::{Graph, LayoutError};
use tracing::debug;

/// Indices of the single entry and single exit node of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// The only node without incoming edges
    pub entry: usize,
    /// The only node without outgoing edges
    pub exit: usize,
}

/// Locate the unique entry and exit nodes
///
/// A lone node without edges is both the entry and the exit.
///
/// # Errors
/// Returns [`LayoutError::NoUniqueEntry`] unless exactly one adjacency column
/// is empty, and [`LayoutError::NoUniqueExit`] unless exactly one row is.
pub fn find_endpoints(graph: &Graph) -> Result<Endpoints, LayoutError> {
    let entries: Vec<usize> = (0..graph.len())
        .filter(|&index| graph.predecessors(index).next().is_none())
        .collect();
    let [entry] = entries[..] else {
        return Err(LayoutError::NoUniqueEntry {
            found: entries.len(),
        });
    };

    let exits: Vec<usize> = (0..graph.len())
        .filter(|&index| graph.successors(index).next().is_none())
        .collect();
    let [exit] = exits[..] else {
        return Err(LayoutError::NoUniqueExit { found: exits.len() });
    };

    debug!(
        "Entry is node {}, exit is node {}",
        graph.id(entry),
        graph.id(exit)
    );

    Ok(Endpoints { entry, exit })
}
