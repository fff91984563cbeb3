use crate::{Graph, LayoutError, NodeId};
use petgraph::algo::toposort;
use petgraph::visit::Dfs;
use std::collections::BTreeSet;
use tracing::trace;

/// Mark every node reachable from `entry`
pub(crate) fn reachable_from(graph: &Graph, entry: usize) -> Vec<bool> {
    let digraph = graph.to_digraph();
    let mut reachable = vec![false; graph.len()];

    let mut dfs = Dfs::new(&digraph, entry);
    while let Some(index) = dfs.next(&digraph) {
        reachable[index] = true;
    }

    reachable
}

/// Ids of the nodes not marked in `reachable`, ascending
pub(crate) fn unreachable_ids(graph: &Graph, reachable: &[bool]) -> Vec<NodeId> {
    reachable
        .iter()
        .enumerate()
        .filter(|&(_, &seen)| !seen)
        .map(|(index, _)| graph.id(index))
        .collect()
}

/// Make sure the reachable part of the graph has no cycle
///
/// Slicing only terminates on acyclic input, so this has to run first.
pub(crate) fn ensure_acyclic(graph: &Graph, reachable: &[bool]) -> Result<(), LayoutError> {
    let mut digraph = graph.to_digraph();
    for (index, _) in reachable.iter().enumerate().filter(|&(_, &seen)| !seen) {
        digraph.remove_node(index);
    }

    toposort(&digraph, None).map_err(|cycle| LayoutError::CyclicGraph {
        id: graph.id(cycle.node_id()),
    })?;

    Ok(())
}

/// Slice the graph breadth first from `entry`
///
/// Each slice holds the successors of the previous one. A node reached over
/// paths of different lengths shows up in several slices at this point, see
/// [`resolve_conflicts`].
pub(crate) fn build_slices(graph: &Graph, entry: usize) -> Vec<BTreeSet<usize>> {
    let mut slices = vec![BTreeSet::from([entry])];

    loop {
        let next: BTreeSet<usize> = slices
            .last()
            .into_iter()
            .flatten()
            .flat_map(|&index| graph.successors(index))
            .collect();

        if next.is_empty() {
            break;
        }

        trace!("Slice {} has {} raw members", slices.len(), next.len());
        slices.push(next);
    }

    slices
}

/// Keep every node only in the deepest slice it was placed in
///
/// Walks back from the last slice, removing its members from every earlier
/// slice except the first one.
pub(crate) fn resolve_conflicts(slices: &mut [BTreeSet<usize>]) {
    for k in (1..slices.len()).rev() {
        let (earlier, rest) = slices.split_at_mut(k);
        let current = &rest[0];
        for slice in earlier.iter_mut().skip(1) {
            slice.retain(|index| !current.contains(index));
        }
    }
}
