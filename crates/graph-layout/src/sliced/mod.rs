mod positions;
mod slices;

use crate::{find_endpoints, Extent, Graph, Layout, LayoutEngine, LayoutError};
use tracing::debug;

use positions::assign_coordinates;
use slices::{build_slices, ensure_acyclic, reachable_from, resolve_conflicts, unreachable_ids};

/// Configuration for the sliced layered layout
#[derive(Debug, Clone, Default)]
pub struct SlicedLayout {
    /// Drop nodes that can't be reached from the entry instead of failing.
    /// Dropped nodes keep an unset position.
    pub allow_unreachable: bool,
}

impl SlicedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unreachable nodes are dropped or rejected
    pub fn allow_unreachable(mut self, allow: bool) -> Self {
        self.allow_unreachable = allow;
        self
    }
}

/// Resolved slices, ready for coordinate assignment
///
/// Every slice lists node indices in ascending order, and no index appears
/// in more than one slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slices {
    /// Node indices, slice by slice
    pub nodes: Vec<Vec<usize>>,

    /// Index of the entry node, alone in the first slice
    pub entry: usize,

    /// Index of the exit node, in the last slice
    pub exit: usize,
}

impl Slices {
    /// Number of slices
    pub fn width(&self) -> usize {
        self.nodes.len()
    }

    /// Size of the largest slice
    pub fn height(&self) -> usize {
        self.nodes.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }

    /// Slice the node at `index` ended up in
    pub fn slice_of(&self, index: usize) -> Option<usize> {
        self.nodes
            .iter()
            .position(|slice| slice.binary_search(&index).is_ok())
    }
}

impl SlicedLayout {
    /// Locate the endpoints and compute the resolved slices
    ///
    /// This only depends on the graph structure and can be cached.
    ///
    /// # Errors
    /// Returns an error if the graph has no unique entry or exit, if some
    /// nodes are unreachable (unless allowed), or if a cycle is reachable from
    /// the entry.
    pub fn compute_slices(&self, graph: &Graph) -> Result<Slices, LayoutError> {
        let endpoints = find_endpoints(graph)?;

        let reachable = reachable_from(graph, endpoints.entry);
        let unreachable = unreachable_ids(graph, &reachable);
        if !unreachable.is_empty() {
            if !self.allow_unreachable {
                return Err(LayoutError::UnreachableNodes(unreachable));
            }
            debug!("Dropping unreachable nodes {unreachable:?}");
        }

        ensure_acyclic(graph, &reachable)?;

        let mut slices = build_slices(graph, endpoints.entry);
        resolve_conflicts(&mut slices);

        let slices = Slices {
            nodes: slices
                .into_iter()
                .map(|slice| slice.into_iter().collect())
                .collect(),
            entry: endpoints.entry,
            exit: endpoints.exit,
        };
        debug!(
            "Sliced {} nodes into {} slices",
            graph.len(),
            slices.width()
        );

        Ok(slices)
    }

    /// Compute positions from resolved slices
    ///
    /// # Errors
    /// Returns [`LayoutError::ForeignSlices`] or
    /// [`LayoutError::DuplicateSliceMember`] if the slices weren't computed
    /// for this graph, and [`LayoutError::InconsistentEndpoints`] if they
    /// don't start on the entry and end on the exit.
    pub fn compute_positions(&self, graph: &Graph, slices: &Slices) -> Result<Layout, LayoutError> {
        assign_coordinates(graph, slices)
    }
}

impl LayoutEngine for SlicedLayout {
    fn layout(&self, graph: &Graph) -> Result<Layout, LayoutError> {
        let slices = self.compute_slices(graph)?;
        self.compute_positions(graph, &slices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::graph;
    use crate::{NodeId, Position};
    use test_log::test;

    #[test]
    fn chain() {
        let graph = graph(&[1, 2, 3], &[(1, 2), (2, 3)]).unwrap();

        let layout = SlicedLayout::new().layout(&graph).unwrap();

        assert_eq!(layout.extent, Extent::new(3, 1));
        assert_eq!(layout.position(NodeId(1)), Some(Position::new(0, 0)));
        assert_eq!(layout.position(NodeId(2)), Some(Position::new(1, 0)));
        assert_eq!(layout.position(NodeId(3)), Some(Position::new(2, 0)));
    }

    #[test]
    fn diamond() {
        let graph = graph(&[1, 2, 3, 4], &[(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap();

        let layout = SlicedLayout::new().layout(&graph).unwrap();

        assert_eq!(layout.extent, Extent::new(3, 2));
        assert_eq!(layout.position(NodeId(1)), Some(Position::new(0, 0)));
        assert_eq!(layout.position(NodeId(2)), Some(Position::new(1, -1)));
        assert_eq!(layout.position(NodeId(3)), Some(Position::new(1, 1)));
        assert_eq!(layout.position(NodeId(4)), Some(Position::new(2, 0)));
    }

    #[test]
    fn unequal_convergence() {
        // A=1, B=2, C=3, D=4, E=5: A -> B -> D, A -> C -> E -> D
        let graph = graph(
            &[1, 2, 3, 4, 5],
            &[(1, 2), (2, 4), (1, 3), (3, 5), (5, 4)],
        )
        .unwrap();

        let slices = SlicedLayout::new().compute_slices(&graph).unwrap();
        assert_eq!(slices.nodes, vec![vec![0], vec![1, 2], vec![4], vec![3]]);
        assert_eq!(slices.extent(), Extent::new(4, 2));
        assert_eq!(slices.slice_of(3), Some(3));

        let layout = SlicedLayout::new().compute_positions(&graph, &slices).unwrap();
        assert_eq!(layout.position(NodeId(5)), Some(Position::new(2, 0)));
        assert_eq!(layout.position(NodeId(4)), Some(Position::new(3, 0)));
    }

    #[test]
    fn single_node() {
        let graph = graph(&[7], &[]).unwrap();

        let layout = SlicedLayout::new().layout(&graph).unwrap();

        assert_eq!(layout.extent, Extent::new(1, 1));
        assert_eq!(layout.entry, layout.exit);
        assert_eq!(layout.position(NodeId(7)), Some(Position::origin()));
    }

    #[test]
    fn two_isolated_nodes() {
        let graph = graph(&[1, 2], &[]).unwrap();

        assert_eq!(
            SlicedLayout::new().layout(&graph),
            Err(LayoutError::NoUniqueEntry { found: 2 })
        );
    }

    #[test]
    fn unreachable_nodes_fail_by_default() {
        // 1 -> 4, plus a detached 2 <-> 3 loop
        let graph = graph(&[1, 2, 3, 4], &[(1, 4), (2, 3), (3, 2)]).unwrap();

        assert_eq!(
            SlicedLayout::new().layout(&graph),
            Err(LayoutError::UnreachableNodes(vec![NodeId(2), NodeId(3)]))
        );
    }

    #[test]
    fn unreachable_nodes_can_be_dropped() {
        let graph = graph(&[1, 2, 3, 4], &[(1, 4), (2, 3), (3, 2)]).unwrap();

        let layout = SlicedLayout::new()
            .allow_unreachable(true)
            .layout(&graph)
            .unwrap();

        assert_eq!(layout.extent, Extent::new(2, 1));
        assert_eq!(layout.position(NodeId(4)), Some(Position::new(1, 0)));
        assert_eq!(layout.position(NodeId(2)), None);
        assert_eq!(layout.position(NodeId(3)), None);
    }

    #[test]
    fn reachable_cycle_fails() {
        let graph = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 2), (3, 4)]).unwrap();

        assert!(matches!(
            SlicedLayout::new().layout(&graph),
            Err(LayoutError::CyclicGraph { .. })
        ));
    }

    #[test]
    fn every_node_gets_one_position_at_its_longest_depth() {
        // Layered DAG with shortcuts: 1 -> {2, 3, 6}, 2 -> 4, 3 -> 4, 4 -> 5,
        // 5 -> 6, 1 -> 5
        let graph = graph(
            &[1, 2, 3, 4, 5, 6],
            &[(1, 2), (1, 3), (1, 6), (2, 4), (3, 4), (4, 5), (5, 6), (1, 5)],
        )
        .unwrap();

        let slices = SlicedLayout::new().compute_slices(&graph).unwrap();
        let layout = SlicedLayout::new().compute_positions(&graph, &slices).unwrap();

        let depths: Vec<i64> = layout
            .nodes
            .iter()
            .map(|node| node.position.unwrap().x)
            .collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 3, 4]);

        for node in &layout.nodes {
            let x = node.position.unwrap().x;
            assert!(x >= 0 && (x as usize) < layout.extent.width);
        }
        let placed: usize = slices.nodes.iter().map(Vec::len).sum();
        assert_eq!(placed, graph.len());
    }

    #[test]
    fn layout_is_deterministic() {
        let edges = [(5, 9), (5, 2), (2, 7), (9, 7), (5, 7), (2, 9)];

        let first = SlicedLayout::new()
            .layout(&graph(&[9, 7, 5, 2], &edges).unwrap())
            .unwrap();
        let second = SlicedLayout::new()
            .layout(&graph(&[2, 5, 7, 9], &edges).unwrap())
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn graphs_can_be_laid_out_on_separate_threads() {
        let graphs: Vec<Graph> = (1..=4)
            .map(|len| {
                let nodes: Vec<i64> = (0..len).collect();
                let edges: Vec<(i64, i64)> = (1..len).map(|to| (to - 1, to)).collect();
                graph(&nodes, &edges).unwrap()
            })
            .collect();

        let engine = &SlicedLayout::new();
        let widths: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = graphs
                .iter()
                .map(|graph| scope.spawn(move || engine.layout(graph).map(|layout| layout.extent.width)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .collect()
        });

        assert_eq!(widths, vec![1, 2, 3, 4]);
    }
}
