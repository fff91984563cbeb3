use crate::{LayoutError, Position};
use derive_more::{Display, From};
use petgraph::graphmap::DiGraphMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Externally assigned node identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub i64);

/// A node together with its resolved position, if it has one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(flatten)]
    pub position: Option<Position>,
}

/// Immutable node set and adjacency matrix
///
/// Nodes are kept sorted by id, and the position of a node in that order is
/// its index everywhere else in the crate. `edges[i][j]` is set when there is
/// an edge from the node at index `i` to the node at index `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    ids: Vec<NodeId>,
    edges: Vec<Vec<bool>>,
}

impl Graph {
    /// Build a graph from node ids and `(from, to)` id pairs
    ///
    /// # Errors
    /// Returns [`LayoutError::DuplicateNodeId`] if an id is given twice, and
    /// [`LayoutError::UnknownNodeReference`] if an edge names an id that isn't
    /// in the node set.
    pub fn new<N, E>(nodes: N, edges: E) -> Result<Self, LayoutError>
    where
        N: IntoIterator<Item = NodeId>,
        E: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut ids: Vec<NodeId> = nodes.into_iter().collect();
        ids.sort_unstable();

        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(LayoutError::DuplicateNodeId(pair[0]));
        }

        let mut matrix = vec![vec![false; ids.len()]; ids.len()];
        for (from, to) in edges {
            let lookup = |id: NodeId| {
                ids.binary_search(&id)
                    .map_err(|_| LayoutError::UnknownNodeReference {
                        from,
                        to,
                        missing: id,
                    })
            };
            let (i, j) = (lookup(from)?, lookup(to)?);
            matrix[i][j] = true;
        }

        trace!("Built graph with {} nodes", ids.len());

        Ok(Self { ids, edges: matrix })
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Id of the node at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn id(&self, index: usize) -> NodeId {
        self.ids[index]
    }

    /// All node ids, in index order
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Index of the node with the given id
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges[from][to]
    }

    /// Indices reachable through one outgoing edge, ascending
    pub fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges[index]
            .iter()
            .enumerate()
            .filter_map(|(j, &edge)| edge.then_some(j))
    }

    /// Indices with an edge into `index`, ascending
    pub fn predecessors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(move |(i, row)| row[index].then_some(i))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().flatten().filter(|&&edge| edge).count()
    }

    /// Raw adjacency rows
    pub fn adjacency(&self) -> &[Vec<bool>] {
        &self.edges
    }

    /// Index-keyed petgraph view, for traversals and sorting
    pub(crate) fn to_digraph(&self) -> DiGraphMap<usize, ()> {
        let mut graph = DiGraphMap::with_capacity(self.len(), self.edge_count());
        for index in 0..self.len() {
            graph.add_node(index);
        }
        for from in 0..self.len() {
            for to in self.successors(from) {
                graph.add_edge(from, to, ());
            }
        }
        graph
    }
}
