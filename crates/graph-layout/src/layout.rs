use crate::{Extent, Node, NodeId, Position};
use serde::Serialize;

/// Positioned graph, as handed to renderers and serializers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    #[serde(flatten)]
    pub extent: Extent,

    /// Id of the entry node, at the origin
    pub entry: NodeId,

    /// Id of the exit node, in the last slice
    pub exit: NodeId,

    /// Every node of the graph in ascending id order
    pub nodes: Vec<Node>,

    /// Adjacency matrix of the source graph, indexed like `nodes`
    pub edges: Vec<Vec<bool>>,
}

impl Layout {
    /// Position of the node with the given id, if it was placed
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.nodes
            .binary_search_by_key(&id, |node| node.id)
            .ok()
            .and_then(|index| self.nodes[index].position)
    }

    /// Placed nodes only
    pub fn placed(&self) -> impl Iterator<Item = (NodeId, Position)> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.position.map(|position| (node.id, position)))
    }
}
