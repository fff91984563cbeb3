use crate::NodeId;
use thiserror::Error;

/// Reasons a graph cannot be laid out
///
/// None of these are fatal to the caller: they all mean "this graph has no
/// sliced layout", and nothing has been positioned when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Two input nodes share the same id
    #[error("node id {0} appears more than once")]
    DuplicateNodeId(NodeId),

    /// An edge points to or from an id that isn't in the node set
    #[error("edge {from} -> {to} references unknown node {missing}")]
    UnknownNodeReference {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    /// Zero or several nodes have no incoming edge
    #[error("expected exactly one entry node, found {found}")]
    NoUniqueEntry { found: usize },

    /// Zero or several nodes have no outgoing edge
    #[error("expected exactly one exit node, found {found}")]
    NoUniqueExit { found: usize },

    /// Some nodes can't be reached from the entry node
    #[error("nodes not reachable from the entry: {0:?}")]
    UnreachableNodes(Vec<NodeId>),

    /// The part of the graph reachable from the entry contains a cycle
    #[error("graph contains a cycle at node {id}")]
    CyclicGraph { id: NodeId },

    /// The located exit isn't the node the last slice ends on
    #[error("entry {entry} and exit {exit} don't match the computed slices")]
    InconsistentEndpoints { entry: NodeId, exit: NodeId },

    /// Slices refer to a node index the graph doesn't have
    #[error("slice index {index} is out of range for a graph of {len} nodes")]
    ForeignSlices { index: usize, len: usize },

    /// A node index is placed in more than one slice
    #[error("node index {index} appears in more than one slice")]
    DuplicateSliceMember { index: usize },

    /// The graph already has positions, reset it before laying it out again
    #[error("graph has already been laid out")]
    PositionAlreadySet,
}
