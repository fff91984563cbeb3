use crate::{Graph, LayoutError, NodeId};
use serde::{Deserialize, Serialize};

/// Raw graph description, as handed over by a parser
///
/// Deserializes from either `{"nodes": [1, 2], "edges": [[1, 2]]}` or the
/// older `{"nodes": [{"id_": 1}, {"id_": 2}], "adj_mat": [[1, 2]]}` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(deserialize_with = "de::node_ids")]
    pub nodes: Vec<NodeId>,
    #[serde(alias = "adj_mat", default)]
    pub edges: Vec<(NodeId, NodeId)>,
}

impl GraphDescription {
    pub fn new<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = i64>,
        E: IntoIterator<Item = (i64, i64)>,
    {
        Self {
            nodes: nodes.into_iter().map(NodeId).collect(),
            edges: edges
                .into_iter()
                .map(|(from, to)| (NodeId(from), NodeId(to)))
                .collect(),
        }
    }

    /// Validate the description and build the graph model
    pub fn to_graph(&self) -> Result<Graph, LayoutError> {
        Graph::new(self.nodes.iter().copied(), self.edges.iter().copied())
    }
}

mod de {
    use crate::NodeId;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NodeEntry {
        Bare(NodeId),
        Object {
            #[serde(alias = "id_")]
            id: NodeId,
        },
    }

    pub(super) fn node_ids<'de, D>(deserializer: D) -> Result<Vec<NodeId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<NodeEntry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| match entry {
                NodeEntry::Bare(id) | NodeEntry::Object { id } => id,
            })
            .collect())
    }
}
