use crate::{Graph, Layout, LayoutError};

/// A layout engine that can compute positions for graph nodes
///
/// Engines are pure: they read the graph and return a fresh [`Layout`]
/// snapshot, so one engine can lay out several graphs concurrently.
pub trait LayoutEngine {
    /// Compute node positions for the given graph
    ///
    /// # Errors
    /// Returns an error if the graph violates one of the engine's structural
    /// requirements. Nothing is positioned in that case.
    fn layout(&self, graph: &Graph) -> Result<Layout, LayoutError>;
}
