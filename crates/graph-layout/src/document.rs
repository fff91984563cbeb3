use crate::{Graph, Layout, LayoutEngine, LayoutError};
use tracing::{debug, warn};

/// Layout progress of a [`GraphDocument`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LayoutState {
    /// Nothing has been positioned yet
    #[default]
    Unlaid,
    /// Every reachable node has a position
    Laid(Layout),
    /// The last attempt failed, nothing is positioned
    Failed(LayoutError),
}

/// A graph together with the outcome of laying it out
///
/// Positions are assigned at most once: laying out a document that is
/// already [`LayoutState::Laid`] fails with
/// [`LayoutError::PositionAlreadySet`] until [`GraphDocument::reset`] is
/// called.
#[derive(Debug, Clone)]
pub struct GraphDocument {
    graph: Graph,
    state: LayoutState,
}

impl GraphDocument {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            state: LayoutState::Unlaid,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// The layout, once laid out
    pub fn layout(&self) -> Option<&Layout> {
        match &self.state {
            LayoutState::Laid(layout) => Some(layout),
            _ => None,
        }
    }

    /// Run `engine` on the graph and record the outcome
    ///
    /// # Errors
    /// Returns [`LayoutError::PositionAlreadySet`] without touching the
    /// current layout if the document is already laid out, or the engine's
    /// error, which is also kept as [`LayoutState::Failed`].
    pub fn lay_out<E>(&mut self, engine: &E) -> Result<&Layout, LayoutError>
    where
        E: LayoutEngine + ?Sized,
    {
        if let LayoutState::Laid(_) = self.state {
            return Err(LayoutError::PositionAlreadySet);
        }

        let layout = engine.layout(&self.graph).inspect_err(|error| {
            warn!("Failed to lay out graph: {error}");
            self.state = LayoutState::Failed(error.clone());
        })?;
        debug!("Laid out graph, extent {:?}", layout.extent);

        self.state = LayoutState::Laid(layout);
        match &self.state {
            LayoutState::Laid(layout) => Ok(layout),
            _ => Err(LayoutError::PositionAlreadySet),
        }
    }

    /// Forget the current layout so the graph can be laid out again
    pub fn reset(&mut self) -> LayoutState {
        std::mem::take(&mut self.state)
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::graph;
    use crate::{Extent, NodeId, SlicedLayout};
    use test_log::test;

    fn chain() -> GraphDocument {
        GraphDocument::new(graph(&[1, 2, 3], &[(1, 2), (2, 3)]).unwrap())
    }

    #[test]
    fn starts_unlaid() {
        let document = chain();

        assert_eq!(document.state(), &LayoutState::Unlaid);
        assert!(document.layout().is_none());
    }

    #[test]
    fn lay_out_returns_the_stored_layout() {
        let mut document = chain();

        let returned = document.lay_out(&SlicedLayout::new()).unwrap().clone();

        assert_eq!(document.layout(), Some(&returned));
        assert_eq!(document.state(), &LayoutState::Laid(returned));
    }

    #[test]
    fn laying_out_twice_is_refused() {
        let mut document = chain();
        let engine = SlicedLayout::new();

        let extent = document.lay_out(&engine).unwrap().extent;
        assert_eq!(extent, Extent::new(3, 1));

        assert_eq!(
            document.lay_out(&engine),
            Err(LayoutError::PositionAlreadySet)
        );
        // The first layout survives the refused attempt
        assert_eq!(document.layout().map(|layout| layout.extent), Some(extent));
    }

    #[test]
    fn reset_allows_a_new_layout() {
        let mut document = chain();
        let engine = SlicedLayout::new();

        document.lay_out(&engine).unwrap();
        assert!(matches!(document.reset(), LayoutState::Laid(_)));
        assert_eq!(document.state(), &LayoutState::Unlaid);

        assert!(document.lay_out(&engine).is_ok());
    }

    #[test]
    fn failures_leave_nothing_positioned() {
        let mut document = GraphDocument::new(graph(&[1, 2], &[]).unwrap());
        let engine = SlicedLayout::new();

        let error = document.lay_out(&engine).unwrap_err();

        assert_eq!(error, LayoutError::NoUniqueEntry { found: 2 });
        assert_eq!(document.state(), &LayoutState::Failed(error));
        assert!(document.layout().is_none());
    }

    #[test]
    fn failed_documents_can_be_retried_with_other_options() {
        let mut document =
            GraphDocument::new(graph(&[1, 2, 3, 4], &[(1, 4), (2, 3), (3, 2)]).unwrap());

        assert!(document.lay_out(&SlicedLayout::new()).is_err());

        let layout = document
            .lay_out(&SlicedLayout::new().allow_unreachable(true))
            .unwrap();
        assert_eq!(layout.entry, NodeId(1));
        assert_eq!(layout.exit, NodeId(4));
    }

    #[test]
    fn works_with_dynamic_engines() {
        let mut document = chain();
        let engine: Box<dyn LayoutEngine> = Box::new(SlicedLayout::new());

        assert!(document.lay_out(engine.as_ref()).is_ok());
        assert_eq!(document.into_graph().len(), 3);
    }
}
