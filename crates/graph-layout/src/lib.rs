//! Sliced layered layout for directed acyclic graphs
//!
//! This crate places the nodes of a graph with a single entry and a single
//! exit on an integer grid suitable for a layered (Sugiyama-style) drawing:
//!
//! 1. [`find_endpoints`] locates the entry and exit nodes
//! 2. the entry is sliced breadth first, and every node is kept only in the
//!    deepest slice it reaches, i.e. at the length of its longest path
//! 3. each slice is spread symmetrically around zero
//!
//! Cyclic graphs, several sources or sinks and disconnected graphs are
//! rejected with a [`LayoutError`].
//!
//! # Layout Engines
//!
//! - [`SlicedLayout`]: the slice-by-depth layout described above
//!
//! # Example
//!
//! ```
//! use graphsky_layout::{GraphDescription, LayoutEngine, NodeId, Position, SlicedLayout};
//!
//! // A diamond: 1 -> {2, 3} -> 4
//! let description = GraphDescription::new([1, 2, 3, 4], [(1, 2), (1, 3), (2, 4), (3, 4)]);
//! let graph = description.to_graph().unwrap();
//!
//! // Use the LayoutEngine trait (simple, single-phase):
//! let engine = SlicedLayout::new();
//! let layout = engine.layout(&graph).unwrap();
//! assert_eq!((layout.extent.width, layout.extent.height), (3, 2));
//! assert_eq!(layout.position(NodeId(3)), Some(Position::new(1, 1)));
//!
//! // Or directly by calling each step for better control
//! let slices = engine.compute_slices(&graph).unwrap();
//! let layout = engine.compute_positions(&graph, &slices).unwrap();
//! assert_eq!(layout.entry, NodeId(1));
//! ```

mod description;
mod document;
mod endpoints;
mod engine;
mod error;
mod geometry;
mod graph;
mod layout;

pub mod sliced;

pub use description::GraphDescription;
pub use document::{GraphDocument, LayoutState};
pub use endpoints::{find_endpoints, Endpoints};
pub use engine::LayoutEngine;
pub use error::LayoutError;
pub use geometry::{Extent, Position};
pub use graph::{Graph, Node, NodeId};
pub use layout::Layout;

pub use sliced::{SlicedLayout, Slices};
