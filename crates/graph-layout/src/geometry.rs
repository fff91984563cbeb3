use serde::{Deserialize, Serialize};

/// Integer grid position of a node
///
/// `x` is the slice (layer) index, `y` the offset within the slice, centered
/// on zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Create a new position
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The origin, where the entry node always lands
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }
}

/// Size of a layered layout, in slices and nodes per slice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    /// Number of slices
    pub width: usize,
    /// Size of the largest slice
    pub height: usize,
}

impl Extent {
    /// Create a new extent
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}
