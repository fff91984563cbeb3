use super::Slices;
use crate::{Graph, Layout, LayoutError, Node, Position};
use std::iter::successors;

/// Offsets of the members of a slice of the given size, top to bottom
///
/// Even sizes use odd offsets two apart, odd sizes use consecutive integers,
/// so both are symmetric around zero.
pub(crate) fn offsets(size: usize) -> impl Iterator<Item = i64> {
    let size = size as i64;
    let (first, step) = if size % 2 == 0 {
        (-(size - 1), 2)
    } else {
        (-(size / 2), 1)
    };

    successors(Some(first), move |y| Some(y + step)).take(size as usize)
}

/// Make sure `slices` index into `graph` and place every node at most once
fn check_indices(graph: &Graph, slices: &Slices) -> Result<(), LayoutError> {
    let len = graph.len();
    let in_range = |index: usize| {
        if index < len {
            Ok(index)
        } else {
            Err(LayoutError::ForeignSlices { index, len })
        }
    };

    in_range(slices.entry)?;
    in_range(slices.exit)?;

    let mut placed = vec![false; len];
    for &index in slices.nodes.iter().flatten() {
        if std::mem::replace(&mut placed[in_range(index)?], true) {
            return Err(LayoutError::DuplicateSliceMember { index });
        }
    }

    Ok(())
}

/// Position every sliced node and snapshot the result
pub(crate) fn assign_coordinates(graph: &Graph, slices: &Slices) -> Result<Layout, LayoutError> {
    check_indices(graph, slices)?;

    let entry = graph.id(slices.entry);
    let exit = graph.id(slices.exit);

    let starts_on_entry = slices.nodes.first().map(Vec::as_slice) == Some(&[slices.entry][..]);
    let ends_on_exit = slices
        .nodes
        .last()
        .is_some_and(|slice| slice.contains(&slices.exit));
    if !starts_on_entry || !ends_on_exit {
        return Err(LayoutError::InconsistentEndpoints { entry, exit });
    }

    let mut nodes: Vec<Node> = graph
        .ids()
        .iter()
        .map(|&id| Node { id, position: None })
        .collect();

    for (x, slice) in slices.nodes.iter().enumerate() {
        for (&index, y) in slice.iter().zip(offsets(slice.len())) {
            nodes[index].position = Some(Position::new(x as i64, y));
        }
    }

    Ok(Layout {
        extent: slices.extent(),
        entry,
        exit,
        nodes,
        edges: graph.adjacency().to_vec(),
    })
}
