use log::warn;

use crate::geometry::Cell;
use crate::terrain::TileGrid;
use super::NodeTable;

/// Follow parent links from `end` back to `start`
/// Returns the ordered path as a vector of cells from start to goal
/// `None` when the chain is broken: it stops somewhere other than `start`,
/// leaves the grid, or loops
pub(crate) fn retrace<C: Copy>(grid: &TileGrid, nodes: &NodeTable<C>, start: Cell, end: Cell) -> Option<Vec<Cell>> {

    let mut path = Vec::new();
    let mut current = grid.index(end)?;

    // Trace back from goal to start
    loop {
        let node = nodes.node(current);

        if !node.parent.is_valid() {
            // only the start may lack a parent
            if node.cell != start {
                warn!("parent chain from {end} ends at {} instead of {start}", node.cell);
                return None;
            }
            path.push(start);
            break;
        }

        path.push(node.cell);
        if path.len() >= nodes.len() {
            warn!("parent chain from {end} loops");
            return None;
        }
        current = grid.index(node.parent)?;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Some(path)
}
