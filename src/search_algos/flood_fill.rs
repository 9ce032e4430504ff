use std::collections::VecDeque;

use log::trace;
use num_traits::Float;

use crate::errors::SearchError;
use crate::geometry::{Cell, adjacents};
use crate::terrain::{CostModel, TileGrid};
use super::{Exploration, NodeTable, SearchObserver};


/// Breadth-first flood fill from `start`, giving up after `budget` dequeues
/// Every step costs the same; terrain only matters through passability
/// Node costs record the number of steps from the start
pub(crate) fn explore<C, O>(grid: &TileGrid, costs: &CostModel<C>, start: Cell, goal: Cell, budget: usize, observer: &mut O) -> Result<Exploration<C>, SearchError>
where
    C: Float,
    O: SearchObserver + ?Sized,
{
    let (rows, cols) = (grid.rows(), grid.cols());

    // Impassable tiles start out visited so they are never explored
    let mut visited = Vec::with_capacity(rows * cols);
    for (_, kind) in grid.cells() {
        visited.push(!costs.is_passable(kind)?);
    }

    let mut nodes = NodeTable::new(grid, C::infinity());
    let start_index = grid.checked_index(start)?;
    nodes.node_mut(start_index).cost = C::zero();

    // FIFO: cells come out in the order they were discovered
    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    let mut dequeues = 0;
    let mut found = false;

    while dequeues < budget {
        let Some(cell) = frontier.pop_front() else {
            break; // frontier exhausted
        };
        dequeues += 1;

        let Some(index) = grid.index(cell) else {
            continue;
        };
        visited[index] = true;

        if cell == goal {
            found = true;
            break;
        }

        trace!("flood fill expands {cell}");
        observer.expanded(cell);

        let steps = nodes.node(index).cost + C::one();
        for adj in adjacents(cell, rows, cols) {
            let Some(adj_index) = grid.index(adj) else {
                continue;
            };

            // A parent link means the cell is already queued: keep its first parent
            let node = nodes.node_mut(adj_index);
            if visited[adj_index] || node.parent.is_valid() {
                continue;
            }

            node.parent = cell;
            node.cost = steps;
            frontier.push_back(adj);
        }
    }

    Ok(Exploration { nodes, found, dequeues })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_algos::shortest_path::retrace;
    use crate::terrain::TerrainKind;

    fn run(grid: &TileGrid, start: Cell, goal: Cell, budget: usize) -> (Exploration<f64>, Vec<Cell>) {
        let costs = CostModel::standard();
        let mut expanded = Vec::new();
        let exploration = explore(grid, &costs, start, goal, budget, &mut |cell: Cell| expanded.push(cell)).unwrap();
        (exploration, expanded)
    }

    #[test]
    fn test_open_grid_corner_to_corner() {
        let grid = TileGrid::new(3, 3, TerrainKind::Open).unwrap();
        let (start, goal) = (Cell::new(0, 0), Cell::new(2, 2));

        let (exploration, _) = run(&grid, start, goal, 9);
        assert!(exploration.found);
        assert_eq!(exploration.dequeues, 9);

        let path = retrace(&grid, &exploration.nodes, start, goal).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
    }

    #[test]
    fn test_budget_cut_short() {
        let grid = TileGrid::new(3, 3, TerrainKind::Open).unwrap();
        let (exploration, expanded) = run(&grid, Cell::new(0, 0), Cell::new(2, 2), 8);
        assert!(!exploration.found);
        assert_eq!(exploration.dequeues, 8);
        assert_eq!(expanded.len(), 8);
    }

    #[test]
    fn test_expansion_is_breadth_order() {
        let grid = TileGrid::new(3, 3, TerrainKind::Open).unwrap();
        let (_, expanded) = run(&grid, Cell::new(0, 0), Cell::new(2, 2), 9);
        assert_eq!(expanded, vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(0, 1),
            Cell::new(2, 0),
            Cell::new(1, 1),
            Cell::new(0, 2),
            Cell::new(2, 1),
            Cell::new(1, 2),
        ]);
    }

    #[test]
    fn test_walls_are_never_entered() {
        let grid: TileGrid = "
            .#.
            .#.
            ...
        ".parse().unwrap();
        let (exploration, expanded) = run(&grid, Cell::new(0, 0), Cell::new(2, 0), 100);
        assert!(exploration.found);
        assert!(!expanded.contains(&Cell::new(1, 0)));
        assert!(!expanded.contains(&Cell::new(1, 1)));

        // step counts ride along in the node costs
        let goal_index = grid.index(Cell::new(2, 0)).unwrap();
        assert_eq!(exploration.nodes.node(goal_index).cost, 6.0);
    }

    #[test]
    fn test_frontier_exhausted_before_budget() {
        let grid: TileGrid = "
            ..#.
            ..#.
        ".parse().unwrap();
        let (exploration, expanded) = run(&grid, Cell::new(0, 0), Cell::new(3, 1), 1000);
        assert!(!exploration.found);
        assert_eq!(exploration.dequeues, 4);
        assert_eq!(expanded.len(), 4);
    }
}
