use log::trace;
use num_traits::Float;

use crate::errors::SearchError;
use crate::geometry::{Cell, adjacents};
use crate::terrain::{CostModel, TileGrid};
use super::{Exploration, NodeTable, PriorityFrontier, SearchObserver};


/// Identify the cheapest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Relaxation is capped at `budget` dequeues: the path is only optimal when the goal
/// is reached inside the budget, otherwise the search reports failure
pub(crate) fn explore<C, O>(grid: &TileGrid, costs: &CostModel<C>, start: Cell, goal: Cell, budget: usize, observer: &mut O) -> Result<Exploration<C>, SearchError>
where
    C: Float,
    O: SearchObserver + ?Sized,
{
    let (rows, cols) = (grid.rows(), grid.cols());

    // Every cell is unreached except the start
    // The table, not the frontier, holds the authoritative cost of each cell
    let mut nodes = NodeTable::new(grid, C::infinity());
    let start_index = grid.checked_index(start)?;
    nodes.node_mut(start_index).cost = C::zero();

    // Cells to visit, cheapest first
    // A cell is pushed again whenever its cost improves; older copies are skipped on pop
    let mut frontier = PriorityFrontier::new();
    frontier.push(start, C::zero());

    let mut dequeues = 0;
    let mut found = false;

    while dequeues < budget {
        let Some((cell, priority)) = frontier.pop() else {
            break; // frontier exhausted
        };
        dequeues += 1;

        let Some(index) = grid.index(cell) else {
            continue;
        };

        // If the popped cost is higher than the best cost, skip it
        // This implies we've already found a better path to this cell
        let current_cost = nodes.node(index).cost;
        if priority > current_cost {
            continue;
        }

        if cell == goal {
            found = true;
            break;
        }

        trace!("dijkstra expands {cell} at cost {:?}", current_cost.to_f64());
        observer.expanded(cell);

        for adj in adjacents(cell, rows, cols) {
            let Some(adj_index) = grid.index(adj) else {
                continue;
            };

            // Impassable tiles are dropped before their cost is ever read
            let rule = costs.rule(grid.terrain(adj)?)?;
            if !rule.passable {
                continue;
            }

            // new cost to reach this cell = cost of entering it + cost so far
            let candidate = current_cost + rule.cost;
            let node = nodes.node_mut(adj_index);
            if candidate < node.cost {
                node.cost = candidate;
                node.parent = cell;
                frontier.push(adj, candidate);
            }
        }
    }

    Ok(Exploration { nodes, found, dequeues })
}
