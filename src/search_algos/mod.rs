pub mod frontier;
mod dijkstra;
mod flood_fill;
mod shortest_path;

pub use frontier::PriorityFrontier;

use log::debug;
use num_traits::Float;

use crate::errors::SearchError;
use crate::geometry::Cell;
use crate::terrain::{CostModel, TileGrid};
use shortest_path::retrace;


/// Which exploration to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Unweighted, // breadth-first flood fill, every step costs the same
    Weighted,   // Dijkstra over terrain costs
}


/// Outcome of one search call
/// `path` runs from start to goal and is empty when `found` is false
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub found: bool,
    pub path: Vec<Cell>,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self { found: false, path: Vec::new() }
    }

    fn found(path: Vec<Cell>) -> Self {
        Self { found: true, path }
    }

    /// Number of cells on the path, endpoints included
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}


/// Receives every cell a search expands, in expansion order
/// The goal itself and stale frontier entries are never reported
pub trait SearchObserver {
    fn expanded(&mut self, cell: Cell);
}

impl<F: FnMut(Cell)> SearchObserver for F {
    fn expanded(&mut self, cell: Cell) {
        self(cell)
    }
}


/// Per-cell bookkeeping for a single search
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode<C> {
    pub(crate) cell: Cell,
    pub(crate) parent: Cell, // Cell::INVALID when unreached or the start
    pub(crate) cost: C,      // cumulative cost from the start
}

/// One node per grid cell, laid out like the grid itself
/// Allocated at the start of a search call and dropped when it returns
#[derive(Debug)]
pub(crate) struct NodeTable<C> {
    nodes: Vec<SearchNode<C>>,
}

impl<C: Copy> NodeTable<C> {

    pub(crate) fn new(grid: &TileGrid, initial_cost: C) -> Self {
        let nodes = grid
            .cells()
            .map(|(cell, _)| SearchNode {
                cell,
                parent: Cell::INVALID,
                cost: initial_cost,
            })
            .collect();
        Self { nodes }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, index: usize) -> &SearchNode<C> {
        &self.nodes[index]
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut SearchNode<C> {
        &mut self.nodes[index]
    }
}


/// What a strategy leaves behind for path reconstruction
#[derive(Debug)]
pub(crate) struct Exploration<C> {
    pub(crate) nodes: NodeTable<C>,
    pub(crate) found: bool,
    pub(crate) dequeues: usize,
}


/// Runs searches over one grid and cost model
/// Both are borrowed immutably, so a planner can be shared across threads
#[derive(Clone, Copy, Debug)]
pub struct GridPlanner<'a, C = f64> {
    grid: &'a TileGrid,
    costs: &'a CostModel<C>,
}

impl<'a, C: Float> GridPlanner<'a, C> {

    /// Fails if the cost model is incomplete or holds an invalid cost
    pub fn new(grid: &'a TileGrid, costs: &'a CostModel<C>) -> Result<Self, SearchError> {
        costs.validate()?;
        Ok(Self { grid, costs })
    }

    pub fn grid(&self) -> &'a TileGrid {
        self.grid
    }

    pub fn costs(&self) -> &'a CostModel<C> {
        self.costs
    }

    /// Search from `start` to `goal`, dequeuing at most `budget` frontier entries
    /// Running out of budget or frontier is reported as `found = false`
    pub fn plan(&self, strategy: Strategy, start: Cell, goal: Cell, budget: usize) -> Result<PathResult, SearchError> {
        self.plan_observed(strategy, start, goal, budget, &mut |_cell: Cell| {})
    }

    /// Same as `plan`, reporting every expanded cell to `observer`
    pub fn plan_observed<O>(&self, strategy: Strategy, start: Cell, goal: Cell, budget: usize, observer: &mut O) -> Result<PathResult, SearchError>
    where
        O: SearchObserver + ?Sized,
    {
        // Malformed endpoints fail fast instead of being clamped
        self.grid.checked_index(start)?;
        self.grid.checked_index(goal)?;

        debug!("{strategy:?} search from {start} to {goal} with budget {budget}");

        let exploration = match strategy {
            Strategy::Unweighted => flood_fill::explore(self.grid, self.costs, start, goal, budget, observer)?,
            Strategy::Weighted => dijkstra::explore(self.grid, self.costs, start, goal, budget, observer)?,
        };

        debug!(
            "{strategy:?} search {} after {} dequeues",
            if exploration.found { "reached goal" } else { "gave up" },
            exploration.dequeues,
        );

        if !exploration.found {
            return Ok(PathResult::not_found());
        }

        // Retrace our steps from the goal
        match retrace(self.grid, &exploration.nodes, start, goal) {
            Some(path) => Ok(PathResult::found(path)),
            None => Ok(PathResult::not_found()),
        }
    }
}


/// One-shot search over `grid` with `costs`
pub fn search<C: Float>(strategy: Strategy, grid: &TileGrid, costs: &CostModel<C>, start: Cell, goal: Cell, budget: usize) -> Result<PathResult, SearchError> {
    GridPlanner::new(grid, costs)?.plan(strategy, start, goal, budget)
}
