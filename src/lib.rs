//! Budgeted path search over terrain tile grids.
//!
//! Two interchangeable strategies explore a [`TileGrid`] from a start cell:
//!
//! - [`Strategy::Unweighted`] - breadth-first flood fill, every step costs the same
//! - [`Strategy::Weighted`] - Dijkstra over the terrain costs of a [`CostModel`]
//!
//! Each call dequeues at most `budget` frontier entries. Running out of budget
//! (or frontier) before the goal is reached is not an error: the result simply
//! reports `found = false`, and the caller may try again with a larger budget.
//! Paths in a [`PathResult`] always run from start to goal.
//!
//! ```
//! use tilepath::{Cell, CostModel, Strategy, TileGrid, search};
//!
//! let grid: TileGrid = "
//!     .#.
//!     .#.
//!     ...
//! ".parse().unwrap();
//! let costs: CostModel = CostModel::standard();
//!
//! let result = search(Strategy::Weighted, &grid, &costs, Cell::new(0, 0), Cell::new(2, 2), 9).unwrap();
//! assert!(result.found);
//! assert_eq!(result.path.first(), Some(&Cell::new(0, 0)));
//! assert_eq!(result.path.len(), 5);
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod search_algos;
pub mod terrain;

pub use errors::SearchError;
pub use geometry::{Cell, adjacents, manhattan_distance};
pub use search_algos::{GridPlanner, PathResult, PriorityFrontier, SearchObserver, Strategy, search};
pub use terrain::{CostModel, TerrainKind, TerrainRule, TileGrid};
