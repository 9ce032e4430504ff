use thiserror::Error;

use crate::geometry::Cell;
use crate::terrain::TerrainKind;


/// Errors raised for malformed search input
/// Running out of budget is not an error - it is reported as `found = false`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("cell {cell} lies outside a {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize }, // never clamped

    #[error("terrain {kind:?} has invalid traversal cost {cost}")]
    InvalidCost { kind: TerrainKind, cost: f64 }, // negative, NaN or infinite

    #[error("no traversal rule for terrain {0:?}")]
    MissingTerrainRule(TerrainKind),

    #[error("unknown terrain code {0}")]
    UnknownTerrainCode(u8),

    #[error("unknown terrain glyph {0:?}")]
    UnknownTerrainGlyph(char),

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },

    #[error("grid has no tiles")]
    EmptyGrid,

    #[error("a {rows}x{cols} grid is too large to address")]
    GridTooLarge { rows: usize, cols: usize }, // a dimension exceeds i32 or the tile count overflows
}
