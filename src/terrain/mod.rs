pub mod cost;

pub use cost::{CostModel, TerrainRule};

use std::str::FromStr;

use crate::errors::SearchError;
use crate::geometry::{Cell, in_bounds};


/// Terrain stored in each tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Open,
    Wall,
    Water,
    Grass,
}

impl TerrainKind {

    pub const ALL: [TerrainKind; 4] = [
        TerrainKind::Open,
        TerrainKind::Wall,
        TerrainKind::Water,
        TerrainKind::Grass,
    ];

    /// Numeric level-data code: 0 open, 1 wall, 2 water, 3 grass
    pub fn from_code(code: u8) -> Result<Self, SearchError> {
        match code {
            0 => Ok(TerrainKind::Open),
            1 => Ok(TerrainKind::Wall),
            2 => Ok(TerrainKind::Water),
            3 => Ok(TerrainKind::Grass),
            other => Err(SearchError::UnknownTerrainCode(other)),
        }
    }

    /// Single character used by the text form of a grid
    pub fn from_glyph(glyph: char) -> Result<Self, SearchError> {
        match glyph {
            '.' => Ok(TerrainKind::Open),
            '#' => Ok(TerrainKind::Wall),
            '~' => Ok(TerrainKind::Water),
            '"' => Ok(TerrainKind::Grass),
            other => Err(SearchError::UnknownTerrainGlyph(other)),
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            TerrainKind::Open => '.',
            TerrainKind::Wall => '#',
            TerrainKind::Water => '~',
            TerrainKind::Grass => '"',
        }
    }
}


/// 2D terrain map, stored row-major and always indexed (row, column)
/// Built once by the caller and only read while a search runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<TerrainKind>,
}

impl TileGrid {

    /// Create a `rows` x `cols` grid filled with one terrain kind
    pub fn new(rows: usize, cols: usize, fill: TerrainKind) -> Result<Self, SearchError> {
        let len = tile_count(rows, cols)?;
        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(len)
            .map_err(|_| SearchError::GridTooLarge { rows, cols })?;
        tiles.resize(len, fill);
        Ok(Self { rows, cols, tiles })
    }

    /// Build from a `[row][column]` table
    /// Every row must have the same length
    pub fn from_rows(table: Vec<Vec<TerrainKind>>) -> Result<Self, SearchError> {
        let rows = table.len();
        let cols = table.first().map_or(0, Vec::len);
        let mut tiles = Vec::with_capacity(tile_count(rows, cols)?);
        for (row, line) in table.into_iter().enumerate() {
            if line.len() != cols {
                return Err(SearchError::RaggedGrid { row, expected: cols, found: line.len() });
            }
            tiles.extend(line);
        }

        Ok(Self { rows, cols, tiles })
    }

    /// Build from a literal table of numeric terrain codes
    pub fn from_codes<R: AsRef<[u8]>>(table: &[R]) -> Result<Self, SearchError> {
        let kinds = table
            .iter()
            .map(|line| line.as_ref().iter().map(|&code| TerrainKind::from_code(code)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<Vec<TerrainKind>>, SearchError>>()?;
        Self::from_rows(kinds)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        in_bounds(cell, self.rows, self.cols)
    }

    /// Flat index of a cell: row * cols + column
    /// The only place (row, column) is turned into storage order
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.cols + cell.column as usize)
    }

    /// Inverse of `index`; `None` past the last tile
    pub(crate) fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.tiles.len() {
            return None;
        }
        let column = i32::try_from(index % self.cols).ok()?;
        let row = i32::try_from(index / self.cols).ok()?;
        Some(Cell::new(column, row))
    }

    /// Fails instead of clamping when the cell is outside the grid
    pub(crate) fn checked_index(&self, cell: Cell) -> Result<usize, SearchError> {
        self.index(cell).ok_or(SearchError::OutOfBounds {
            cell,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Terrain under a cell
    pub fn terrain(&self, cell: Cell) -> Result<TerrainKind, SearchError> {
        let index = self.checked_index(cell)?;
        Ok(self.tiles[index])
    }

    /// Set-up time edit; never called while a search holds the grid
    pub fn set(&mut self, cell: Cell, kind: TerrainKind) -> Result<(), SearchError> {
        let index = self.checked_index(cell)?;
        self.tiles[index] = kind;
        Ok(())
    }

    /// Every cell with its terrain, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Cell, TerrainKind)> + '_ {
        // constructors keep both dimensions within i32, so no tile is skipped
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(index, &kind)| Some((self.cell_at(index)?, kind)))
    }
}

/// Number of tiles in a `rows` x `cols` grid
/// Both dimensions must be addressable by a `Cell` and their product must fit `usize`
fn tile_count(rows: usize, cols: usize) -> Result<usize, SearchError> {
    if rows == 0 || cols == 0 {
        return Err(SearchError::EmptyGrid);
    }
    if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
        return Err(SearchError::GridTooLarge { rows, cols });
    }
    rows.checked_mul(cols).ok_or(SearchError::GridTooLarge { rows, cols })
}

/// Text form: one line per row, one glyph per tile
/// `.` open, `#` wall, `~` water, `"` grass; blank lines and surrounding whitespace are ignored
impl FromStr for TileGrid {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let table = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(TerrainKind::from_glyph).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<Vec<TerrainKind>>, SearchError>>()?;
        Self::from_rows(table)
    }
}
