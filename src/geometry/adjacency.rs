use super::Cell;


/// Orthogonal neighbors of `cell` that lie inside a `rows` x `cols` grid
/// Order is fixed: left, right, up, down
/// No diagonals, and the input cell is never included
pub fn adjacents(cell: Cell, rows: usize, cols: usize) -> Vec<Cell> {

    let mut cells = Vec::with_capacity(4);

    // A step that would overflow i32 lies outside every grid anyway
    let candidates = [
        cell.column.checked_sub(1).map(|column| Cell::new(column, cell.row)), // left
        cell.column.checked_add(1).map(|column| Cell::new(column, cell.row)), // right
        cell.row.checked_sub(1).map(|row| Cell::new(cell.column, row)),       // up
        cell.row.checked_add(1).map(|row| Cell::new(cell.column, row)),       // down
    ];

    for candidate in candidates.into_iter().flatten() {
        if in_bounds(candidate, rows, cols) {
            cells.push(candidate);
        }
    }

    cells
}

/// True when both coordinates fall inside `[0, rows) x [0, cols)`
pub(crate) fn in_bounds(cell: Cell, rows: usize, cols: usize) -> bool {
    let (Ok(row), Ok(column)) = (usize::try_from(cell.row), usize::try_from(cell.column)) else {
        return false;
    };
    row < rows && column < cols
}
