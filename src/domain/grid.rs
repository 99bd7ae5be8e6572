use super::Cell;

/// Grid is the toroidal board of cells, stored row-major.
/// Evolution never mutates in place: each generation is a fresh Grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position, ignoring positions off the grid
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors using toroidal wrapping.
    /// Callers guarantee `row < rows` and `col < cols`.
    pub(super) fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = self.rows;
        let cols = self.cols;

        (0..3)
            .flat_map(|dr| (0..3).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 1 || dc != 1)
            .map(|(dr, dc)| {
                // Adding `extent - 1` instead of subtracting 1 keeps the arithmetic unsigned
                let r = (row + rows - 1 + dr) % rows;
                let c = (col + cols - 1 + dc) % cols;
                self.cells[self.get_index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.get_index(row, col)];
        current.evolve(self.count_live_neighbors(row, col))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn evolve(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Overwrite every cell, keeping the allocation
    pub fn fill_with(&mut self, mut f: impl FnMut() -> Cell) {
        self.cells.iter_mut().for_each(|cell| *cell = f());
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}
