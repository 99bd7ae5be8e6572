use rand::Rng;

use super::{Cell, Grid, LifeError, Result};

/// Per-cell live probability used by `randomize` when the caller has no preference.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// LifeEngine owns the current generation and validates every call at the boundary.
/// It knows nothing about rendering, timers or input.
pub struct LifeEngine {
    grid: Grid,
}

impl LifeEngine {
    /// Create an all-dead engine of `rows` x `cols`
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        // One byte per cell, so the count must also fit an allocation
        let cells = rows.checked_mul(cols).filter(|&n| n <= isize::MAX as usize);
        if rows == 0 || cols == 0 || cells.is_none() {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        log::debug!("life engine created with a {rows}x{cols} torus");
        Ok(Self {
            grid: Grid::new(rows, cols),
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.dimensions().0
    }

    pub fn cols(&self) -> usize {
        self.grid.dimensions().1
    }

    /// Map signed coordinates onto the grid, rejecting anything off it
    fn index(&self, row: i32, col: i32) -> Result<(usize, usize)> {
        let (rows, cols) = self.grid.dimensions();
        let out_of_bounds = LifeError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        };
        let r = usize::try_from(row).map_err(|_| out_of_bounds)?;
        let c = usize::try_from(col).map_err(|_| out_of_bounds)?;
        if r >= rows || c >= cols {
            return Err(out_of_bounds);
        }
        Ok((r, c))
    }

    fn cell(&self, r: usize, c: usize) -> Cell {
        self.grid.get(r, c).unwrap_or_default()
    }

    pub fn is_alive(&self, row: i32, col: i32) -> Result<bool> {
        let (r, c) = self.index(row, col)?;
        Ok(self.cell(r, c).is_alive())
    }

    /// Paint a cell to an explicit state (pointer drag always passes `true`)
    pub fn set_alive(&mut self, row: i32, col: i32, alive: bool) -> Result<()> {
        let (r, c) = self.index(row, col)?;
        self.grid.set(r, c, Cell::from(alive));
        Ok(())
    }

    /// Flip a single cell (discrete click)
    pub fn toggle(&mut self, row: i32, col: i32) -> Result<()> {
        let (r, c) = self.index(row, col)?;
        let flipped = self.cell(r, c).toggle();
        self.grid.set(r, c, flipped);
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.fill_with(|| Cell::Dead);
    }

    /// Seed every cell independently from the thread RNG
    pub fn randomize(&mut self, probability: f64) -> Result<()> {
        self.randomize_with(probability, &mut rand::rng())
    }

    /// Seed every cell independently from `rng`; alive with `probability`
    pub fn randomize_with<R: Rng>(&mut self, probability: f64, rng: &mut R) -> Result<()> {
        check_probability(probability)?;
        self.grid.fill_with(|| Cell::from(rng.random_bool(probability)));
        Ok(())
    }

    /// Advance one generation; the next grid is built from the current one and swapped in whole
    pub fn step(&mut self) {
        self.grid = self.grid.evolve();
        log::trace!("generation advanced, population {}", self.grid.population());
    }

    /// Live cells among the 8 toroidal neighbors, never counting the cell itself
    pub fn neighbor_count(&self, row: i32, col: i32) -> Result<u8> {
        let (r, c) = self.index(row, col)?;
        Ok(self.grid.count_live_neighbors(r, c))
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Read-only `(row, col, alive)` view for the renderer
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.grid.iter_cells().map(|(r, c, cell)| (r, c, cell.is_alive()))
    }
}

/// Accept only probabilities in [0, 1]; NaN fails the range check too
pub fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(LifeError::InvalidArgument { probability })
    }
}
