//! Grid representation and utilities for Game of Life

use super::LifeError;
use rand::Rng;
use std::fmt;

/// A rectangular Game of Life grid stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Build a `rows x cols` grid where every cell is alive with probability 0.5
pub fn initialize_grid<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Grid {
    Grid::random(rows, cols, 0.5, rng)
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Create a grid whose cells are independently alive with probability `density`
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let cells = (0..rows * cols).map(|_| rng.random_bool(p)).collect();

        Self { rows, cols, cells }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyGrid);
        }

        if let Some((row, bad)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(LifeError::RaggedRow {
                row,
                actual: bad.len(),
                expected: cols,
            });
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            false // Out of bounds cells are considered dead
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), LifeError> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Iterate over the rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols.max(1))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Count living cells in the Moore neighborhood of `(row, col)`
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1] {
            for dc in [-1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if self.is_neighbor_alive(r, c) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Positions outside the grid are always dead; there is no wraparound
    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.get(row as usize, col as usize)
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Whether `other` has the same dimensions as this grid
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                write!(f, "{}", if cell { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
