//! Life-like transition rules in `B/S` notation

use super::{Grid, LifeError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grids with at least this many cells are evaluated row-parallel
const PARALLEL_THRESHOLD: usize = 128 * 128;

/// Advance `grid` one generation under Conway's B3/S23 rule
pub fn next_generation(grid: &Grid) -> Grid {
    Rule::conway().evolve(grid)
}

/// Birth and survival neighbor counts for a life-like automaton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    birth: [bool; 9],
    survival: [bool; 9],
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule {
    /// Conway's Game of Life, B3/S23
    pub fn conway() -> Self {
        Self::from_counts(&[3], &[2, 3])
    }

    /// Build a rule from neighbor counts; counts above 8 are ignored
    pub fn from_counts(birth: &[u8], survival: &[u8]) -> Self {
        let mut rule = Self {
            birth: [false; 9],
            survival: [false; 9],
        };
        for &n in birth.iter().filter(|&&n| n <= 8) {
            rule.birth[n as usize] = true;
        }
        for &n in survival.iter().filter(|&&n| n <= 8) {
            rule.survival[n as usize] = true;
        }
        rule
    }

    /// Next state of a cell given its current state and live neighbor count
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let table = if alive { &self.survival } else { &self.birth };
        table.get(neighbors as usize).copied().unwrap_or(false)
    }

    pub fn birth_neighbor_counts(&self) -> Vec<u8> {
        counts(&self.birth)
    }

    pub fn survival_neighbor_counts(&self) -> Vec<u8> {
        counts(&self.survival)
    }

    /// Evolve the grid one generation into a freshly allocated grid
    pub fn evolve(&self, current: &Grid) -> Grid {
        let mut next = Grid::new(current.rows(), current.cols());
        self.fill(current, &mut next);
        next
    }

    /// Evolve the grid one generation into `next`, reusing its allocation
    pub fn evolve_into(&self, current: &Grid, next: &mut Grid) -> Result<(), LifeError> {
        if !current.same_shape(next) {
            return Err(LifeError::ShapeMismatch {
                rows: current.rows(),
                cols: current.cols(),
                actual_rows: next.rows(),
                actual_cols: next.cols(),
            });
        }
        self.fill(current, next);
        Ok(())
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(&self, mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = self.evolve(&grid);
        }
        grid
    }

    fn fill(&self, current: &Grid, next: &mut Grid) {
        let cols = current.cols();
        if cols == 0 || current.rows() == 0 {
            return;
        }

        let cells = next.cells_mut();
        if current.rows() * cols >= PARALLEL_THRESHOLD {
            cells
                .par_chunks_mut(cols)
                .enumerate()
                .for_each(|(row, out)| self.fill_row(current, row, out));
        } else {
            cells
                .chunks_mut(cols)
                .enumerate()
                .for_each(|(row, out)| self.fill_row(current, row, out));
        }
    }

    fn fill_row(&self, current: &Grid, row: usize, out: &mut [bool]) {
        for (col, cell) in out.iter_mut().enumerate() {
            *cell = self.next_state(current.get(row, col), current.count_neighbors(row, col));
        }
    }
}

fn counts(table: &[bool; 9]) -> Vec<u8> {
    (0..=8u8).filter(|&n| table[n as usize]).collect()
}

fn parse_counts(digits: &str) -> Option<Vec<u8>> {
    digits
        .chars()
        .map(|ch| ch.to_digit(10).filter(|&d| d <= 8).map(|d| d as u8))
        .collect()
}

impl FromStr for Rule {
    type Err = LifeError;

    /// Parse `B3/S23` style notation; the halves may appear in either order
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidRule(s.to_string());
        let (first, second) = s.trim().split_once('/').ok_or_else(invalid)?;

        let mut birth = None;
        let mut survival = None;
        for part in [first, second] {
            let mut chars = part.chars();
            let slot = match chars.next() {
                Some('B' | 'b') => &mut birth,
                Some('S' | 's') => &mut survival,
                _ => return Err(invalid()),
            };
            if slot.is_some() {
                return Err(invalid());
            }
            *slot = Some(parse_counts(chars.as_str()).ok_or_else(invalid)?);
        }

        match (birth, survival) {
            (Some(b), Some(s)) => Ok(Self::from_counts(&b, &s)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rule {
    type Error = LifeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.birth_neighbor_counts() {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in self.survival_neighbor_counts() {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
