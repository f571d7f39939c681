//! Static maze grid and collision queries
//!
//! Coordinates are (column, row). Continuous positions are in cell units and
//! resolve to the cell containing them by flooring.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::PLACEMENT_ATTEMPTS;
use crate::error::{MazeError, PlacementError};

/// A single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Path,
}

/// Reference 10x10 layout (1 = wall, 0 = path)
pub const REFERENCE_LAYOUT: [[u8; 10]; 10] = [
    [0, 1, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 1, 0],
    [0, 0, 0, 1, 0, 0, 0, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 0, 1, 0, 1],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [0, 1, 1, 1, 1, 1, 0, 1, 0, 1],
    [0, 1, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 1, 0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 1, 0, 1, 1, 0],
];

/// Immutable N x M occupancy grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    width: usize,
    height: usize,
    /// Row-major cells
    cells: Vec<Cell>,
}

impl Default for Maze {
    fn default() -> Self {
        Self::reference()
    }
}

impl Maze {
    /// The reference 10x10 maze
    pub fn reference() -> Self {
        let cells = REFERENCE_LAYOUT
            .iter()
            .flat_map(|row| row.iter())
            .map(|&v| if v == 1 { Cell::Wall } else { Cell::Path })
            .collect();
        Self {
            width: REFERENCE_LAYOUT[0].len(),
            height: REFERENCE_LAYOUT.len(),
            cells,
        }
    }

    /// Build from a 0/1 matrix (1 = wall)
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MazeError> {
        let mut grid = Vec::with_capacity(rows.len());
        for (row, bits) in rows.iter().enumerate() {
            let cells = bits
                .as_ref()
                .iter()
                .enumerate()
                .map(|(col, &bit)| match bit {
                    0 => Ok(Cell::Path),
                    1 => Ok(Cell::Wall),
                    other => Err(MazeError::InvalidCell {
                        row,
                        col,
                        value: char::from_digit(other as u32 % 36, 36).unwrap_or('?'),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            grid.push(cells);
        }
        Self::from_grid(grid)
    }

    /// Build from text rows: `#` is a wall, `.` is a path
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut grid = Vec::new();
        for (row, line) in text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let cells = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' => Ok(Cell::Wall),
                    '.' => Ok(Cell::Path),
                    value => Err(MazeError::InvalidCell { row, col, value }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            grid.push(cells);
        }
        Self::from_grid(grid)
    }

    fn from_grid(grid: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let width = grid.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(MazeError::Empty);
        }
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != width {
                return Err(MazeError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            width,
            height: grid.len(),
            cells: grid.into_iter().flatten().collect(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (col, row), `None` outside the grid
    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// True if the integer cell is inside the grid
    #[inline]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        self.cell(col, row).is_some()
    }

    /// Wall test on an integer cell. Outside the grid counts as wall.
    #[inline]
    pub fn is_wall_cell(&self, col: i32, row: i32) -> bool {
        self.cell(col, row) != Some(Cell::Path)
    }

    /// Wall test on a continuous position, floored to its cell.
    /// Out-of-range and non-finite coordinates are blocking.
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return true;
        }
        let (col, row) = (x.floor(), y.floor());
        if col < 0.0 || row < 0.0 || col >= self.width as f32 || row >= self.height as f32 {
            return true;
        }
        self.is_wall_cell(col as i32, row as i32)
    }

    /// Every path cell in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Path)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    pub fn open_cell_count(&self) -> usize {
        self.open_cells().count()
    }

    /// Uniformly sample an open cell as (col, row)
    pub fn find_random_open_cell<R: Rng>(&self, rng: &mut R) -> Result<(usize, usize), PlacementError> {
        self.find_random_open_cell_excluding(rng, &[])
            .map_err(|_| PlacementError::NoOpenCell)
    }

    /// Uniformly sample an open cell not listed in `taken`.
    ///
    /// Rejection sampling is bounded; after that the candidates are enumerated
    /// so the call terminates even on mazes that are almost entirely wall.
    pub fn find_random_open_cell_excluding<R: Rng>(
        &self,
        rng: &mut R,
        taken: &[(usize, usize)],
    ) -> Result<(usize, usize), PlacementError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let col = rng.random_range(0..self.width);
            let row = rng.random_range(0..self.height);
            if self.cells[row * self.width + col] == Cell::Path && !taken.contains(&(col, row)) {
                return Ok((col, row));
            }
        }

        let candidates: Vec<_> = self
            .open_cells()
            .filter(|cell| !taken.contains(cell))
            .collect();
        if candidates.is_empty() {
            return Err(if self.open_cell_count() == 0 {
                PlacementError::NoOpenCell
            } else {
                PlacementError::Exhausted { requested: 1 }
            });
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }
}
