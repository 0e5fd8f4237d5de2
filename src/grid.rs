use std::{fmt, num::NonZeroUsize};

use bevy::prelude::Resource;

use crate::error::LifeError;

/// State of a single cell.
///
/// `Dead` only lasts one generation: a cell that just died shows up as dead
/// and fades to `Empty` on the next step unless it is reborn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Alive,
    Dead,
    #[default]
    Empty,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Manual toggle: empty cells come alive, anything else is cleared.
    #[inline]
    pub fn toggled(self) -> CellState {
        match self {
            CellState::Empty => CellState::Alive,
            CellState::Alive | CellState::Dead => CellState::Empty,
        }
    }

    fn from_char(c: char) -> Option<CellState> {
        match c {
            'O' | 'o' | '#' => Some(CellState::Alive),
            'x' | 'X' => Some(CellState::Dead),
            '.' => Some(CellState::Empty),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            CellState::Alive => 'O',
            CellState::Dead => 'x',
            CellState::Empty => '.',
        }
    }
}

/// One grid position together with its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

/// Fixed-size, row-major store of cell states. Dimensions never change after
/// construction and there is no wraparound at the edges.
#[derive(Resource, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// A grid with every cell empty.
    pub fn new(rows: NonZeroUsize, cols: NonZeroUsize) -> Self {
        let (rows, cols) = (rows.get(), cols.get());
        Self {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols],
        }
    }

    /// Builds a grid from text rows: `O` alive, `x` dead, `.` empty.
    /// All rows must have the same, non-zero width.
    pub fn from_pattern<S: AsRef<str>>(lines: &[S]) -> Result<Self, LifeError> {
        let mut cols = 0;
        let mut cells = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref().trim();
            let width = line.chars().count();
            if width == 0 {
                return Err(LifeError::Pattern {
                    line: i + 1,
                    reason: "empty row".to_owned(),
                });
            }
            if i == 0 {
                cols = width;
            } else if width != cols {
                return Err(LifeError::Pattern {
                    line: i + 1,
                    reason: format!("row has {width} cells, expected {cols}"),
                });
            }
            for c in line.chars() {
                let state = CellState::from_char(c).ok_or_else(|| LifeError::Pattern {
                    line: i + 1,
                    reason: format!("unknown cell {c:?}"),
                })?;
                cells.push(state);
            }
        }
        if cells.is_empty() {
            return Err(LifeError::Pattern {
                line: 0,
                reason: "no rows".to_owned(),
            });
        }
        Ok(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.idx(row, col).map(|i| Cell {
            row,
            col,
            state: self.cells[i],
        })
    }

    /// State lookup that accepts signed coordinates, so probing one step past
    /// an edge is an ordinary miss.
    #[inline]
    pub fn state_at(&self, row: isize, col: isize) -> Option<CellState> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Overwrites a cell. Writes outside the grid are dropped.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = state;
        }
    }

    /// Applies the manual toggle to a cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<CellState> {
        let i = self.idx(row, col)?;
        let next = self.cells[i].toggled();
        self.cells[i] = next;
        Some(next)
    }

    /// All cells in row-major order. Restartable: call it again for a fresh pass.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &state)| Cell {
            row: i / cols,
            col: i % cols,
            state,
        })
    }

    /// Number of alive cells among the (up to) eight around `(row, col)`.
    pub fn live_neighbours(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as isize, col as isize);
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&offs| offs != (0, 0))
            .filter(|&(dr, dc)| {
                self.state_at(row + dr, col + dc)
                    .is_some_and(CellState::is_alive)
            })
            .count() as u8
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|s| s.is_alive()).count()
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Marks the given offsets alive relative to `origin`. Anything that lands
    /// outside the grid is clipped.
    pub fn stamp(&mut self, offsets: &[(usize, usize)], origin: (usize, usize)) {
        for &(dr, dc) in offsets {
            self.set(origin.0 + dr, origin.1 + dc, CellState::Alive);
        }
    }

    /// Refills the grid with alive cells at roughly `density` (0.0 - 1.0),
    /// leaving the rest empty.
    pub fn randomize(&mut self, rng: &mut fastrand::Rng, density: f32) {
        for cell in self.cells.iter_mut() {
            *cell = if rng.f32() < density {
                CellState::Alive
            } else {
                CellState::Empty
            };
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|s| s.as_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
