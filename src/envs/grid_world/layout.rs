use super::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Cell types of the grid world map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `T`: entering it ends the episode.
    Terminal,
    /// `W`: plain traversable cell.
    White,
    /// `R`: entering it sends the agent back to the start cell.
    Hazard,
    /// `B`: the start cell, also the reset destination.
    Start,
}

impl Cell {
    pub fn marker(self) -> char {
        match self {
            Cell::Terminal => 'T',
            Cell::White => 'W',
            Cell::Hazard => 'R',
            Cell::Start => 'B',
        }
    }

    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            'T' => Some(Cell::Terminal),
            'W' => Some(Cell::White),
            'R' => Some(Cell::Hazard),
            'B' => Some(Cell::Start),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Rectangular, immutable grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: Vec<Vec<Cell>>,
}

impl Layout {
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let expected = match cells.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(GridError::EmptyLayout),
        };

        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GridError::RaggedLayout {
                row,
                len: r.len(),
                expected,
            });
        }

        Ok(Self { cells })
    }

    /// Parses one string per row, e.g. `["TWWWT", ..., "BWWWW"]`.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, value)| {
                        Cell::from_marker(value).ok_or(GridError::InvalidGridValue {
                            value,
                            row,
                            col,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(cells)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl Index<(usize, usize)> for Layout {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        &self.cells[row][col]
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A displacement on the grid, `(row delta, col delta)`, with a label for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub delta: (isize, isize),
    #[serde(default)]
    pub label: String,
}

impl Action {
    pub fn new(label: &str, dr: isize, dc: isize) -> Self {
        Self {
            delta: (dr, dc),
            label: label.to_string(),
        }
    }

    /// left, down, right, up.
    pub fn reference() -> Vec<Action> {
        vec![
            Action::new("←", 0, -1),
            Action::new("↓", 1, 0),
            Action::new("→", 0, 1),
            Action::new("↑", -1, 0),
        ]
    }
}
