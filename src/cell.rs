use std::collections::TryReserveError;
use std::fmt;
use std::str::FromStr;

use crate::error::InvariantViolation;

/// A single cell of the automaton. The alphabet is binary, so anything other than `0` or `1` can
/// only show up when decoding text.
#[repr(u8)]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Boundary value used for every position outside of a row.
    pub const BOUNDARY: Cell = Cell::Dead;

    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 1 { Cell::Alive } else { Cell::Dead }
    }

    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn symbol(self) -> char {
        match self {
            Cell::Dead => '0',
            Cell::Alive => '1',
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl TryFrom<char> for Cell {
    type Error = InvariantViolation;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Cell::Dead),
            '1' => Ok(Cell::Alive),
            c => Err(InvariantViolation::InvalidSymbol(c)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One generation of the automaton.
///
/// Rendered as its symbols separated by single spaces, e.g. `0 1 0`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Hash)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// A row of `width` dead cells with a single live cell at `width / 2`.
    ///
    /// Fails instead of aborting when `width` cells can't be allocated.
    pub fn seeded(width: usize) -> Result<Self, TryReserveError> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(width)?;
        cells.resize(width, Cell::Dead);

        if let Some(center) = cells.get_mut(width / 2) {
            *center = Cell::Alive;
        }

        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Cell at `i`, or the boundary value if `i` is outside the row.
    pub fn get_or_boundary(&self, i: isize) -> Cell {
        usize::try_from(i)
            .ok()
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or(Cell::BOUNDARY)
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Parses rows like `0 1 1` or `011`. Whitespace between symbols is ignored.
impl FromStr for Row {
    type Err = InvariantViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(Cell::try_from)
            .collect()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{cell}")?;
        }

        Ok(())
    }
}
