//! The 3x3 grid.

use crate::{Mark, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Moves address cells by number 1-9. A cell, once marked, is never
/// overwritten until [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether `position` (1-9) names an empty cell.
    pub fn is_valid_move(&self, position: usize) -> bool {
        Position::from_number(position).is_some_and(|pos| self.get(pos).is_empty())
    }

    /// Places `mark` at `position` (1-9).
    ///
    /// Returns `false` and leaves the board untouched when the move is not
    /// valid.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: usize, mark: Mark) -> bool {
        let Some(pos) = Position::from_number(position).filter(|&pos| self.get(pos).is_empty())
        else {
            debug!("Move rejected by board");
            return false;
        };
        self.cells[pos.index()] = Square::Occupied(mark);
        true
    }

    /// Checks whether `mark` holds a full row, column or diagonal.
    pub fn has_winning_line(&self, mark: Mark) -> bool {
        rules::has_winning_line(self, mark)
    }

    /// Checks whether every cell is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Square::Empty; 9];
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.cells[pos.index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Square; 9] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Positions that are still open.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.get(pos).is_empty())
            .collect()
    }
}

/// Renders the board as three rows, showing cell numbers in empty cells.
///
/// ```text
/// X|2|3
/// -+-+-
/// 4|O|6
/// -+-+-
/// 7|8|9
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
