use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use super::types::{Mark, Piece};
use super::win_detector::check_win;

pub const ROWS: usize = 3;
pub const COLUMNS: usize = 3;
pub const WINNING_LENGTH: usize = 3;
pub const CELL_COUNT: usize = ROWS * COLUMNS;

/// Rows, columns, then the two diagonals, as flat indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 grid stored row-major. Cloning yields a fully independent copy,
/// which is what lets every search branch mutate its own board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    /// Raw write used to set up positions; bypasses the emptiness check
    /// that `apply_move` enforces.
    pub fn set(&mut self, position: usize, mark: Mark) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(GameError::InvalidMove { position })?;
        *cell = mark;
        Ok(())
    }

    pub fn is_legal_move(&self, position: usize) -> bool {
        self.get(position) == Some(Mark::Empty)
    }

    pub fn apply_move(&mut self, position: usize, piece: Piece) -> Result<(), GameError> {
        if !self.is_legal_move(position) {
            return Err(GameError::InvalidMove { position });
        }

        self.cells[position] = Mark::from(piece);
        Ok(())
    }

    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|mark| !mark.is_empty()).count()
    }

    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(Mark::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    pub fn winning_piece(&self) -> Option<Piece> {
        check_win(&self.cells)
    }

    pub fn has_winner(&self) -> bool {
        self.winning_piece().is_some()
    }

    pub fn is_draw(&self) -> bool {
        !self.has_winner() && self.is_full()
    }

    pub fn is_terminal(&self) -> bool {
        self.has_winner() || self.is_draw()
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Accepts nine cells of `X`, `O` or `.`; whitespace, `|` and `/` are
    /// ignored so both `"XO./.X./..O"` and multi-line layouts parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(GameError::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (position, &character) in chars.iter().enumerate() {
            cells[position] = Mark::from_char(character).ok_or_else(|| {
                GameError::InvalidCellCharacter {
                    character,
                    position,
                    context: s.to_string(),
                }
            })?;
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(COLUMNS) {
            let line: Vec<String> = row.iter().map(Mark::to_string).collect();
            writeln!(f, "{}", line.join("  "))?;
        }
        Ok(())
    }
}
