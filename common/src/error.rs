use thiserror::Error;

use crate::games::tictactoe::{Piece, Seat};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid move: position {position} is out of range or already occupied")]
    InvalidMove { position: usize },

    #[error("out of turn: it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Seat, got: Seat },

    #[error("game already over")]
    GameOver,

    #[error("board layout must have {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("both players cannot use the same piece ({piece})")]
    SamePieces { piece: Piece },
}
