use std::io::{self, BufRead, Write};

use common::GameError;
use common::games::SessionRng;
use common::games::tictactoe::{GameStatus, Move, Piece, PlayerKind, TicTacToeGameState};
use common::log;
use thiserror::Error;

use crate::console_io::Console;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("robot {name} found no move on an unfinished board")]
    NoBotMove { name: String },
}

/// How a played session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Finished(GameStatus),
    InputClosed,
}

/// Drives one game: asks each seat for a move in turn, commits it and
/// redraws the board until the game is decided.
pub struct GameController<R, W> {
    console: Console<R, W>,
    state: TicTacToeGameState,
    rng: SessionRng,
}

impl<R: BufRead, W: Write> GameController<R, W> {
    pub fn new(console: Console<R, W>, state: TicTacToeGameState, rng: SessionRng) -> Self {
        Self { console, state, rng }
    }

    #[cfg(test)]
    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    #[cfg(test)]
    pub fn console(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    fn human_piece(&self) -> Option<Piece> {
        self.state
            .players()
            .iter()
            .find(|p| p.kind == PlayerKind::Human)
            .map(|p| p.piece)
    }

    pub fn run(&mut self) -> Result<Outcome, ConsoleError> {
        log!("Session seed {}", self.rng.seed());
        self.console.print_board(self.state.board(), self.human_piece())?;

        while !self.state.is_game_over() {
            let Some(mv) = self.next_move()? else {
                log!("Input closed before the game finished");
                return Ok(Outcome::InputClosed);
            };

            self.state.apply_move(mv)?;
            self.console.print_board(self.state.board(), self.human_piece())?;
        }

        self.show_end_of_game_message()?;
        Ok(Outcome::Finished(self.state.status()))
    }

    fn next_move(&mut self) -> Result<Option<Move>, ConsoleError> {
        let player = self.state.current_player().clone();

        match player.kind {
            PlayerKind::Robot { .. } => {
                let mv = self
                    .state
                    .calculate_bot_move(&mut self.rng)
                    .ok_or(ConsoleError::NoBotMove { name: player.name.clone() })?;
                self.console
                    .say(&format!("{} plays {}", player.name, mv.position()))?;
                Ok(Some(mv))
            }
            PlayerKind::Human => {
                self.console.print_index_guide()?;
                let position = self.console.read_position(self.state.board())?;
                Ok(position.map(|position| Move::new(position, player.piece)))
            }
        }
    }

    fn show_end_of_game_message(&mut self) -> io::Result<()> {
        let message = match self.state.winner() {
            Some(winner) => format!("Game Over! {} wins!", winner.name),
            None => "Game Over! It's a draw.".to_string(),
        };
        self.console.say(&message)
    }
}
