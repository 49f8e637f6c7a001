use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::evaluator::LinePotentialEvaluator;
use super::game_state::TicTacToeGameState;
use super::search::SearchEngine;
use super::types::{Move, Piece};

pub const DEFAULT_SEARCH_DEPTH: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    /// Any free cell, uniformly.
    Random,
    #[default]
    Minimax,
}

pub struct BotInput {
    pub board: Board,
    pub piece: Piece,
    pub search_depth: usize,
}

impl BotInput {
    /// Input for whoever is to move; a human seat gets the default depth.
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        let player = state.current_player();
        Self {
            board: state.board().clone(),
            piece: player.piece,
            search_depth: player.search_depth().unwrap_or(DEFAULT_SEARCH_DEPTH),
        }
    }
}

pub fn calculate_move(bot_type: BotType, input: BotInput, rng: &mut SessionRng) -> Option<Move> {
    match bot_type {
        BotType::Random => calculate_random_move(&input, rng),
        BotType::Minimax => calculate_minimax_move(&input, rng),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Move> {
    if input.board.is_terminal() {
        return None;
    }
    let position = rng.choose(&input.board.empty_positions())?;
    Some(Move::new(position, input.piece))
}

pub fn calculate_minimax_move(input: &BotInput, rng: &mut SessionRng) -> Option<Move> {
    SearchEngine::new(LinePotentialEvaluator::new()).choose_move(
        &input.board,
        input.piece,
        input.search_depth,
        rng,
    )
}
