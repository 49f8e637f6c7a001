mod board;
mod bot_controller;
mod evaluator;
mod game_state;
mod player;
mod search;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, COLUMNS, LINES, ROWS, WINNING_LENGTH};
pub use bot_controller::{BotInput, BotType, DEFAULT_SEARCH_DEPTH, calculate_minimax_move, calculate_move};
pub use evaluator::{Evaluator, LinePotentialEvaluator};
pub use game_state::TicTacToeGameState;
pub use player::{PlayerInfo, PlayerKind};
pub use search::{Role, SearchEngine, SearchNode, SearchOutcome};
pub use types::{GameStatus, Mark, Move, Piece, Seat};
pub use win_detector::check_win;
