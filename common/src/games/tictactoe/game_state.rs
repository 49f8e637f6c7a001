use crate::error::GameError;
use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::player::PlayerInfo;
use super::types::{GameStatus, Move, Piece, Seat};

#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    players: [PlayerInfo; 2],
    current_seat: Seat,
    status: GameStatus,
    last_move: Option<Move>,
    history: Vec<Move>,
}

impl TicTacToeGameState {
    /// `first` moves first regardless of which piece it holds.
    pub fn new(first: PlayerInfo, second: PlayerInfo) -> Result<Self, GameError> {
        if first.piece == second.piece {
            return Err(GameError::SamePieces { piece: first.piece });
        }

        Ok(Self {
            board: Board::new(),
            players: [first, second],
            current_seat: Seat::First,
            status: GameStatus::InProgress,
            last_move: None,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn current_seat(&self) -> Seat {
        self.current_seat
    }

    pub fn current_player(&self) -> &PlayerInfo {
        self.player(self.current_seat)
    }

    pub fn player(&self, seat: Seat) -> &PlayerInfo {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[PlayerInfo; 2] {
        &self.players
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn seat_for_piece(&self, piece: Piece) -> Seat {
        if self.players[0].piece == piece {
            Seat::First
        } else {
            Seat::Second
        }
    }

    pub fn winner(&self) -> Option<&PlayerInfo> {
        let piece = self.status.winning_piece()?;
        Some(self.player(self.seat_for_piece(piece)))
    }

    /// Commits the seat's piece at `position`. Turn order is checked before
    /// the cell, so an out-of-turn request never reports `InvalidMove`.
    pub fn place_mark(&mut self, seat: Seat, position: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        if seat != self.current_seat {
            return Err(GameError::OutOfTurn {
                expected: self.current_seat,
                got: seat,
            });
        }

        let piece = self.player(seat).piece;
        self.board.apply_move(position, piece)?;

        let mv = Move::new(position, piece);
        self.last_move = Some(mv);
        self.history.push(mv);
        crate::log!("{} ({}) played {}", self.player(seat).name, seat, position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        let seat = self.seat_for_piece(mv.piece());
        self.place_mark(seat, mv.position())
    }

    /// Move for the seat to act when it is a robot, using that robot's
    /// strategy; `None` for humans and finished games.
    pub fn calculate_bot_move(&self, rng: &mut SessionRng) -> Option<Move> {
        if self.is_game_over() {
            return None;
        }
        let bot_type = self.current_player().bot_type()?;
        calculate_move(bot_type, BotInput::from_game_state(self), rng)
    }

    fn switch_turn(&mut self) {
        self.current_seat = self.current_seat.other();
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = self.board.winning_piece() {
            self.status = GameStatus::won_by(winner);
            crate::log!("Game over, {} wins", winner);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            crate::log!("Game over, draw");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::BotType;

    fn human_vs_robot() -> TicTacToeGameState {
        TicTacToeGameState::new(
            PlayerInfo::human("Joe", Piece::X),
            PlayerInfo::robot("Computer", Piece::O, 2),
        )
        .unwrap()
    }

    #[test]
    fn test_same_pieces_rejected() {
        let result = TicTacToeGameState::new(
            PlayerInfo::human("A", Piece::O),
            PlayerInfo::human("B", Piece::O),
        );
        assert_eq!(result.unwrap_err(), GameError::SamePieces { piece: Piece::O });
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = human_vs_robot();
        assert_eq!(state.current_seat(), Seat::First);

        assert_eq!(state.place_mark(Seat::First, 4), Ok(GameStatus::InProgress));
        assert_eq!(state.current_seat(), Seat::Second);
        assert_eq!(state.last_move(), Some(Move::new(4, Piece::X)));

        state.place_mark(Seat::Second, 0).unwrap();
        assert_eq!(state.current_seat(), Seat::First);
        assert_eq!(state.history(), &[Move::new(4, Piece::X), Move::new(0, Piece::O)]);
    }

    #[test]
    fn test_out_of_turn_is_distinct_from_invalid_move() {
        let mut state = human_vs_robot();
        state.place_mark(Seat::First, 4).unwrap();

        // Occupied and out of turn: turn order wins.
        assert_eq!(
            state.place_mark(Seat::First, 4),
            Err(GameError::OutOfTurn { expected: Seat::Second, got: Seat::First })
        );
        assert_eq!(
            state.place_mark(Seat::Second, 4),
            Err(GameError::InvalidMove { position: 4 })
        );
        assert_eq!(
            state.place_mark(Seat::Second, 9),
            Err(GameError::InvalidMove { position: 9 })
        );
        assert_eq!(state.current_seat(), Seat::Second);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_apply_move_resolves_seat_by_piece() {
        let mut state = human_vs_robot();
        assert!(matches!(
            state.apply_move(Move::new(0, Piece::O)),
            Err(GameError::OutOfTurn { .. })
        ));
        state.apply_move(Move::new(0, Piece::X)).unwrap();
        state.apply_move(Move::new(3, Piece::O)).unwrap();
        assert_eq!(state.board().occupied_count(), 2);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = human_vs_robot();
        for (seat, position) in [(Seat::First, 0), (Seat::Second, 3), (Seat::First, 1), (Seat::Second, 4)] {
            state.place_mark(seat, position).unwrap();
        }
        assert_eq!(state.place_mark(Seat::First, 2), Ok(GameStatus::XWon));
        assert!(state.is_game_over());
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("Joe"));
        assert_eq!(state.place_mark(Seat::Second, 5), Err(GameError::GameOver));
        assert_eq!(state.current_seat(), Seat::First);
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = human_vs_robot();
        for position in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(state.current_seat(), position).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.winner().is_none());
    }

    #[test]
    fn test_second_seat_may_hold_x() {
        let mut state = TicTacToeGameState::new(
            PlayerInfo::human("Joe", Piece::O),
            PlayerInfo::robot("Computer", Piece::X, 2),
        )
        .unwrap();
        state.place_mark(Seat::First, 4).unwrap();
        assert_eq!(state.board().get(4), Some(crate::games::tictactoe::Mark::O));
        assert_eq!(state.seat_for_piece(Piece::X), Seat::Second);
    }

    #[test]
    fn test_bot_move_only_for_robot_seat() {
        let mut state = human_vs_robot();
        let mut rng = SessionRng::new(1);
        assert_eq!(state.calculate_bot_move(&mut rng), None);

        state.place_mark(Seat::First, 0).unwrap();
        let mv = state.calculate_bot_move(&mut rng).unwrap();
        assert_eq!(mv.piece(), Piece::O);
        state.apply_move(mv).unwrap();
    }

    #[test]
    fn test_robot_blocks_human_threat() {
        let mut state = human_vs_robot();
        let mut rng = SessionRng::new(1);
        state.place_mark(Seat::First, 0).unwrap();
        state.place_mark(Seat::Second, 4).unwrap();
        state.place_mark(Seat::First, 1).unwrap();

        let mv = state.calculate_bot_move(&mut rng).unwrap();
        assert_eq!(mv, Move::new(2, Piece::O));
    }

    #[test]
    fn test_robot_vs_robot_game_completes() {
        let mut state = TicTacToeGameState::new(
            PlayerInfo::robot("Alpha", Piece::X, 3),
            PlayerInfo::robot("Beta", Piece::O, 3),
        )
        .unwrap();
        let mut rng = SessionRng::new(77);

        while !state.is_game_over() {
            let mv = state.calculate_bot_move(&mut rng).unwrap();
            state.apply_move(mv).unwrap();
        }
        assert!(state.history().len() >= 5);
        assert!(state.board().is_terminal());
    }

    #[test]
    fn test_random_robot_plays_legal_moves() {
        let mut state = TicTacToeGameState::new(
            PlayerInfo::robot("Minimax", Piece::X, 2),
            PlayerInfo::robot("Dice", Piece::O, 2).with_bot_type(BotType::Random),
        )
        .unwrap();
        let mut rng = SessionRng::new(5);

        while !state.is_game_over() {
            let mv = state.calculate_bot_move(&mut rng).unwrap();
            assert!(state.board().is_legal_move(mv.position()));
            state.apply_move(mv).unwrap();
        }
        assert_eq!(state.calculate_bot_move(&mut rng), None);
    }
}
