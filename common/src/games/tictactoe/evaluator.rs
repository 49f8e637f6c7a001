use super::board::{Board, LINES};
use super::types::{Mark, Piece};

/// Static scoring of a position from one side's point of view. Higher is
/// better for `perspective`; a won position is `f64::INFINITY`, a lost one
/// `f64::NEG_INFINITY`.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, perspective: Piece) -> f64;
}

/// Counts marks on lines that are still winnable: each row, column and
/// diagonal contributes its number of `piece` marks unless it already holds
/// an opposing mark. The score is own potential minus opponent potential.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinePotentialEvaluator;

impl LinePotentialEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn line_potential(board: &Board, piece: Piece) -> f64 {
        let own = Mark::from(piece);
        let opponent = Mark::from(piece.opponent());
        let cells = board.cells();

        LINES
            .iter()
            .filter(|line| line.iter().all(|&i| cells[i] != opponent))
            .map(|line| line.iter().filter(|&&i| cells[i] == own).count())
            .sum::<usize>() as f64
    }
}

impl Evaluator for LinePotentialEvaluator {
    fn evaluate(&self, board: &Board, perspective: Piece) -> f64 {
        // Draws are not special-cased; a full board scores 0 here.
        if let Some(winner) = board.winning_piece() {
            return if winner == perspective {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }

        Self::line_potential(board, perspective) - Self::line_potential(board, perspective.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let evaluator = LinePotentialEvaluator::new();
        assert_eq!(evaluator.evaluate(&Board::new(), Piece::X), 0.0);
    }

    #[test]
    fn test_center_mark_counts_on_four_lines() {
        let board = board(".../.X./...");
        assert_eq!(LinePotentialEvaluator::line_potential(&board, Piece::X), 4.0);
        assert_eq!(LinePotentialEvaluator::new().evaluate(&board, Piece::X), 4.0);
        assert_eq!(LinePotentialEvaluator::new().evaluate(&board, Piece::O), -4.0);
    }

    #[test]
    fn test_blocked_lines_contribute_nothing() {
        // X corner: row 0, col 0, main diagonal. O center blocks the diagonal.
        // O center: row 1, col 1, anti-diagonal still open; main diagonal blocked.
        let board = board("X../.O./...");
        assert_eq!(LinePotentialEvaluator::line_potential(&board, Piece::X), 2.0);
        assert_eq!(LinePotentialEvaluator::line_potential(&board, Piece::O), 3.0);
        assert_eq!(LinePotentialEvaluator::new().evaluate(&board, Piece::X), -1.0);
    }

    #[test]
    fn test_win_and_loss_are_infinite() {
        let evaluator = LinePotentialEvaluator::new();
        let board = board("OOO/XX./X..");
        assert_eq!(evaluator.evaluate(&board, Piece::O), f64::INFINITY);
        assert_eq!(evaluator.evaluate(&board, Piece::X), f64::NEG_INFINITY);
    }

    #[test]
    fn test_draw_is_finite_zero() {
        let evaluator = LinePotentialEvaluator::new();
        let board = board("XOX/XOO/OXX");
        assert!(board.is_draw());
        assert_eq!(evaluator.evaluate(&board, Piece::X), 0.0);
        assert_eq!(evaluator.evaluate(&board, Piece::O), 0.0);
    }

    #[test]
    fn test_non_terminal_score_is_finite() {
        let evaluator = LinePotentialEvaluator::new();
        let board = board("XX./O../...");
        assert!(evaluator.evaluate(&board, Piece::X).is_finite());
    }
}
