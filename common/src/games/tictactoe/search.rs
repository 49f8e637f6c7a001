use std::cmp::Ordering;

use crate::games::SessionRng;
use super::board::Board;
use super::evaluator::{Evaluator, LinePotentialEvaluator};
use super::types::{Move, Piece};

/// Which side of the minimax alternation a node plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The searching side's own move.
    Maximizing,
    /// The opponent's reply.
    Minimizing,
}

impl Role {
    pub fn flip(&self) -> Role {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }

    fn order(&self, a: f64, b: f64) -> Ordering {
        let ascending = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Role::Maximizing => ascending.reverse(),
            Role::Minimizing => ascending,
        }
    }
}

/// One ply of the game tree. A node owns its board snapshot and its
/// children; nothing points back at the parent, the chosen move travels up
/// as a return value instead.
#[derive(Debug)]
pub struct SearchNode {
    board: Board,
    piece: Piece,
    role: Role,
    children: Vec<SearchNode>,
    value: f64,
    origin: Option<Move>,
}

impl SearchNode {
    pub fn root(board: Board, piece: Piece) -> Self {
        Self {
            board,
            piece,
            role: Role::Maximizing,
            children: Vec::new(),
            value: 0.0,
            origin: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn children(&self) -> &[SearchNode] {
        &self.children
    }

    pub fn origin(&self) -> Option<Move> {
        self.origin
    }

    /// A forced win or loss has been seen at this node.
    pub fn is_game_ending(&self) -> bool {
        self.value.is_infinite()
    }

    /// One child per empty cell, in ascending position order. Each child
    /// gets its own board with this node's piece placed and moves next for
    /// the opponent.
    pub fn generate_children(&mut self) {
        self.children = self
            .board
            .empty_positions()
            .into_iter()
            .filter_map(|position| self.child(position))
            .collect();
    }

    fn child(&self, position: usize) -> Option<SearchNode> {
        let mut board = self.board.clone();
        board.apply_move(position, self.piece).ok()?;

        Some(SearchNode {
            board,
            piece: self.piece.opponent(),
            role: self.role.flip(),
            children: Vec::new(),
            value: 0.0,
            origin: Some(Move::new(position, self.piece)),
        })
    }

    /// Scores this node's board from the root side's perspective: a
    /// maximizing node moves for the root side, a minimizing node for its
    /// opponent.
    pub fn evaluate<E: Evaluator>(&mut self, evaluator: &E) {
        let perspective = match self.role {
            Role::Maximizing => self.piece,
            Role::Minimizing => self.piece.opponent(),
        };
        self.value = evaluator.evaluate(&self.board, perspective);
    }

    /// Expands `depth` plies below this node and returns the move leading
    /// to the best child. Expansion stops at a ply where some child is
    /// already a forced win or loss; the remaining siblings keep their
    /// static scores.
    pub fn find_best_move<E: Evaluator>(&mut self, depth: usize, evaluator: &E) -> Option<Move> {
        if depth == 0 {
            return None;
        }

        self.generate_children();
        for child in &mut self.children {
            child.evaluate(evaluator);
        }

        if !self.children.iter().any(SearchNode::is_game_ending) {
            for child in &mut self.children {
                child.find_best_move(depth - 1, evaluator);
            }
        }

        self.select_best_move()
    }

    /// Stable sort keeps generation order among equal values, so ties go to
    /// the lowest position.
    pub fn select_best_move(&mut self) -> Option<Move> {
        let role = self.role;
        self.children.sort_by(|a, b| role.order(a.value, b.value));

        let best = self.children.first()?;
        self.value = best.value;
        best.origin
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub value: f64,
}

/// Depth-limited minimax over [`SearchNode`]s. The evaluator is an owned
/// strategy value threaded through every node.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine<E: Evaluator = LinePotentialEvaluator> {
    evaluator: E,
}

impl<E: Evaluator> SearchEngine<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Deterministic part of the search. `None` when the board is already
    /// decided; a depth of zero is treated as one.
    pub fn search(&self, board: &Board, piece: Piece, depth: usize) -> Option<SearchOutcome> {
        if board.is_terminal() {
            crate::log!("Search requested on a finished board for {}", piece);
            return None;
        }

        let mut root = SearchNode::root(board.clone(), piece);
        let best_move = root.find_best_move(depth.max(1), &self.evaluator)?;

        Some(SearchOutcome {
            best_move,
            value: root.value(),
        })
    }

    /// Picks a move for `piece`. An empty board skips the search and opens
    /// on a uniformly random cell drawn from `rng`.
    pub fn choose_move(
        &self,
        board: &Board,
        piece: Piece,
        depth: usize,
        rng: &mut SessionRng,
    ) -> Option<Move> {
        if board.is_empty_board() {
            let position = rng.choose(&board.empty_positions())?;
            crate::log!("Random opening for {} at {}", piece, position);
            return Some(Move::new(position, piece));
        }

        let outcome = self.search(board, piece, depth)?;
        crate::log!(
            "Minimax ({} plies) chose {} with value {}",
            depth.max(1),
            outcome.best_move,
            outcome.value
        );
        Some(outcome.best_move)
    }
}
