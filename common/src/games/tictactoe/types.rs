use std::fmt;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Mark::X => Some(Piece::X),
            Mark::O => Some(Piece::O),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '_' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl From<Piece> for Mark {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::X => Mark::X,
            Piece::O => Mark::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The side a player (or a search node) moves for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    pub fn opponent(&self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Mark::from(*self).fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    position: usize,
    piece: Piece,
}

impl Move {
    pub fn new(position: usize, piece: Piece) -> Self {
        Self { position, piece }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.piece, self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn won_by(piece: Piece) -> Self {
        match piece {
            Piece::X => GameStatus::XWon,
            Piece::O => GameStatus::OWon,
        }
    }

    pub fn winning_piece(&self) -> Option<Piece> {
        match self {
            GameStatus::XWon => Some(Piece::X),
            GameStatus::OWon => Some(Piece::O),
            _ => None,
        }
    }
}

/// Turn slot in a two-player game; `First` moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(&self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::First => write!(f, "player 1"),
            Seat::Second => write!(f, "player 2"),
        }
    }
}
