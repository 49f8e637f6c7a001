use super::bot_controller::BotType;
use super::types::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    /// Looks `search_depth` plies ahead when `bot_type` is `Minimax`.
    Robot { search_depth: usize, bot_type: BotType },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: String,
    pub piece: Piece,
    pub kind: PlayerKind,
}

impl PlayerInfo {
    pub fn human(name: impl Into<String>, piece: Piece) -> Self {
        Self {
            name: name.into(),
            piece,
            kind: PlayerKind::Human,
        }
    }

    pub fn robot(name: impl Into<String>, piece: Piece, search_depth: usize) -> Self {
        Self {
            name: name.into(),
            piece,
            kind: PlayerKind::Robot {
                search_depth,
                bot_type: BotType::Minimax,
            },
        }
    }

    /// Switches a robot to another move strategy; humans are left as is.
    pub fn with_bot_type(mut self, bot_type: BotType) -> Self {
        if let PlayerKind::Robot { search_depth, .. } = self.kind {
            self.kind = PlayerKind::Robot { search_depth, bot_type };
        }
        self
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.kind, PlayerKind::Robot { .. })
    }

    pub fn search_depth(&self) -> Option<usize> {
        match self.kind {
            PlayerKind::Robot { search_depth, .. } => Some(search_depth),
            PlayerKind::Human => None,
        }
    }

    pub fn bot_type(&self) -> Option<BotType> {
        match self.kind {
            PlayerKind::Robot { bot_type, .. } => Some(bot_type),
            PlayerKind::Human => None,
        }
    }
}
