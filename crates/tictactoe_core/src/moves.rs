use crate::{Board, Player, Position};

/// A mark placed by one player on one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub to: Position,
}

impl Move {
    pub fn new(player: Player, to: Position) -> Self {
        Self { player, to }
    }

    pub fn is_valid(&self, board: &Board) -> bool {
        board.get(self.to).is_empty()
    }
}
