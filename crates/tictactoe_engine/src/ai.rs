use tictactoe_core::{Board, Move};

use crate::difficulty::Difficulty;
use crate::search::search_best_move;

const MIN_DEPTH: u8 = 0;
const MAX_DEPTH: u8 = 9;  // nine plies fill the board

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerPlayer {
    max_depth: u8,
}

impl ComputerPlayer {
    pub fn new(depth: u8) -> Self {
        ComputerPlayer {
            max_depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
        }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.max_depth())
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Picks the computer's reply. The caller commits it with
    /// `Board::make_move`; the board itself comes back unchanged.
    ///
    /// Returns `None` once the game is over, so a finished board is never searched.
    pub fn get_move(&self, board: &mut Board) -> Option<Move> {
        let status = board.status();
        if status.is_terminal() {
            log::warn!("asked for a move on a finished game ({:?})", status);
            return None;
        }

        let mv = search_best_move(board, self.max_depth)?;
        log::info!(
            "computer plays ({}, {}) at depth {}",
            mv.to.row,
            mv.to.col,
            self.max_depth
        );
        Some(mv)
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}
