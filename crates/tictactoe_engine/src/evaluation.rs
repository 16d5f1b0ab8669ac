use tictactoe_core::{Board, Player};

// Static scores from the computer's point of view
pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const NEUTRAL_SCORE: i32 = 0;

/// Scores a position for the computer: +10 if it owns a full line,
/// -10 if the human does, 0 otherwise.
///
/// Legal play stops as soon as a line completes, so at most one side can
/// own a line here.
pub fn evaluate_position(board: &Board) -> i32 {
    match board.winner() {
        Some(Player::Computer) => WIN_SCORE,
        Some(Player::Human) => LOSS_SCORE,
        None => NEUTRAL_SCORE,
    }
}
