// Core tic-tac-toe game logic modules
pub mod board;
pub mod error;
pub mod player;
pub mod position;
pub mod moves;

// Re-export main types for convenience
pub use board::{Board, GameStatus, Speculation};
pub use error::InvalidMove;
pub use player::{Cell, Player};
pub use position::Position;
pub use moves::Move;
