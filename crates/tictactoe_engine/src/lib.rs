pub mod ai;
pub mod difficulty;
pub mod evaluation;
pub mod search;

pub use ai::ComputerPlayer;
pub use difficulty::{Difficulty, DifficultyError};
pub use evaluation::evaluate_position;
pub use search::{minimax, search, search_best_move, SearchResult, SearchStats};
