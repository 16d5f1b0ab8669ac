use thiserror::Error;

use tictactoe_core::InvalidMove;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("computer chose an illegal move: {0}")]
    IllegalComputerMove(#[from] InvalidMove),

    #[error("computer found no move on an unfinished board")]
    NoComputerMove,
}

/// Player typed something the shell could not understand
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected a menu option, got '{0}'")]
    UnknownChoice(String),

    #[error("expected 'row column' or 'q', got '{0}'")]
    MalformedMove(String),
}
