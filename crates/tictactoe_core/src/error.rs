use thiserror::Error;

/// Rejected human move; the board is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },

    #[error("({row}, {col}) is already taken")]
    Occupied { row: u8, col: u8 },
}
