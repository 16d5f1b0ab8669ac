use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::{position::BOARD_SIZE, Cell, InvalidMove, Move, Player, Position};

const fn at(row: u8, col: u8) -> Position {
    Position { row, col }
}

/// The eight rows, columns and diagonals that win the game
pub const LINES: [[Position; 3]; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    ComputerWins,
    HumanWins,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    // Row-major, indexed by `Position::index`
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// An all-empty board, one per game
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Raw cell assignment. Performs no validation; the turn loop and the
    /// search are responsible for only writing to empty squares.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Cell::Empty);
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Empty squares in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |&pos| self.get(pos).is_empty())
    }

    /// Marks `player` has on the board
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == player.mark()).count()
    }

    /// Owner of the first completed line, scanning rows, then columns, then diagonals
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|[a, b, c]| {
            let owner = self.get(*a).owner()?;
            if self.get(*b) == owner.mark() && self.get(*c) == owner.mark() {
                Some(owner)
            } else {
                None
            }
        })
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(Player::Computer) => GameStatus::ComputerWins,
            Some(Player::Human) => GameStatus::HumanWins,
            None if !self.has_empty_cell() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        if !mv.is_valid(self) {
            return Err(InvalidMove::Occupied {
                row: mv.to.row,
                col: mv.to.col,
            });
        }

        self.set(mv.to, mv.player.mark());
        Ok(())
    }

    /// Commits a human move typed as raw coordinates
    pub fn apply_human_move(&mut self, row: i64, col: i64) -> Result<(), InvalidMove> {
        let pos = Position::from_coords(row, col).ok_or(InvalidMove::OutOfBounds { row, col })?;
        let result = self.make_move(Move::new(Player::Human, pos));
        if let Err(err) = &result {
            log::debug!("rejected human move: {}", err);
        }
        result
    }

    /// Places `player`'s mark on `pos` for the lifetime of the returned guard.
    /// The square is emptied again when the guard is dropped, whichever way
    /// the caller leaves its scope.
    pub fn speculate(&mut self, pos: Position, player: Player) -> Speculation<'_> {
        debug_assert!(self.get(pos).is_empty(), "speculating on occupied square {:?}", pos);
        self.set(pos, player.mark());
        Speculation { board: self, pos }
    }
}

/// A tentatively placed mark, retracted on drop
pub struct Speculation<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            let rendered: Vec<String> = row.iter().map(|cell| format!(" {} ", cell)).collect();
            writeln!(f, "{}", rendered.join("|"))?;
            if i + 1 < BOARD_SIZE {
                writeln!(f, "---|---|---")?;
            }
        }
        Ok(())
    }
}
