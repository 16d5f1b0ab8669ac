pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,  // 0-2, top to bottom
    pub col: u8,  // 0-2, left to right
}

impl Position {
    /// Every square in row-major order, the order the search enumerates moves in
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Checked construction from signed coordinates as typed by a player
    pub fn from_coords(row: i64, col: i64) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_off_board_coordinates() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(2, 2).is_some());
        assert!(Position::new(3, 0).is_none());
        assert!(Position::new(0, 3).is_none());
    }

    #[test]
    fn from_coords_rejects_negatives() {
        assert_eq!(Position::from_coords(-1, 0), None);
        assert_eq!(Position::from_coords(1, -2), None);
        assert_eq!(Position::from_coords(1, 2), Position::new(1, 2));
    }

    #[test]
    fn all_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert!(Position::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
