use std::fmt;

/// Contents of a single square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Computer,
}

/// One of the two sides taking turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn mark(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    /// Glyph used by the text shell: humans play X, the computer plays O
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_swaps_sides() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent(), Player::Human);
    }

    #[test]
    fn marks_round_trip_through_owner() {
        for player in [Player::Human, Player::Computer] {
            assert_eq!(Cell::from(player).owner(), Some(player));
        }
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn symbols_match_shell_glyphs() {
        assert_eq!(Cell::Human.symbol(), 'X');
        assert_eq!(Cell::Computer.symbol(), 'O');
        assert_eq!(Cell::Empty.symbol(), ' ');
        assert_eq!(Cell::default(), Cell::Empty);
    }
}
