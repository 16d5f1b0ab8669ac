use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// Search depth cap per difficulty level. Every level can see an immediate
// win or threat; only Hard looks far enough ahead to never lose.
pub const EASY_DEPTH: u8 = 2;
pub const MEDIUM_DEPTH: u8 = 4;
pub const HARD_DEPTH: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    #[error("unknown difficulty level {0} (expected 1, 2 or 3)")]
    UnknownLevel(i64),

    #[error("difficulty must be a level number, got '{0}'")]
    NotANumber(String),
}

impl Difficulty {
    /// Every level, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Maps the menu's level number (1, 2, 3) to a difficulty
    pub fn from_level(level: i64) -> Result<Self, DifficultyError> {
        Self::ALL
            .into_iter()
            .find(|difficulty| i64::from(difficulty.level()) == level)
            .ok_or(DifficultyError::UnknownLevel(level))
    }

    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn max_depth(self) -> u8 {
        match self {
            Difficulty::Easy => EASY_DEPTH,
            Difficulty::Medium => MEDIUM_DEPTH,
            Difficulty::Hard => HARD_DEPTH,
        }
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = DifficultyError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::from_level(level)
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s
            .trim()
            .parse::<i64>()
            .map_err(|_| DifficultyError::NotANumber(s.trim().to_string()))?;
        Self::from_level(level)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_table_scales_with_level() {
        let depths: Vec<(u8, u8)> = Difficulty::ALL
            .iter()
            .map(|d| (d.level(), d.max_depth()))
            .collect();
        assert_eq!(depths, vec![(1, 2), (2, 4), (3, 6)]);
    }

    #[test]
    fn from_level_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(difficulty.level() as i64), Ok(difficulty));
        }
    }

    #[test]
    fn rejects_unknown_levels() {
        assert_eq!(Difficulty::from_level(0), Err(DifficultyError::UnknownLevel(0)));
        assert_eq!(Difficulty::try_from(4i64), Err(DifficultyError::UnknownLevel(4)));
        assert_eq!(Difficulty::from_level(-1), Err(DifficultyError::UnknownLevel(-1)));
    }

    #[test]
    fn parses_menu_text() {
        assert_eq!(" 2 ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(
            "hard".parse::<Difficulty>(),
            Err(DifficultyError::NotANumber("hard".to_string()))
        );
        assert_eq!("7".parse::<Difficulty>(), Err(DifficultyError::UnknownLevel(7)));
    }
}
