use tictactoe_engine::Difficulty;

/// Shell options fixed before the first menu is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Play every game at this level instead of asking
    pub difficulty: Option<Difficulty>,
}
