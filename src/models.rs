use crate::core::{GameUpdate, Grid};
use crate::session::GameSession;

pub struct GameRenderState<'a> {
    pub grid: Option<&'a Grid>,
    /// One-based, for display.
    pub level: usize,
    pub level_count: usize,
    pub moves: u32,
    pub last_update: Option<&'a GameUpdate>,
    /// Set for the frame after a level was solved.
    pub solved_level: Option<usize>,
}

impl<'a> GameRenderState<'a> {
    pub fn from_session(session: &'a GameSession, solved_level: Option<usize>) -> Self {
        GameRenderState {
            grid: session.grid(),
            level: session.current_level().map_or(0, |i| i + 1),
            level_count: session.level_count(),
            moves: session.move_count(),
            last_update: session.last_update(),
            solved_level,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Level: {}/{}  Moves: {}",
            self.level, self.level_count, self.moves
        )
    }
}
