use std::path::Path;

use crate::core::{step, Direction, EngineError, GameUpdate, Grid, MoveOutcome};
use crate::level_pack::{LevelPack, LoadError};

/// The state of one player working through a level pack.
///
/// Navigation (`move_next_level`, `move_previous_level`) only changes the
/// level index. The working grid is replaced when `load_level` is called.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    pack: LevelPack,
    current_level: Option<usize>,
    working: Option<Working>,
    moves: u32,
    last_update: Option<GameUpdate>,
}

#[derive(Clone, Debug)]
struct Working {
    grid: Grid,
    /// Set once the level index moves away from the level this grid was loaded for.
    stale: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pack(pack: LevelPack) -> Self {
        let mut session = Self::new();
        session.install(pack);
        session
    }

    /// Replaces the pack with the one at `path`. Returns the new level index,
    /// which is None when the file holds no levels.
    ///
    /// On failure the session is left with no pack and no level selected.
    pub fn load_levels(&mut self, path: impl AsRef<Path>) -> Result<Option<usize>, LoadError> {
        self.clear();
        let pack = LevelPack::load(path)?;
        self.install(pack);
        Ok(self.current_level)
    }

    pub fn load_levels_from_str(&mut self, source: &str) -> Result<Option<usize>, LoadError> {
        self.clear();
        let pack = LevelPack::parse(source)?;
        self.install(pack);
        Ok(self.current_level)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn install(&mut self, pack: LevelPack) {
        self.current_level = (!pack.is_empty()).then_some(0);
        self.pack = pack;
    }

    /// Resets the working grid to the current level's template.
    pub fn load_level(&mut self) -> Result<(), EngineError> {
        let index = self.current_index()?;
        let level = self.pack.get(index).ok_or(EngineError::LevelOutOfRange {
            index,
            len: self.pack.len(),
        })?;
        let id = level.id;
        self.working = Some(Working {
            grid: level.grid.clone(),
            stale: false,
        });
        self.reset_counter();
        tracing::info!(level = index, ?id, "level loaded");
        Ok(())
    }

    pub fn move_next_level(&mut self) -> Result<usize, EngineError> {
        let index = self.current_index()?;
        let next = if index + 1 >= self.pack.len() { 0 } else { index + 1 };
        Ok(self.select(next))
    }

    pub fn move_previous_level(&mut self) -> Result<usize, EngineError> {
        let index = self.current_index()?;
        let previous = if index == 0 { self.pack.len() - 1 } else { index - 1 };
        Ok(self.select(previous))
    }

    /// Selects level `index` (zero-based) without loading it.
    pub fn move_to_level(&mut self, index: usize) -> Result<usize, EngineError> {
        self.current_index()?;
        if index >= self.pack.len() {
            return Err(EngineError::LevelOutOfRange {
                index,
                len: self.pack.len(),
            });
        }
        Ok(self.select(index))
    }

    fn select(&mut self, index: usize) -> usize {
        self.current_level = Some(index);
        if let Some(working) = self.working.as_mut() {
            working.stale = true;
        }
        self.reset_counter();
        index
    }

    fn reset_counter(&mut self) {
        self.moves = 0;
        self.last_update = None;
    }

    /// Moves the player by a screen-space unit vector: `dx` to the right,
    /// `dy` downward.
    pub fn do_move(&mut self, dx: i32, dy: i32) -> Result<MoveOutcome, EngineError> {
        let dir = Direction::from_dx_dy(dx, dy).ok_or(EngineError::InvalidDirection { dx, dy })?;
        self.apply_move(dir)
    }

    /// Applies one move to the working grid. When the move leaves no box off
    /// storage the session advances to the next level; the caller reloads.
    pub fn apply_move(&mut self, dir: Direction) -> Result<MoveOutcome, EngineError> {
        let index = self.current_index()?;
        let working = match self.working.as_mut() {
            Some(working) if !working.stale => working,
            _ => return Err(EngineError::LevelNotLoaded { current: index }),
        };

        let update = step(&mut working.grid, dir)?;
        let changed = matches!(update, GameUpdate::Moved(_));
        let completed = working.grid.is_complete();
        tracing::debug!(?dir, ?update, completed, "move");

        if changed {
            self.moves += 1;
        }
        self.last_update = Some(update);

        if completed {
            let next = self.move_next_level()?;
            tracing::info!(level = index, next, "level complete");
        }

        Ok(MoveOutcome { changed, completed })
    }

    fn current_index(&self) -> Result<usize, EngineError> {
        self.current_level.ok_or(EngineError::NoLevelsLoaded)
    }

    pub fn current_level(&self) -> Option<usize> {
        self.current_level
    }

    /// Header number of the current level, if it had one.
    pub fn level_id(&self) -> Option<i64> {
        self.pack.get(self.current_level?)?.id
    }

    pub fn level_count(&self) -> usize {
        self.pack.len()
    }

    /// Rows in the current level, or 0 when no level is selected.
    pub fn row_count(&self) -> usize {
        self.current_level
            .and_then(|index| self.pack.get(index))
            .map_or(0, |level| level.grid.row_count())
    }

    /// The working grid, for drawing.
    pub fn grid(&self) -> Option<&Grid> {
        self.working.as_ref().map(|w| &w.grid)
    }

    /// Moves that changed the grid since the level was loaded or selected.
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Result of the most recent move, cleared on load and navigation.
    pub fn last_update(&self) -> Option<&GameUpdate> {
        self.last_update.as_ref()
    }

    pub fn pack(&self) -> &LevelPack {
        &self.pack
    }
}
