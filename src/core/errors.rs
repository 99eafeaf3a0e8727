use thiserror::Error;

/// Misuse of the engine API by its caller. None of these are produced by
/// ordinary play; they mean the front-end called in the wrong order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no levels loaded")]
    NoLevelsLoaded,

    #[error("level index {index} out of range for a pack of {len} levels")]
    LevelOutOfRange { index: usize, len: usize },

    #[error("level {current} has not been loaded; call load_level first")]
    LevelNotLoaded { current: usize },

    #[error("working grid has no player")]
    MissingPlayer,

    #[error("({dx}, {dy}) is not one of the four move directions")]
    InvalidDirection { dx: i32, dy: i32 },
}

/// Why a move left the grid untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveBlocked {
    #[error("Cannot walk into a wall")]
    Wall,

    #[error("Cannot move out of bounds")]
    OutOfBounds,

    #[error("Cannot push block")]
    BoxBlocked,
}
