use crate::core::MoveBlocked;

/// One square of a level, including whatever occupies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Storage,
    Box,
    BoxOnStorage,
    Player,
    PlayerOnStorage,
}

/// Row/column position. `i` is the row, `j` the column; either may go
/// negative while probing past the edge of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A level layout. Rows keep the length they had in the source text, so the
/// grid is not necessarily rectangular.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    pub(crate) rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    Moved(GameChangeType),
    Blocked(MoveBlocked),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

/// What a single move did to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The working grid was modified.
    pub changed: bool,
    /// No unstored box remains; the session has already advanced its level index.
    pub completed: bool,
}
