// Box-pushing puzzle engine: level packs, a per-player session and the move rules.
// Tiles: '#' wall, '@' player, '$' box, '.' storage, '*' box on storage, '+' player on storage, ' ' floor.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod json_export;
pub mod level_pack;
pub mod models;
pub mod session;

#[cfg(test)]
mod test;

pub use crate::core::{Cell, Direction, EngineError, Grid, MoveOutcome};
pub use crate::level_pack::{Level, LevelPack, LoadError};
pub use crate::session::GameSession;
