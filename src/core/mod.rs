mod errors;
mod model_helpers;
mod models;
mod update;

pub use errors::{EngineError, MoveBlocked};
pub use models::{Cell, Direction, GameChangeType, GameUpdate, Grid, MoveOutcome, Vec2};
pub use update::step;
