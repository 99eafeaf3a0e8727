use crate::core::{Cell, Direction, EngineError, GameChangeType, GameUpdate, Grid, MoveBlocked};

/// Resolves one player move against `grid` in place.
///
/// Looks at most two cells ahead of the player: a free cell is walked into,
/// a box with a free cell behind it is pushed, anything else blocks. The
/// outcome is decided before any cell is written.
pub fn step(grid: &mut Grid, dir: Direction) -> Result<GameUpdate, EngineError> {
    let player = grid.find_player().ok_or(EngineError::MissingPlayer)?;
    let d = dir.delta();

    let next = player + d;
    let Some(adjacent) = grid.get(next) else {
        return Ok(GameUpdate::Blocked(MoveBlocked::OutOfBounds));
    };
    let beyond_pos = player + d * 2;
    let beyond = grid.get(beyond_pos);
    let current = grid.get(player).ok_or(EngineError::MissingPlayer)?;

    if let Some(entered) = adjacent.with_player() {
        grid.set(player, current.vacated());
        grid.set(next, entered);
        return Ok(GameUpdate::Moved(GameChangeType::PlayerMove));
    }

    if !adjacent.is_box() {
        return Ok(GameUpdate::Blocked(MoveBlocked::Wall));
    }

    let pushed = beyond.and_then(Cell::with_box);
    let entered = adjacent.vacated().with_player();
    let (Some(landed), Some(entered)) = (pushed, entered) else {
        return Ok(GameUpdate::Blocked(MoveBlocked::BoxBlocked));
    };

    grid.set(beyond_pos, landed);
    grid.set(next, entered);
    grid.set(player, current.vacated());

    Ok(GameUpdate::Moved(GameChangeType::PlayerAndBoxMove))
}
