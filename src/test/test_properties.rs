use proptest::prelude::*;

use crate::core::{step, Cell, Direction, GameUpdate, Grid};
use crate::level_pack::LevelPack;
use crate::session::GameSession;

const BUNDLED: &str = include_str!("../../levels/boxban_levels.txt");

const RAGGED: &str = r#"
#####
#@$ .#
# $
#.  $ .#
##
"#;

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::all().to_vec())
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    let mut grids: Vec<Grid> = LevelPack::parse(BUNDLED)
        .unwrap()
        .levels()
        .iter()
        .map(|level| level.grid.clone())
        .collect();
    grids.push(LevelPack::parse(RAGGED).unwrap().levels()[0].grid.clone());
    prop::sample::select(grids)
}

fn walls(grid: &Grid) -> Vec<bool> {
    grid.rows()
        .iter()
        .flatten()
        .map(|&c| c == Cell::Wall)
        .collect()
}

proptest! {
    #[test]
    fn moves_preserve_pieces(grid in arb_grid(), moves in prop::collection::vec(arb_direction(), 0..80)) {
        let mut grid = grid;
        let boxes = grid.count(Cell::is_box);
        let storage = grid.count(Cell::has_storage);
        let layout = walls(&grid);
        let shape: Vec<usize> = grid.rows().iter().map(Vec::len).collect();

        for dir in moves {
            let before = grid.clone();
            let update = step(&mut grid, dir).unwrap();

            prop_assert_eq!(grid.count(Cell::is_player), 1);
            prop_assert_eq!(grid.count(Cell::is_box), boxes);
            prop_assert_eq!(grid.count(Cell::has_storage), storage);
            prop_assert_eq!(&walls(&grid), &layout);
            if let GameUpdate::Blocked(_) = update {
                prop_assert_eq!(&grid, &before);
            } else {
                prop_assert_ne!(&grid, &before);
            }
        }

        let after: Vec<usize> = grid.rows().iter().map(Vec::len).collect();
        prop_assert_eq!(after, shape);
    }

    #[test]
    fn session_counts_changed_moves(moves in prop::collection::vec(arb_direction(), 0..40)) {
        let mut session = GameSession::new();
        session.load_levels_from_str(BUNDLED).unwrap();
        session.move_to_level(5).unwrap();
        session.load_level().unwrap();

        let mut changed = 0;
        for dir in moves {
            let outcome = session.apply_move(dir).unwrap();
            if outcome.changed {
                changed += 1;
            }
            if outcome.completed {
                break;
            }
            prop_assert_eq!(session.move_count(), changed);
        }
    }
}
