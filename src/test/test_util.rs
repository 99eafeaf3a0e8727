pub use dissimilar::diff as __diff;
use crate::core::{step, Direction, GameChangeType, GameUpdate, Grid, MoveBlocked};
use crate::level_pack::LevelPack;

macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

/// Parses a single headerless level, as written inline in tests.
pub fn parse_grid(level: &str) -> Grid {
    let pack = LevelPack::parse(level).expect("test level parses");
    assert_eq!(pack.len(), 1, "expected exactly one level in {:?}", level);
    pack.levels()[0].grid.clone()
}

pub struct GameTestState {
    pub grid: Grid,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        Self {
            grid: parse_grid(level),
        }
    }

    pub fn game_to_string(&self) -> String {
        self.grid.to_string()
    }

    pub fn assert_move(&mut self, direction: Direction) -> GameChangeType {
        let update = step(&mut self.grid, direction).expect("grid has a player");
        let GameUpdate::Moved(change_type) = update else {
            panic!("Expected a move {:?}, got {:?}, in map\n{}", direction, update, self.game_to_string());
        };
        change_type
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    /// Asserts the move is refused and leaves every cell as it was.
    pub fn assert_blocked(&mut self, direction: Direction) -> MoveBlocked {
        let before = self.grid.clone();
        let update = step(&mut self.grid, direction).expect("grid has a player");
        let GameUpdate::Blocked(reason) = update else {
            panic!("Expected {:?} to be blocked, got {:?}, in map\n{}", direction, update, self.game_to_string());
        };
        assert_eq!(before, self.grid, "blocked move changed the grid");
        reason
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str());
    }
}

pub fn directions(moves: &str) -> Vec<Direction> {
    moves
        .chars()
        .map(|c| match c {
            'U' => Direction::Up,
            'D' => Direction::Down,
            'L' => Direction::Left,
            'R' => Direction::Right,
            other => panic!("bad move {:?}", other),
        })
        .collect()
}
