use std::fmt;
use std::ops::{Add, Mul};

use crate::core::{Cell, Direction, Grid, Vec2};

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Storage => '.',
            Cell::Box => '$',
            Cell::BoxOnStorage => '*',
            Cell::Player => '@',
            Cell::PlayerOnStorage => '+',
        }
    }

    pub fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            ' ' => Some(Cell::Empty),
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Storage),
            '$' => Some(Cell::Box),
            '*' => Some(Cell::BoxOnStorage),
            '@' => Some(Cell::Player),
            '+' => Some(Cell::PlayerOnStorage),
            _ => None,
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, Cell::Player | Cell::PlayerOnStorage)
    }

    pub fn is_box(self) -> bool {
        matches!(self, Cell::Box | Cell::BoxOnStorage)
    }

    pub fn has_storage(self) -> bool {
        matches!(
            self,
            Cell::Storage | Cell::BoxOnStorage | Cell::PlayerOnStorage
        )
    }

    /// The cell after the player steps onto it, if the player may.
    pub fn with_player(self) -> Option<Cell> {
        match self {
            Cell::Empty => Some(Cell::Player),
            Cell::Storage => Some(Cell::PlayerOnStorage),
            Cell::Wall
            | Cell::Box
            | Cell::BoxOnStorage
            | Cell::Player
            | Cell::PlayerOnStorage => None,
        }
    }

    /// The cell after a box is pushed onto it, if a box may land here.
    pub fn with_box(self) -> Option<Cell> {
        match self {
            Cell::Empty => Some(Cell::Box),
            Cell::Storage => Some(Cell::BoxOnStorage),
            Cell::Wall
            | Cell::Box
            | Cell::BoxOnStorage
            | Cell::Player
            | Cell::PlayerOnStorage => None,
        }
    }

    /// The floor left behind once the occupant (player or box) moves off.
    pub fn vacated(self) -> Cell {
        match self {
            Cell::Player | Cell::Box => Cell::Empty,
            Cell::PlayerOnStorage | Cell::BoxOnStorage => Cell::Storage,
            Cell::Empty | Cell::Wall | Cell::Storage => self,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + other.i,
            j: self.j + other.j,
        }
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, k: i32) -> Vec2 {
        Vec2 {
            i: self.i * k,
            j: self.j * k,
        }
    }
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    /// Screen-style `(dx, dy)`: x grows to the right, y grows downward.
    /// Returns None for anything but the four unit vectors.
    pub fn from_dx_dy(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Grid { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Bounds are checked against the addressed row only.
    pub fn get(&self, pos: Vec2) -> Option<Cell> {
        let i = usize::try_from(pos.i).ok()?;
        let j = usize::try_from(pos.j).ok()?;
        self.rows.get(i)?.get(j).copied()
    }

    /// Panics when `pos` is outside the grid; callers write only to
    /// positions they have already read through [`Grid::get`].
    pub(crate) fn set(&mut self, pos: Vec2, cell: Cell) {
        self.rows[pos.i as usize][pos.j as usize] = cell;
    }

    pub fn entries(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &c)| {
                (
                    Vec2 {
                        i: i as i32,
                        j: j as i32,
                    },
                    c,
                )
            })
        })
    }

    pub fn find_player(&self) -> Option<Vec2> {
        self.entries()
            .find_map(|(pos, c)| c.is_player().then_some(pos))
    }

    pub fn count<F: Fn(Cell) -> bool>(&self, pred: F) -> usize {
        self.rows.iter().flatten().filter(|&&c| pred(c)).count()
    }

    /// Every box sits on storage.
    pub fn is_complete(&self) -> bool {
        !self.rows.iter().flatten().any(|&c| c == Cell::Box)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
        }
        Ok(())
    }
}
