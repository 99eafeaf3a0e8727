use boxban::core::{step, Direction};
use boxban::level_pack::LevelPack;
use boxban::session::GameSession;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const BUNDLED: &str = include_str!("../levels/boxban_levels.txt");

const PUZZLES: &[(&str, usize, &str)] = &[
    ("level_1", 1, "RDDLRUULDUULLDDR"),
    ("level_3", 3, "RUULLLULDRRRRDDLURULLLDDLLLUURRDRDLUUURDD"),
    ("level_5", 5, "LURLLDRDRDRRUULLDLUDDLLUR"),
];

fn directions(moves: &str) -> Vec<Direction> {
    moves
        .chars()
        .filter_map(|c| match c {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        })
        .collect()
}

pub fn bench_parse_pack(c: &mut Criterion) {
    c.bench_function("parse_bundled_pack", |b| {
        b.iter(|| LevelPack::parse(black_box(BUNDLED)).unwrap())
    });
}

pub fn bench_solve_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_level");
    let pack = LevelPack::parse(BUNDLED).unwrap();

    for &(name, index, solution) in PUZZLES {
        let moves = directions(solution);
        group.bench_with_input(BenchmarkId::new("session", name), &moves, |b, moves| {
            b.iter_with_setup(
                || {
                    let mut session = GameSession::with_pack(pack.clone());
                    session.move_to_level(index).unwrap();
                    session.load_level().unwrap();
                    session
                },
                |mut session| {
                    for &dir in moves {
                        black_box(session.apply_move(dir).unwrap());
                    }
                },
            )
        });
        group.bench_with_input(BenchmarkId::new("step", name), &moves, |b, moves| {
            let template = pack.get(index).unwrap().grid.clone();
            b.iter_with_setup(
                || template.clone(),
                |mut grid| {
                    for &dir in moves {
                        black_box(step(&mut grid, dir).unwrap());
                    }
                },
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_pack, bench_solve_level);
criterion_main!(benches);
