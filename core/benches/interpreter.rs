use criterion::{Criterion, criterion_group, criterion_main};
use fogsweeper_core::*;
use std::hint::black_box;

const SEED: &str = "10 10 12  0 0  0 9  9 0  9 9  4 4  4 5  5 4  5 5  2 7  7 2  3 8  8 3";

fn full_game_lines() -> Vec<String> {
    let seed = Seed::parse(SEED).unwrap();
    let mut lines = vec!["help".to_string(), "nofog".to_string()];
    for row in 0..seed.rows {
        for col in 0..seed.cols {
            if seed.mines.contains(&(row, col)) {
                lines.push(format!("mark {row} {col}"));
            } else {
                lines.push(format!("r {row} {col}"));
            }
        }
    }
    lines.push("foo 3 3".to_string());
    lines.push("guess 11 2".to_string());
    lines
}

fn bench_process(c: &mut Criterion) {
    let seed = Seed::parse(SEED).unwrap();
    let lines = full_game_lines();

    c.bench_function("parse_seed", |b| b.iter(|| Seed::parse(black_box(SEED))));

    c.bench_function("process_full_game", |b| {
        b.iter(|| {
            let mut model = seed.clone().into_model(ModelOptions::default()).unwrap();
            for line in &lines {
                black_box(CommandInterpreter.process(line, &mut model));
                model.toggle_fog(false);
            }
            model.is_won()
        })
    });

    c.bench_function("adjacency_scan", |b| {
        let model = seed.clone().into_model(ModelOptions::default()).unwrap();
        b.iter(|| {
            let mut total = 0u32;
            for row in -1..=10 {
                for col in -1..=10 {
                    total += u32::from(model.adjacent_mine_count(black_box(row), col));
                }
            }
            total
        })
    });
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
