use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_connections::core::{GroupDef, PuzzleDef, PuzzleEngine};
use tui_connections::types::GroupColor;

fn fixture() -> PuzzleDef {
    PuzzleDef {
        number: 1,
        title: "Bench".into(),
        groups: vec![
            GroupDef::new("A", GroupColor::Green, ["A1", "A2", "A3", "A4"]),
            GroupDef::new("B", GroupColor::Yellow, ["B1", "B2", "B3", "B4"]),
            GroupDef::new("C", GroupColor::Orange, ["C1", "C2", "C3", "C4"]),
            GroupDef::new("D", GroupColor::Crimson, ["D1", "D2", "D3", "D4"]),
        ],
    }
}

fn bench_construction(c: &mut Criterion) {
    let def = fixture();

    c.bench_function("engine_new", |b| {
        b.iter(|| PuzzleEngine::new(black_box(&def), black_box(12345)).unwrap())
    });
}

fn bench_toggle(c: &mut Criterion) {
    let def = fixture();
    let mut game = PuzzleEngine::new(&def, 12345).unwrap();

    c.bench_function("toggle_select_pair", |b| {
        b.iter(|| {
            game.toggle_select(black_box("A1"));
            game.toggle_select(black_box("A1"));
        })
    });
}

fn bench_submit_duplicate(c: &mut Criterion) {
    let def = fixture();
    let mut game = PuzzleEngine::new(&def, 12345).unwrap();

    // Record one wrong guess; replaying it is free, so every iteration
    // exercises the full submit path without draining the mistake budget.
    for item in ["A1", "B1", "C1", "D1"] {
        game.toggle_select(item);
    }
    game.submit();

    c.bench_function("submit_duplicate_guess", |b| {
        b.iter(|| {
            for item in ["A1", "B1", "C1", "D1"] {
                game.toggle_select(black_box(item));
            }
            game.submit()
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let def = fixture();
    let mut game = PuzzleEngine::new(&def, 12345).unwrap();

    c.bench_function("shuffle_remaining", |b| {
        b.iter(|| {
            game.shuffle_remaining();
        })
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_toggle,
    bench_submit_duplicate,
    bench_shuffle
);
criterion_main!(benches);
