//! Criterion benchmarks for the per-ply hot paths: pseudo-legal generation,
//! the full-board attack scan and the double-simulation state recomputation
//! that runs after every accepted move.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabia::movegen::pseudo_legal_moves;
use tabia::{Board, Color, Position};

fn generation(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("pseudo-legal moves, full opening array", |b| {
        b.iter(|| {
            for x in 0..8 {
                for y in 0..8 {
                    let _ = black_box(pseudo_legal_moves(&board, Position::new(x, y)));
                }
            }
        });
    });
}

fn attack_scan(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("is_square_attacked, center square", |b| {
        b.iter(|| black_box(board.is_square_attacked(Position::new(4, 4), Color::Black)));
    });
    c.bench_function("is_checked", |b| {
        b.iter(|| black_box(board.is_checked(Color::White)));
    });
}

fn scripted_game(c: &mut Criterion) {
    // Fool's mate: four plies, each followed by the exhaustive escape scan,
    // ending in the most expensive classification (checkmate: no early
    // exit).
    let plies = [
        (Position::new(5, 1), Position::new(5, 2)),
        (Position::new(4, 6), Position::new(4, 4)),
        (Position::new(6, 1), Position::new(6, 3)),
        (Position::new(3, 7), Position::new(7, 3)),
    ];
    c.bench_function("scripted game with state recomputation", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.start();
            let mut taken = Vec::new();
            for (from, to) in plies {
                assert!(board.make_move(from, to, &mut taken));
            }
            black_box(board.game_state())
        });
    });
}

criterion_group!(benches, generation, attack_scan, scripted_game);
criterion_main!(benches);
