use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use arbiter_chess::game_state::chess_types::{Color, Piece, PieceKind};
use arbiter_chess::game_state::game_state::GameState;
use arbiter_chess::move_rules::king_safety::{is_checkmate, is_stalemate};

#[derive(Clone, Copy)]
struct TerminalCase {
    name: &'static str,
    build: fn() -> GameState,
    expect_mate: bool,
    expect_stalemate: bool,
}

fn queen_and_rook_mate() -> GameState {
    let mut game = GameState::new_empty();
    game.board[2][4] = Some(Piece::new(Color::White, PieceKind::King));
    game.board[1][4] = Some(Piece::new(Color::White, PieceKind::Queen));
    game.board[0][0] = Some(Piece::new(Color::White, PieceKind::Rook));
    game.board[0][4] = Some(Piece::new(Color::Black, PieceKind::King));
    game
}

fn cornered_king_stalemate() -> GameState {
    let mut game = GameState::new_empty();
    game.board[0][0] = Some(Piece::new(Color::Black, PieceKind::King));
    game.board[1][2] = Some(Piece::new(Color::White, PieceKind::Queen));
    game.board[2][1] = Some(Piece::new(Color::White, PieceKind::King));
    game
}

fn starting_position() -> GameState {
    GameState::new_game()
}

const CASES: &[TerminalCase] = &[
    TerminalCase {
        name: "queen_and_rook_mate",
        build: queen_and_rook_mate,
        expect_mate: true,
        expect_stalemate: false,
    },
    TerminalCase {
        name: "cornered_king_stalemate",
        build: cornered_king_stalemate,
        expect_mate: false,
        expect_stalemate: true,
    },
    TerminalCase {
        name: "starting_position",
        build: starting_position,
        expect_mate: false,
        expect_stalemate: false,
    },
];

fn bench_terminal_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal_scan");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(50);

    for case in CASES {
        // Correctness guard before benchmarking.
        let mut guard = (case.build)();
        assert_eq!(
            is_checkmate(&mut guard.board, Color::Black, None),
            case.expect_mate,
            "mate mismatch for {}",
            case.name
        );
        assert_eq!(
            is_stalemate(&mut guard.board, Color::Black, None),
            case.expect_stalemate,
            "stalemate mismatch for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::new("checkmate", case.name), case, |b, case| {
            let mut game = (case.build)();
            b.iter(|| {
                let mated = is_checkmate(black_box(&mut game.board), Color::Black, None);
                black_box(mated)
            });
        });

        group.bench_with_input(BenchmarkId::new("stalemate", case.name), case, |b, case| {
            let mut game = (case.build)();
            b.iter(|| {
                let drawn = is_stalemate(black_box(&mut game.board), Color::Black, None);
                black_box(drawn)
            });
        });
    }

    group.finish();
}

fn bench_move_submission(c: &mut Criterion) {
    const OPENING_LINE: &[&str] = &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "e1g1"];

    let mut group = c.benchmark_group("move_submission");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(50);

    // Correctness guard before benchmarking.
    let mut guard = GameState::new_game();
    for text in OPENING_LINE {
        assert!(
            !guard.submit_move(text).is_empty(),
            "opening move {text} should be accepted"
        );
    }

    group.bench_function("italian_opening_line", |b| {
        b.iter(|| {
            let mut game = GameState::new_game();
            for text in OPENING_LINE {
                black_box(game.submit_move(black_box(text)));
            }
            black_box(game.get_result().len())
        });
    });

    group.finish();
}

criterion_group!(terminal_benches, bench_terminal_scan, bench_move_submission);
criterion_main!(terminal_benches);
