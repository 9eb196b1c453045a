//! Properties of the pseudo-legal move generator, checked through the
//! public crate surface.

use pretty_assertions::{assert_eq, assert_ne};
use tabia::movegen::pseudo_legal_moves;
use tabia::{Board, Color, Move, MoveKind, Piece, PieceKind, Position};

fn all_moves_for(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for x in 0..8 {
        for y in 0..8 {
            let from = Position::new(x, y);
            if board.piece_at(from).color == color {
                moves.extend(pseudo_legal_moves(board, from));
            }
        }
    }
    moves
}

#[test]
fn containment() {
    let mut board = Board::new();
    board.start();
    let mut taken = Vec::new();
    // Walk a few plies so the scan covers more than the opening array.
    let plies = [
        (Position::new(4, 1), Position::new(4, 3)),
        (Position::new(4, 6), Position::new(4, 4)),
        (Position::new(6, 0), Position::new(5, 2)),
        (Position::new(1, 7), Position::new(2, 5)),
    ];
    for (from, to) in plies {
        for x in 0..8 {
            for y in 0..8 {
                let origin = Position::new(x, y);
                for mv in pseudo_legal_moves(&board, origin) {
                    assert_eq!(mv.from, origin);
                    assert!(mv.to.is_inside());
                    assert_eq!(mv.promotion, PieceKind::Empty);
                    assert!(matches!(mv.kind, MoveKind::Normal | MoveKind::Capture));
                }
            }
        }
        assert!(board.make_move(from, to, &mut taken));
    }
}

#[test]
fn opening_mobility() {
    let board = Board::new();
    // 16 pawn moves and 4 knight moves; nothing else can leave the first
    // rank of the standard array.
    assert_eq!(all_moves_for(&board, Color::White).len(), 20);
    assert_eq!(all_moves_for(&board, Color::Black).len(), 20);
}

#[test]
fn no_move_targets_a_friendly_piece() {
    let mut board = Board::new();
    board.start();
    let mut taken = Vec::new();
    assert!(board.make_move(Position::new(4, 1), Position::new(4, 3), &mut taken));
    assert!(board.make_move(Position::new(3, 6), Position::new(3, 4), &mut taken));

    for color in [Color::White, Color::Black] {
        for mv in all_moves_for(&board, color) {
            assert_ne!(board.piece_at(mv.to).color, color);
            let target = board.piece_at(mv.to);
            if mv.kind == MoveKind::Capture {
                assert_eq!(target.color, color.opposite());
            } else {
                assert!(target.is_empty());
            }
        }
    }
}

#[test]
fn queen_mobility_matches_rook_plus_bishop() {
    let mut board = Board::new();
    let from = Position::new(3, 4);
    board.place(from, Piece::new(PieceKind::Queen, Color::White));
    let queen: Vec<_> = pseudo_legal_moves(&board, from).into_iter().collect();

    board.place(from, Piece::new(PieceKind::Rook, Color::White));
    let rook: Vec<_> = pseudo_legal_moves(&board, from).into_iter().collect();
    board.place(from, Piece::new(PieceKind::Bishop, Color::White));
    let bishop: Vec<_> = pseudo_legal_moves(&board, from).into_iter().collect();

    assert_eq!(queen.len(), rook.len() + bishop.len());
    for mv in rook.iter().chain(bishop.iter()) {
        assert!(queen.iter().any(|q| q.to == mv.to && q.kind == mv.kind));
    }
}

#[test]
fn empty_and_off_board_squares_generate_nothing() {
    let board = Board::new();
    assert!(pseudo_legal_moves(&board, Position::new(4, 4)).is_empty());
    assert!(pseudo_legal_moves(&board, Position::OFF_BOARD).is_empty());
}

#[test]
fn capture_moves_are_tagged() {
    let mut board = Board::empty();
    board.place(
        Position::new(3, 3),
        Piece::new(PieceKind::Knight, Color::White),
    );
    board.place(
        Position::new(4, 5),
        Piece::new(PieceKind::Pawn, Color::Black),
    );
    let moves = pseudo_legal_moves(&board, Position::new(3, 3));
    assert_eq!(moves.len(), 8);
    let captures: Vec<_> = moves
        .iter()
        .filter(|mv| mv.kind == MoveKind::Capture)
        .collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].to, Position::new(4, 5));
}
