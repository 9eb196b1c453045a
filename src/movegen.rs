//! Pseudo-legal move generation: moves that obey each piece's movement
//! geometry and never land on a same-color occupant, but that may still
//! leave the mover's own king in check. The self-check filter lives in
//! [`crate::board::Board::make_move`].
//!
//! Generation is a pure function of the board occupancy at call time: it
//! reads other squares through the board handle and mutates nothing. Move
//! order is generation order (fixed offset/direction tables) and carries no
//! meaning.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::core::{Color, Move, MoveKind, PieceKind, Position};

/// A queen in the open center reaches 27 squares; no single piece can ever
/// produce more moves than that.
pub const MAX_MOVES_PER_PIECE: usize = 27;

/// Stack-allocated list of one piece's pseudo-legal moves.
pub type MoveVec = ArrayVec<Move, MAX_MOVES_PER_PIECE>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Enumerates the pseudo-legal moves of the occupant of `from`.
///
/// The empty occupant (and an off-board `from`) yields no moves. Every
/// produced move has `move.from == from` and an on-board destination.
#[must_use]
pub fn pseudo_legal_moves(board: &Board, from: Position) -> MoveVec {
    if !from.is_inside() {
        return MoveVec::new();
    }
    let piece = board.piece_at(from);
    match piece.kind {
        PieceKind::Empty => MoveVec::new(),
        PieceKind::Pawn => pawn_moves(board, from, piece.color),
        PieceKind::Knight => knight_moves(board, from, piece.color),
        PieceKind::Bishop => bishop_moves(board, from, piece.color),
        PieceKind::Rook => rook_moves(board, from, piece.color),
        PieceKind::Queen => queen_moves(board, from, piece.color),
        PieceKind::King => king_moves(board, from, piece.color),
    }
}

/// One step forward onto an empty square; two steps from the starting rank
/// with both squares empty (the blocked one-ahead square gates the
/// double-step as well); diagonal captures only onto opposing occupants.
/// No en passant.
fn pawn_moves(board: &Board, from: Position, color: Color) -> MoveVec {
    let mut moves = MoveVec::new();
    let dir = color.forward();

    let one_ahead = from.offset(0, dir);
    if one_ahead.is_inside() && board.piece_at(one_ahead).is_empty() {
        moves.push(Move::new(from, one_ahead, MoveKind::Normal));

        if from.y == color.pawn_rank() {
            let two_ahead = from.offset(0, 2 * dir);
            if two_ahead.is_inside() && board.piece_at(two_ahead).is_empty() {
                moves.push(Move::new(from, two_ahead, MoveKind::Normal));
            }
        }
    }

    for dx in [-1, 1] {
        let diagonal = from.offset(dx, dir);
        if !diagonal.is_inside() {
            continue;
        }
        let target = board.piece_at(diagonal);
        // Capturing an empty square is illegal for a pawn.
        if !target.is_empty() && target.color != color {
            moves.push(Move::new(from, diagonal, MoveKind::Capture));
        }
    }

    moves
}

fn knight_moves(board: &Board, from: Position, color: Color) -> MoveVec {
    let mut moves = MoveVec::new();
    for (dx, dy) in KNIGHT_OFFSETS {
        let to = from.offset(dx, dy);
        if !to.is_inside() {
            continue;
        }
        let target = board.piece_at(to);
        if target.color != color {
            let kind = if target.is_empty() {
                MoveKind::Normal
            } else {
                MoveKind::Capture
            };
            moves.push(Move::new(from, to, kind));
        }
    }
    moves
}

/// Extends each ray square-by-square until the board edge, an own piece
/// (stop, exclusive) or an opposing piece (include as a capture, then stop).
fn slider_moves(board: &Board, from: Position, color: Color, directions: [(i8, i8); 4]) -> MoveVec {
    let mut moves = MoveVec::new();
    for (dx, dy) in directions {
        let mut to = from.offset(dx, dy);
        while to.is_inside() {
            let target = board.piece_at(to);
            if target.is_empty() {
                moves.push(Move::new(from, to, MoveKind::Normal));
            } else {
                if target.color != color {
                    moves.push(Move::new(from, to, MoveKind::Capture));
                }
                break;
            }
            to = to.offset(dx, dy);
        }
    }
    moves
}

fn bishop_moves(board: &Board, from: Position, color: Color) -> MoveVec {
    slider_moves(board, from, color, BISHOP_DIRECTIONS)
}

fn rook_moves(board: &Board, from: Position, color: Color) -> MoveVec {
    slider_moves(board, from, color, ROOK_DIRECTIONS)
}

/// Union of the rook and bishop rays from the same square, produced by
/// delegation so queen behavior can never drift from rook + bishop behavior.
fn queen_moves(board: &Board, from: Position, color: Color) -> MoveVec {
    let mut moves = rook_moves(board, from, color);
    moves.extend(bishop_moves(board, from, color));
    moves
}

fn king_moves(board: &Board, from: Position, color: Color) -> MoveVec {
    let mut moves = MoveVec::new();
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let to = from.offset(dx, dy);
            if !to.is_inside() {
                continue;
            }
            let target = board.piece_at(to);
            if target.color != color {
                let kind = if target.is_empty() {
                    MoveKind::Normal
                } else {
                    MoveKind::Capture
                };
                moves.push(Move::new(from, to, kind));
            }
        }
    }
    moves
}
