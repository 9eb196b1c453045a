//! The board: an 8×8 grid exclusively owning one [`Piece`] value per square,
//! plus turn order, move legality (pseudo-legal ∩ not-self-check), check
//! detection and full-game-state classification.
//!
//! Every operation is a finite, bounded scan (64 squares × at most 27
//! candidate moves per piece) that runs to completion before returning; the
//! grid is never observable in a half-applied state.

use std::fmt::{self, Write};

use tracing::{debug, info};

use crate::core::{Color, GameState, Move, MoveKind, Piece, PieceKind, Position, BOARD_WIDTH};
use crate::movegen::pseudo_legal_moves;

/// Board state and the rules orchestrator. Constructed once per game and
/// [`reset`](Board::reset) in place on restart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Indexed as `grid[x][y]`: file first, rank second.
    grid: [[Piece; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
    current_turn: Color,
    game_state: GameState,
    last_move: Option<Move>,
}

impl Board {
    /// A board holding the standard opening array, white to move, paused
    /// until [`start`](Board::start) is called.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            grid: [[Piece::EMPTY; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
            current_turn: Color::White,
            game_state: GameState::Paused,
            last_move: None,
        };
        board.reset();
        board
    }

    /// A board with no pieces at all, white to move, already ongoing.
    ///
    /// Together with [`place`](Board::place) this lets a harness build an
    /// arbitrary position without any notation parser. The caller is
    /// responsible for placing both kings before anything queries check
    /// state.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            grid: [[Piece::EMPTY; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
            current_turn: Color::White,
            game_state: GameState::Ongoing,
            last_move: None,
        }
    }

    /// Reinitializes all 64 squares to the standard opening array and
    /// returns to the pre-game state: white to move, [`GameState::Paused`],
    /// no last move.
    pub fn reset(&mut self) {
        self.current_turn = Color::White;
        self.game_state = GameState::Paused;
        self.last_move = None;

        for file in self.grid.iter_mut() {
            for square in file.iter_mut() {
                *square = Piece::EMPTY;
            }
        }

        for x in 0..BOARD_WIDTH {
            self.place(Position::new(x, 1), Piece::new(PieceKind::Pawn, Color::White));
            self.place(Position::new(x, 6), Piece::new(PieceKind::Pawn, Color::Black));
        }
        let backrank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (x, kind) in (0..BOARD_WIDTH).zip(backrank) {
            self.place(Position::new(x, 0), Piece::new(kind, Color::White));
            self.place(Position::new(x, 7), Piece::new(kind, Color::Black));
        }
    }

    /// The explicit pre-game transition: leaves [`GameState::Paused`] for
    /// [`GameState::Ongoing`]. Does nothing when the game already started.
    pub fn start(&mut self) {
        if self.game_state == GameState::Paused {
            self.game_state = GameState::Ongoing;
        }
    }

    /// The occupant of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off-board.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Piece {
        assert!(pos.is_inside(), "no square at {pos}");
        self.grid[pos.x as usize][pos.y as usize]
    }

    /// The occupant of `(x, y)`; the read-every-frame accessor of the
    /// presentation layer.
    #[must_use]
    pub fn piece(&self, x: i8, y: i8) -> Piece {
        self.piece_at(Position::new(x, y))
    }

    /// Replaces the occupant of `pos` wholesale.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off-board.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        assert!(pos.is_inside(), "no square at {pos}");
        self.grid[pos.x as usize][pos.y as usize] = piece;
    }

    /// Toggles the presentation-only visibility flag of the occupant of
    /// `pos` (the UI hides the sprite of a piece being dragged).
    pub fn set_visible(&mut self, pos: Position, visible: bool) {
        assert!(pos.is_inside(), "no square at {pos}");
        self.grid[pos.x as usize][pos.y as usize].visible = visible;
    }

    /// The side to move.
    #[must_use]
    pub const fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn game_state(&self) -> GameState {
        self.game_state
    }

    /// The most recently accepted move, if any move was accepted since the
    /// last reset.
    #[must_use]
    pub const fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Attempts to move the occupant of `from` to `to` and returns whether
    /// the move was accepted.
    ///
    /// A rejected move is a silent no-op: the board is left bit-for-bit
    /// unchanged. Rejection reasons: either square off-board, game paused or
    /// already over, `from` not holding a piece of the side to move, `to`
    /// not among the piece's pseudo-legal destinations, or the move leaving
    /// the mover's own king in check.
    ///
    /// On acceptance, a captured occupant is handed over to `taken`
    /// (ownership of captured pieces belongs to the caller), the move is
    /// recorded as [`last_move`](Board::last_move), the turn flips and the
    /// game state is recomputed for the side now to move.
    pub fn make_move(&mut self, from: Position, to: Position, taken: &mut Vec<Piece>) -> bool {
        if !from.is_inside() || !to.is_inside() {
            debug!(%from, %to, "move rejected: square off the board");
            return false;
        }
        if self.game_state == GameState::Paused || self.game_state.is_terminal() {
            debug!(state = %self.game_state, "move rejected: game not in progress");
            return false;
        }
        let mover = self.piece_at(from);
        if mover.color != self.current_turn {
            debug!(%from, turn = %self.current_turn, "move rejected: not the mover's turn");
            return false;
        }

        let Some(mv) = pseudo_legal_moves(self, from)
            .into_iter()
            .find(|mv| mv.to == to)
        else {
            debug!(%from, %to, "move rejected: destination not pseudo-legal");
            return false;
        };

        if self.leaves_in_check(mv, self.current_turn) {
            debug!(%mv, "move rejected: would leave own king in check");
            return false;
        }

        let displaced = self.piece_at(to);
        if mv.kind == MoveKind::Capture {
            taken.push(displaced);
        }
        self.place(to, mover);
        self.place(from, Piece::EMPTY);
        self.last_move = Some(mv);
        self.current_turn = self.current_turn.opposite();
        debug!(%mv, next = %self.current_turn, "move made");
        self.update_game_state();
        true
    }

    /// True iff any piece of `attacker` has `pos` among its pseudo-legal
    /// destinations.
    #[must_use]
    pub fn is_square_attacked(&self, pos: Position, attacker: Color) -> bool {
        for x in 0..BOARD_WIDTH {
            for y in 0..BOARD_WIDTH {
                let from = Position::new(x, y);
                if self.piece_at(from).color != attacker {
                    continue;
                }
                if pseudo_legal_moves(self, from).iter().any(|mv| mv.to == pos) {
                    return true;
                }
            }
        }
        false
    }

    /// Locates the king of `color`.
    ///
    /// # Panics
    ///
    /// Panics if no such king is on the board. Both kings always exist after
    /// [`reset`](Board::reset); a hand-built position without one is a
    /// harness bug and must fail loudly rather than yield a square that
    /// masquerades as valid.
    #[must_use]
    pub fn king_position(&self, color: Color) -> Position {
        for x in 0..BOARD_WIDTH {
            for y in 0..BOARD_WIDTH {
                let pos = Position::new(x, y);
                let piece = self.piece_at(pos);
                if piece.kind == PieceKind::King && piece.color == color {
                    return pos;
                }
            }
        }
        panic!("no {color} king on the board");
    }

    /// True iff the king of `color` is attacked by the opposing side.
    #[must_use]
    pub fn is_checked(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_position(color), color.opposite())
    }

    /// Temporarily applies `mv`, tests whether the king of `color` is
    /// attacked in the resulting position and unconditionally restores both
    /// touched squares. The single simulation primitive behind both the
    /// self-check filter and the state recomputation.
    fn leaves_in_check(&mut self, mv: Move, color: Color) -> bool {
        let moved = self.piece_at(mv.from);
        let displaced = self.piece_at(mv.to);

        self.place(mv.to, moved);
        self.place(mv.from, Piece::EMPTY);
        let in_check = self.is_checked(color);
        self.place(mv.from, moved);
        self.place(mv.to, displaced);

        in_check
    }

    /// Reclassifies the game for the side now to move: checkmate (in check,
    /// no king-safe move), stalemate (not in check, no king-safe move),
    /// check, or ongoing. The escape scan stops at the first king-safe move
    /// found.
    fn update_game_state(&mut self) {
        let side = self.current_turn;
        let in_check = self.is_checked(side);
        let mut has_escape = false;
        'scan: for x in 0..BOARD_WIDTH {
            for y in 0..BOARD_WIDTH {
                let from = Position::new(x, y);
                if self.piece_at(from).color != side {
                    continue;
                }
                for mv in pseudo_legal_moves(self, from) {
                    if !self.leaves_in_check(mv, side) {
                        has_escape = true;
                        break 'scan;
                    }
                }
            }
        }
        self.game_state = match (in_check, has_escape) {
            (true, false) => GameState::Checkmate,
            (false, false) => GameState::Stalemate,
            (true, true) => GameState::Check,
            (false, true) => GameState::Ongoing,
        };
        if self.game_state.is_terminal() {
            info!(state = %self.game_state, side = %side, "game over");
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders ranks top-down, white pieces uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_WIDTH).rev() {
            for x in 0..BOARD_WIDTH {
                write!(f, "{}", self.piece(x, y))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
