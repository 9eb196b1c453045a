//! Caller-facing session wrapper: owns the [`Board`] together with the
//! captured-piece collection and notifies an injected collaborator after
//! every accepted move. The collaborator replaces the process-wide network
//! manager of a typical GUI host — the engine never knows whether a peer is
//! connected, it only hands the snapshot outward.

use crate::board::Board;
use crate::core::{GameState, Piece, Position};
use crate::wire::GameSnapshot;

/// Hooks a collaborator receives from a [`Game`]. All methods default to
/// no-ops; implement only what the host cares about.
pub trait GameObserver {
    /// Called with the post-move snapshot after every accepted move. A
    /// network transport would frame and send it here.
    fn snapshot(&mut self, snapshot: &GameSnapshot) {
        let _ = snapshot;
    }

    /// Called once when a move ends the game. The engine itself does
    /// nothing further; the host decides what happens next (e.g. disabling
    /// input until reset).
    fn game_over(&mut self, state: GameState) {
        let _ = state;
    }
}

/// A full two-player session: board, captured pieces and the outward-facing
/// observer.
pub struct Game {
    board: Board,
    taken: Vec<Piece>,
    observer: Option<Box<dyn GameObserver>>,
}

impl Game {
    /// A fresh session with the standard opening array and no observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            taken: Vec::new(),
            observer: None,
        }
    }

    /// A fresh session that notifies `observer` after accepted moves.
    #[must_use]
    pub fn with_observer(observer: Box<dyn GameObserver>) -> Self {
        Self {
            observer: Some(observer),
            ..Self::new()
        }
    }

    /// Read-only view of the rules state for the presentation layer.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Pieces captured so far, in capture order.
    #[must_use]
    pub fn taken_pieces(&self) -> &[Piece] {
        &self.taken
    }

    /// Begins the game (the paused-to-ongoing transition).
    pub fn start(&mut self) {
        self.board.start();
    }

    /// Restarts: standard array, empty capture collection, paused.
    pub fn reset(&mut self) {
        self.board.reset();
        self.taken.clear();
    }

    /// Toggles sprite visibility during drag; forwarded verbatim.
    pub fn set_visible(&mut self, pos: Position, visible: bool) {
        self.board.set_visible(pos, visible);
    }

    /// Attempts the move and, when it is accepted, emits the post-move
    /// snapshot to the observer and fires `game_over` on terminal states.
    /// Returns whether the move was accepted.
    pub fn make_move(&mut self, from: Position, to: Position) -> bool {
        if !self.board.make_move(from, to, &mut self.taken) {
            return false;
        }
        if let Some(observer) = self.observer.as_mut() {
            if let Some(snapshot) = GameSnapshot::capture(&self.board) {
                observer.snapshot(&snapshot);
            }
            let state = self.board.game_state();
            if state.is_terminal() {
                observer.game_over(state);
            }
        }
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{Color, PieceKind};

    struct Recorder {
        snapshots: Rc<RefCell<Vec<GameSnapshot>>>,
        terminal: Rc<RefCell<Vec<GameState>>>,
    }

    impl GameObserver for Recorder {
        fn snapshot(&mut self, snapshot: &GameSnapshot) {
            self.snapshots.borrow_mut().push(*snapshot);
        }

        fn game_over(&mut self, state: GameState) {
            self.terminal.borrow_mut().push(state);
        }
    }

    #[test]
    fn observer_sees_every_accepted_move() {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let terminal = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder {
            snapshots: Rc::clone(&snapshots),
            terminal: Rc::clone(&terminal),
        };
        let mut game = Game::with_observer(Box::new(recorder));
        game.start();

        // Rejected moves emit nothing.
        assert!(!game.make_move(Position::new(4, 1), Position::new(4, 5)));
        assert_eq!(snapshots.borrow().len(), 0);

        assert!(game.make_move(Position::new(4, 1), Position::new(4, 3)));
        assert!(game.make_move(Position::new(4, 6), Position::new(4, 4)));
        let seen = snapshots.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].current_turn, Color::Black);
        assert_eq!(seen[0].last_move.to, Position::new(4, 3));
        assert_eq!(seen[1].current_turn, Color::White);
        assert!(terminal.borrow().is_empty());
    }

    #[test]
    fn captures_accumulate_in_order() {
        let mut game = Game::new();
        game.start();
        assert!(game.make_move(Position::new(4, 1), Position::new(4, 3)));
        assert!(game.make_move(Position::new(3, 6), Position::new(3, 4)));
        // e4 pawn takes d5 pawn.
        assert!(game.make_move(Position::new(4, 3), Position::new(3, 4)));
        assert_eq!(game.taken_pieces().len(), 1);
        assert_eq!(game.taken_pieces()[0].kind, PieceKind::Pawn);
        assert_eq!(game.taken_pieces()[0].color, Color::Black);

        game.reset();
        assert!(game.taken_pieces().is_empty());
        assert_eq!(game.board().game_state(), GameState::Paused);
    }
}
