//! Two-player chess rules engine: an 8×8 board of owned piece values,
//! pseudo-legal move generation per piece, a self-check filter on move
//! application and game-state classification (ongoing, check, checkmate,
//! stalemate) after every ply.
//!
//! The engine is deliberately small in scope: castling, en passant and pawn
//! promotion are not modeled, and there is no search, notation parsing or
//! clock. What it does model, it models completely: every accepted move is
//! guaranteed not to leave the mover's own king in check, and the game state
//! is recomputed from scratch after every ply.
//!
//! The typical entry point is [`game::Game`], which owns a [`board::Board`]
//! together with the captured-piece collection and an injected
//! [`game::GameObserver`] collaborator. Callers that only need the rules
//! (e.g. a test harness) can drive [`board::Board`] directly.

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic
)]

pub mod board;
pub mod core;
pub mod game;
pub mod movegen;
pub mod wire;

pub use crate::board::Board;
pub use crate::core::{Color, GameState, Move, MoveKind, Piece, PieceKind, Position};
pub use crate::game::{Game, GameObserver};
pub use crate::wire::GameSnapshot;
