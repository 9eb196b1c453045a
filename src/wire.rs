//! Wire format of the post-move snapshot a host pushes to its peer: a
//! 4-byte little-endian length prefix followed by a fixed 32-byte payload of
//! little-endian `i32` fields. The engine owns only the codec; sockets,
//! sessions and the "connected" predicate belong to the transport.
//!
//! The payload layout mirrors the move record field by field so the frame
//! size never depends on which move kinds the engine actually produces:
//!
//! | offset | field                |
//! |--------|----------------------|
//! | 0      | `last_move.from.x`   |
//! | 4      | `last_move.from.y`   |
//! | 8      | `last_move.to.x`     |
//! | 12     | `last_move.to.y`     |
//! | 16     | `last_move.kind`     |
//! | 20     | `last_move.promotion`|
//! | 24     | `game_state`         |
//! | 28     | `current_turn`       |

use anyhow::bail;

use crate::board::Board;
use crate::core::{Color, GameState, Move, MoveKind, PieceKind, Position};

/// Fixed payload size in bytes: eight `i32` fields.
pub const PAYLOAD_LEN: usize = 32;
/// Full frame size: length prefix plus payload.
pub const FRAME_LEN: usize = 4 + PAYLOAD_LEN;

/// What a peer needs to mirror the position after a ply: the move that was
/// made, the resulting classification and whose turn it now is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    #[allow(missing_docs)]
    pub last_move: Move,
    #[allow(missing_docs)]
    pub game_state: GameState,
    #[allow(missing_docs)]
    pub current_turn: Color,
}

impl GameSnapshot {
    /// Packages the board's observable post-move state. `None` until the
    /// first accepted move: nothing has happened that a peer would need.
    #[must_use]
    pub fn capture(board: &Board) -> Option<Self> {
        board.last_move().map(|last_move| Self {
            last_move,
            game_state: board.game_state(),
            current_turn: board.current_turn(),
        })
    }

    /// Serializes the snapshot as a length-prefixed frame ready for a
    /// stream socket.
    #[must_use]
    pub fn encode_frame(&self) -> [u8; FRAME_LEN] {
        let fields: [i32; 8] = [
            i32::from(self.last_move.from.x),
            i32::from(self.last_move.from.y),
            i32::from(self.last_move.to.x),
            i32::from(self.last_move.to.y),
            self.last_move.kind as i32,
            self.last_move.promotion as i32,
            self.game_state as i32,
            self.current_turn as i32,
        ];
        let mut frame = [0; FRAME_LEN];
        frame[..4].copy_from_slice(&(PAYLOAD_LEN as u32).to_le_bytes());
        for (chunk, field) in frame[4..].chunks_exact_mut(4).zip(fields) {
            chunk.copy_from_slice(&field.to_le_bytes());
        }
        frame
    }

    /// Parses a full frame received from a peer.
    ///
    /// # Errors
    ///
    /// Fails on a truncated or oversized frame, a length prefix that does
    /// not announce exactly [`PAYLOAD_LEN`] bytes, coordinates outside the
    /// board, unknown enum discriminants, or a state no post-move snapshot
    /// can carry ([`GameState::Paused`], [`Color::None`] to move).
    pub fn decode_frame(frame: &[u8]) -> anyhow::Result<Self> {
        if frame.len() != FRAME_LEN {
            bail!("frame should be {FRAME_LEN} bytes, got {}", frame.len());
        }
        let announced = u32::from_le_bytes(frame[..4].try_into()?);
        if announced as usize != PAYLOAD_LEN {
            bail!("length prefix should announce {PAYLOAD_LEN} bytes, got {announced}");
        }

        let mut fields = [0i32; 8];
        for (field, chunk) in fields.iter_mut().zip(frame[4..].chunks_exact(4)) {
            *field = i32::from_le_bytes(chunk.try_into()?);
        }

        let from = decode_position(fields[0], fields[1])?;
        let to = decode_position(fields[2], fields[3])?;
        let kind = MoveKind::try_from(fields[4])?;
        let promotion = PieceKind::try_from(fields[5])?;
        let game_state = GameState::try_from(fields[6])?;
        // Snapshots exist only after an accepted move; a paused game never
        // produced one.
        if game_state == GameState::Paused {
            bail!("snapshot game state should be post-move, got {game_state}");
        }
        let current_turn = Color::try_from(fields[7])?;
        if current_turn == Color::None {
            bail!("snapshot turn should name a player, got {current_turn}");
        }
        Ok(Self {
            last_move: Move {
                from,
                to,
                kind,
                promotion,
            },
            game_state,
            current_turn,
        })
    }
}

fn decode_position(x: i32, y: i32) -> anyhow::Result<Position> {
    let pos = Position::new(i8::try_from(x)?, i8::try_from(y)?);
    if !pos.is_inside() {
        bail!("move coordinates should be on the board, got {pos}");
    }
    Ok(pos)
}
