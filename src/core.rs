//! Value primitives shared by the whole engine: squares, colors, piece
//! kinds, occupants, moves and the game-state machine. All of them are small
//! `Copy` types with explicit discriminants — the wire codec in
//! [`crate::wire`] relies on the discriminants staying stable.

use std::fmt::{self, Write};

use anyhow::bail;

/// The board is square; files and ranks both run 0..8.
pub const BOARD_WIDTH: i8 = 8;

/// A square identified by file (`x`) and rank (`y`), both in `0..8` for
/// on-board squares.
///
/// Values outside that range are representable on purpose: the presentation
/// layer uses [`Position::OFF_BOARD`] to mean "no selection", and move
/// generation produces candidate squares first and discards the ones that
/// fall off the edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// File (column), 0..8 when on board.
    pub x: i8,
    /// Rank (row), 0..8 when on board.
    pub y: i8,
}

impl Position {
    /// Sentinel for "no square selected". Never inside the board.
    pub const OFF_BOARD: Self = Self { x: -1, y: -1 };

    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// True iff both coordinates are within the 8×8 board.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH && self.y >= 0 && self.y < BOARD_WIDTH
    }

    /// The square `(dx, dy)` away from this one. May be off-board; callers
    /// check [`Position::is_inside`].
    #[must_use]
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Side of a piece or a player. [`Color::None`] exists only as the color of
/// the empty occupant.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    None = 0,
    White = 1,
    Black = 2,
}

impl Color {
    /// "Flips" the color. [`Color::None`] has no opponent and stays as is.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
            Self::None => Self::None,
        }
    }

    /// Vertical direction pawns of this color advance in: white moves toward
    /// increasing ranks, black toward decreasing ranks.
    pub(crate) const fn forward(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
            Self::None => 0,
        }
    }

    /// Rank the pawns of this color start on (and may double-step from).
    pub(crate) const fn pawn_rank(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
            // Empty squares never generate moves; the value is never read.
            Self::None => -1,
        }
    }
}

impl TryFrom<i32> for Color {
    type Error = anyhow::Error;

    fn try_from(value: i32) -> anyhow::Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::White),
            2 => Ok(Self::Black),
            _ => bail!("color discriminant should be within 0..=2, got {value}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::None => '-',
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// The seven kinds of square occupants. [`PieceKind::Empty`] is a
/// first-class occupant: every square always holds a defined piece value.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Empty = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl TryFrom<i32> for PieceKind {
    type Error = anyhow::Error;

    fn try_from(value: i32) -> anyhow::Result<Self> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Pawn),
            2 => Ok(Self::Knight),
            3 => Ok(Self::Bishop),
            4 => Ok(Self::Rook),
            5 => Ok(Self::Queen),
            6 => Ok(Self::King),
            _ => bail!("piece kind discriminant should be within 0..=6, got {value}"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::Empty => '.',
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        })
    }
}

/// What occupies a square. Occupants are replaced wholesale on a move, never
/// mutated in place; the one exception is the presentation-only `visible`
/// flag, which the UI toggles while dragging a piece sprite.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    #[allow(missing_docs)]
    pub kind: PieceKind,
    /// [`Color::None`] iff the kind is [`PieceKind::Empty`].
    pub color: Color,
    /// Presentation-layer flag; not a rules concern. Defaults to `true`.
    pub visible: bool,
}

impl Piece {
    /// The empty occupant.
    pub const EMPTY: Self = Self {
        kind: PieceKind::Empty,
        color: Color::None,
        visible: true,
    };

    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            visible: true,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }
}

impl fmt::Display for Piece {
    /// White pieces render uppercase, black lowercase, the empty occupant as
    /// a dot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.kind {
            PieceKind::Empty => '.',
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        f.write_char(match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            _ => symbol,
        })
    }
}

/// Kind of a [`Move`]. Only [`MoveKind::Normal`] and [`MoveKind::Capture`]
/// are ever produced by this engine; the remaining variants are reserved
/// discriminants kept for forward compatibility of the wire format.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Normal = 0,
    Capture = 1,
    Castle = 2,
    Promotion = 3,
    EnPassant = 4,
}

impl TryFrom<i32> for MoveKind {
    type Error = anyhow::Error;

    fn try_from(value: i32) -> anyhow::Result<Self> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Capture),
            2 => Ok(Self::Castle),
            3 => Ok(Self::Promotion),
            4 => Ok(Self::EnPassant),
            _ => bail!("move kind discriminant should be within 0..=4, got {value}"),
        }
    }
}

/// A proposed transition between two squares.
///
/// `promotion` is always [`PieceKind::Empty`]: promotion is not modeled (a
/// pawn reaching the last rank stays a pawn), but the field is part of the
/// move record so the wire format does not have to change when it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    #[allow(missing_docs)]
    pub from: Position,
    #[allow(missing_docs)]
    pub to: Position,
    #[allow(missing_docs)]
    pub kind: MoveKind,
    #[allow(missing_docs)]
    pub promotion: PieceKind,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Position, to: Position, kind: MoveKind) -> Self {
        Self {
            from,
            to,
            kind,
            promotion: PieceKind::Empty,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Full-game classification, recomputed after every accepted move.
///
/// `Paused` is the pre-game state; the engine does not accept moves while
/// paused. `Checkmate` and `Stalemate` are terminal: only
/// [`crate::board::Board::reset`] leaves them.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Paused = 0,
    Ongoing = 1,
    Check = 2,
    Checkmate = 3,
    Stalemate = 4,
}

impl GameState {
    /// True for the two states that end the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Checkmate | Self::Stalemate)
    }
}

impl TryFrom<i32> for GameState {
    type Error = anyhow::Error;

    fn try_from(value: i32) -> anyhow::Result<Self> {
        match value {
            0 => Ok(Self::Paused),
            1 => Ok(Self::Ongoing),
            2 => Ok(Self::Check),
            3 => Ok(Self::Checkmate),
            4 => Ok(Self::Stalemate),
            _ => bail!("game state discriminant should be within 0..=4, got {value}"),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paused => "Paused",
            Self::Ongoing => "Ongoing",
            Self::Check => "Check",
            Self::Checkmate => "Checkmate",
            Self::Stalemate => "Stalemate",
        })
    }
}
