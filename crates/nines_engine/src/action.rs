//! First-class move type and the single rejection error.
//!
//! Moves are domain events: a player, the sub-board they target, and
//! the cell within it. They can be validated before application and
//! replayed from history.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a cell of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The sub-board being played in.
    pub grid: Position,
    /// The cell within that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, grid: Position, cell: Position) -> Self {
        Self { player, grid, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> grid {}, cell {}",
            self.player,
            self.grid.to_number(),
            self.cell.to_number()
        )
    }
}

/// Why a move was rejected.
///
/// This is the only error the engine raises. It is always recoverable:
/// state is left untouched and the same player may submit again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// An index was outside 0-8.
    #[display("index {_0} is out of range (expected 0-8)")]
    OutOfBounds(usize),

    /// The target sub-board has already been won or drawn.
    #[display("grid {} is already decided", _0.to_number())]
    GridDecided(Position),

    /// The target cell is already occupied.
    #[display("cell {} of grid {} is already taken", cell.to_number(), grid.to_number())]
    SquareOccupied {
        /// The sub-board played in.
        grid: Position,
        /// The occupied cell.
        cell: Position,
    },

    /// Routing forces play into a different sub-board.
    #[display("next move must be in grid {}, not grid {}", required.to_number(), chosen.to_number())]
    WrongGrid {
        /// The sub-board routing demands.
        required: Position,
        /// The sub-board the move targeted.
        chosen: Position,
    },

    /// It is not this player's turn.
    #[display("it is not {_0}'s turn")]
    WrongPlayer(Player),

    /// The match has already concluded.
    #[display("the match is already over")]
    GameOver,

    /// A postcondition check failed (debug builds only).
    #[display("invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
