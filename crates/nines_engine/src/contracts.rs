//! Contract-based validation for move submission.
//!
//! Contracts split correctness into named preconditions checked before
//! a move is applied and postconditions (the invariant set) checked
//! after it, in debug builds.

use crate::action::{Move, MoveError};
use crate::engine::{MetaBoard, Routing};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::session::Session;
use tracing::warn;

/// A contract defines preconditions and postconditions for a state
/// transition driven by an action.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target sub-board is still undecided.
pub struct GridUndecided;

impl GridUndecided {
    /// Rejects moves into won or drawn sub-boards.
    pub fn check(mov: &Move, board: &MetaBoard) -> Result<(), MoveError> {
        if board.grid(mov.grid).is_decided() {
            Err(MoveError::GridDecided(mov.grid))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct SquareEmpty;

impl SquareEmpty {
    /// Rejects moves into occupied squares.
    pub fn check(mov: &Move, board: &MetaBoard) -> Result<(), MoveError> {
        if board.grid(mov.grid).board().is_empty(mov.cell) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied {
                grid: mov.grid,
                cell: mov.cell,
            })
        }
    }
}

/// Precondition: the move lands where routing demands.
pub struct RoutingSatisfied;

impl RoutingSatisfied {
    /// Rejects moves outside the forced sub-board, if one is forced.
    pub fn check(mov: &Move, board: &MetaBoard) -> Result<(), MoveError> {
        match board.routing() {
            Routing::Forced(required) if required != mov.grid => Err(MoveError::WrongGrid {
                required,
                chosen: mov.grid,
            }),
            _ => Ok(()),
        }
    }
}

/// Precondition: it is the moving player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player not on turn.
    pub fn check(mov: &Move, session: &Session) -> Result<(), MoveError> {
        if mov.player != session.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: everything required for a move to be
/// accepted by a live session.
pub struct LegalMove;

impl LegalMove {
    /// Validates the full set of move preconditions.
    pub fn check(mov: &Move, session: &Session) -> Result<(), MoveError> {
        if session.is_over() {
            return Err(MoveError::GameOver);
        }
        PlayersTurn::check(mov, session)?;
        session.board().check_move(mov)?;
        Ok(())
    }
}

/// Contract for submitted moves.
///
/// Preconditions: the match is live, it is the player's turn, the
/// sub-board is undecided, the square empty, and routing is satisfied.
/// Postconditions: the session invariants still hold.
pub struct MoveContract;

impl Contract<Session, Move> for MoveContract {
    fn pre(session: &Session, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, session)
    }

    fn post(_before: &Session, after: &Session) -> Result<(), MoveError> {
        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed after move");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
