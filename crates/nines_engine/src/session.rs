//! Game session: turn order, match conclusion, reset.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::engine::{MetaBoard, Routing};
use crate::position::Position;
use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A single match of meta tic-tac-toe.
///
/// Owns the meta-board exclusively; all mutation goes through
/// [`submit`](Session::submit) or [`reset`](Session::reset). A
/// presentation layer renders from the read-only queries and calls
/// `submit` once per attempted move, retrying freely after a
/// rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) board: MetaBoard,
    pub(crate) to_move: Player,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl Session {
    /// Creates a fresh match: empty boards, open routing, X to move.
    pub fn new() -> Self {
        Self {
            board: MetaBoard::new(),
            to_move: Player::X,
            outcome: Outcome::Undecided,
            history: Vec::new(),
        }
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the meta-board, for rendering.
    pub fn board(&self) -> &MetaBoard {
        &self.board
    }

    /// Returns the match outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the match is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Returns the match winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the sub-boards the player to move may legally target.
    ///
    /// Under forced routing that is exactly the forced sub-board;
    /// under open routing, every undecided one. Empty once the match
    /// is over.
    pub fn available_grids(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        match self.board.routing() {
            Routing::Forced(grid) => vec![grid],
            Routing::Open => self.board.undecided_grids(),
        }
    }

    /// Submits a move for the player to move.
    ///
    /// On success the mark is placed, the match outcome refreshed, and
    /// the turn passed to the opponent unless the match just
    /// concluded. On failure nothing changes, the same player retries.
    /// Returns the match outcome after the move (`Undecided` while
    /// play continues).
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn submit(&mut self, grid: Position, cell: Position) -> Result<Outcome, MoveError> {
        let mov = Move::new(self.to_move, grid, cell);

        if let Err(error) = MoveContract::pre(self, &mov) {
            warn!(%mov, %error, "Move rejected");
            return Err(error);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.apply(&mov)?;
        self.history.push(mov);
        self.outcome = self.board.result();

        match self.outcome {
            Outcome::Undecided => {
                self.to_move = self.to_move.opponent();
            }
            concluded => {
                info!(%mov, outcome = %concluded, "Match concluded");
            }
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(self.outcome)
    }

    /// Index-based variant of [`submit`](Session::submit) for
    /// presentation layers working in raw 0-8 indices.
    pub fn submit_at(&mut self, grid: usize, cell: usize) -> Result<Outcome, MoveError> {
        let grid = Position::from_index(grid).ok_or(MoveError::OutOfBounds(grid))?;
        let cell = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        self.submit(grid, cell)
    }

    /// Replays a sequence of (grid, cell) moves from a fresh match.
    ///
    /// Stops early with the engine's error if any move is illegal.
    #[instrument]
    pub fn replay(moves: &[(Position, Position)]) -> Result<Session, MoveError> {
        let mut session = Session::new();
        for &(grid, cell) in moves {
            session.submit(grid, cell)?;
        }
        Ok(session)
    }

    /// Discards the match and starts over fresh.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        *self = Session::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
