//! The nested-board engine: sub-board state, routing, move application.

use crate::action::{Move, MoveError};
use crate::contracts::{GridUndecided, RoutingSatisfied, SquareEmpty};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Which sub-board the next move must land in.
///
/// `Open` covers both the very first move of the match and the case
/// where routing pointed at an already-decided sub-board; in either
/// case any undecided sub-board may be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Routing {
    /// Any undecided sub-board may be played.
    Open,
    /// The next move must land in this sub-board.
    Forced(Position),
}

/// One 3x3 sub-board with its cached outcome.
///
/// The outcome is recomputed only when a square in this sub-board is
/// filled. Once decided it is never written to again, so the cache is
/// sticky for the rest of the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    pub(crate) board: Board,
    pub(crate) outcome: Outcome,
}

impl SubBoard {
    fn new() -> Self {
        Self {
            board: Board::new(),
            outcome: Outcome::Undecided,
        }
    }

    /// Returns the squares of this sub-board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cached outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once this sub-board is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Writes a mark and refreshes the cached outcome.
    ///
    /// Callers must have validated the move: the sub-board is
    /// undecided and the square empty.
    fn place(&mut self, cell: Position, player: Player) {
        self.board.set(cell, Square::Occupied(player));
        self.outcome = rules::board_outcome(&self.board);
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// The nine sub-boards plus the routing rule between them.
///
/// This owns all cell state and enforces move legality, but knows
/// nothing about whose turn it is; turn order lives in
/// [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaBoard {
    pub(crate) grids: [SubBoard; 9],
    pub(crate) routing: Routing,
}

impl MetaBoard {
    /// Creates an empty meta-board with open routing.
    pub fn new() -> Self {
        Self {
            grids: std::array::from_fn(|_| SubBoard::new()),
            routing: Routing::Open,
        }
    }

    /// Returns the sub-board at the given meta position.
    pub fn grid(&self, at: Position) -> &SubBoard {
        &self.grids[at.to_index()]
    }

    /// Returns the current routing constraint.
    pub fn routing(&self) -> Routing {
        self.routing
    }

    /// Returns the outcomes of all nine sub-boards in meta order.
    pub fn outcomes(&self) -> [Outcome; 9] {
        std::array::from_fn(|i| self.grids[i].outcome)
    }

    /// Returns the sub-boards that are still undecided.
    pub fn undecided_grids(&self) -> Vec<Position> {
        Position::iter()
            .filter(|&at| !self.grid(at).is_decided())
            .collect()
    }

    /// Computes the match outcome from the cached sub-board outcomes.
    pub fn result(&self) -> Outcome {
        rules::meta_outcome(&self.outcomes())
    }

    /// Checks whether a move is legal on the current board.
    ///
    /// The target sub-board must be undecided, the cell empty, and the
    /// routing constraint satisfied. No side effects.
    pub fn check_move(&self, mov: &Move) -> Result<(), MoveError> {
        GridUndecided::check(mov, self)?;
        SquareEmpty::check(mov, self)?;
        RoutingSatisfied::check(mov, self)?;
        Ok(())
    }

    /// Applies a validated move and reroutes.
    ///
    /// Writes the mark, refreshes the target sub-board's outcome, then
    /// routes by the destination cell index: the opponent is forced
    /// into the sub-board at that position if it is still undecided
    /// (checked after the write, so a move that decides its own
    /// sub-board routes open), otherwise routing opens up. Returns an
    /// error and leaves the board untouched if the move is illegal.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mov: &Move) -> Result<(), MoveError> {
        self.check_move(mov)?;

        self.grids[mov.grid.to_index()].place(mov.cell, mov.player);

        self.routing = if self.grid(mov.cell).is_decided() {
            Routing::Open
        } else {
            Routing::Forced(mov.cell)
        };

        debug!(
            grid = mov.grid.to_number(),
            cell = mov.cell.to_number(),
            outcome = %self.grid(mov.grid).outcome(),
            routing = ?self.routing,
            "Move applied"
        );

        Ok(())
    }
}

impl Default for MetaBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(board: &mut MetaBoard, player: Player, grid: usize, cell: usize) {
        let mov = Move::new(
            player,
            Position::from_index(grid).unwrap(),
            Position::from_index(cell).unwrap(),
        );
        board.apply(&mov).expect("legal move");
    }

    #[test]
    fn test_new_board_routes_open() {
        let board = MetaBoard::new();
        assert_eq!(board.routing(), Routing::Open);
        assert_eq!(board.undecided_grids().len(), 9);
        assert_eq!(board.result(), Outcome::Undecided);
    }

    #[test]
    fn test_routing_follows_cell_index() {
        let mut board = MetaBoard::new();
        apply(&mut board, Player::X, 4, 7);
        assert_eq!(board.routing(), Routing::Forced(Position::BottomCenter));
    }

    #[test]
    fn test_routing_violation_rejected() {
        let mut board = MetaBoard::new();
        apply(&mut board, Player::X, 4, 7);

        let stray = Move::new(Player::O, Position::TopLeft, Position::Center);
        let err = board.apply(&stray).unwrap_err();
        assert_eq!(
            err,
            MoveError::WrongGrid {
                required: Position::BottomCenter,
                chosen: Position::TopLeft,
            }
        );
        // Rejection leaves the board untouched.
        assert!(board.grid(Position::TopLeft).board().is_empty(Position::Center));
        assert_eq!(board.routing(), Routing::Forced(Position::BottomCenter));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut board = MetaBoard::new();
        apply(&mut board, Player::X, 4, 4);

        let repeat = Move::new(Player::O, Position::Center, Position::Center);
        assert_eq!(
            board.apply(&repeat).unwrap_err(),
            MoveError::SquareOccupied {
                grid: Position::Center,
                cell: Position::Center,
            }
        );
    }

    #[test]
    fn test_winning_a_sub_board_caches_the_outcome() {
        let mut board = MetaBoard::new();
        // X takes the top row of grid 4; O echoes back from the grids
        // X's cells route to.
        apply(&mut board, Player::X, 4, 0);
        apply(&mut board, Player::O, 0, 4);
        apply(&mut board, Player::X, 4, 1);
        apply(&mut board, Player::O, 1, 4);
        apply(&mut board, Player::X, 4, 2);

        assert_eq!(board.grid(Position::Center).outcome(), Outcome::Won(Player::X));
        assert_eq!(board.undecided_grids().len(), 8);
    }

    #[test]
    fn test_decided_grid_rejects_further_moves() {
        let mut board = MetaBoard::new();
        apply(&mut board, Player::X, 4, 0);
        apply(&mut board, Player::O, 0, 4);
        apply(&mut board, Player::X, 4, 1);
        apply(&mut board, Player::O, 1, 4);
        apply(&mut board, Player::X, 4, 2);
        // Cell 2 routes into grid 2; aiming back at the decided center
        // grid fails on the decided check before routing is consulted.
        let back = Move::new(Player::O, Position::Center, Position::BottomRight);
        assert_eq!(
            board.apply(&back).unwrap_err(),
            MoveError::GridDecided(Position::Center)
        );

        // Even under open routing the decided grid stays closed.
        apply(&mut board, Player::O, 2, 4);
        assert_eq!(board.routing(), Routing::Open);
        let into_decided = Move::new(Player::X, Position::Center, Position::BottomRight);
        assert_eq!(
            board.apply(&into_decided).unwrap_err(),
            MoveError::GridDecided(Position::Center)
        );
    }

    #[test]
    fn test_routing_to_decided_grid_opens_up() {
        let mut board = MetaBoard::new();
        apply(&mut board, Player::X, 4, 0);
        apply(&mut board, Player::O, 0, 4);
        apply(&mut board, Player::X, 4, 1);
        apply(&mut board, Player::O, 1, 4);
        apply(&mut board, Player::X, 4, 2);
        assert_eq!(board.routing(), Routing::Forced(Position::TopRight));

        // O plays cell 4 of grid 2; grid 4 is decided, so routing opens.
        apply(&mut board, Player::O, 2, 4);
        assert_eq!(board.routing(), Routing::Open);
    }

    #[test]
    fn test_filling_a_sub_board_draws_it() {
        let mut board = MetaBoard::new();
        // Fill grid 0 to the drawn pattern X O X / X O O / O X X,
        // ping-ponging through cell 0 of the other grids to satisfy
        // routing.
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        apply(&mut board, marks[0], 0, 0);
        for cell in 1..9 {
            apply(&mut board, marks[cell], 0, cell);
            if cell < 8 {
                apply(&mut board, marks[cell].opponent(), cell, 0);
            }
        }

        assert_eq!(board.grid(Position::TopLeft).outcome(), Outcome::Drawn);
        // The drawn grid is closed to further play.
        assert_eq!(
            board
                .apply(&Move::new(Player::X, Position::TopLeft, Position::Center))
                .unwrap_err(),
            MoveError::GridDecided(Position::TopLeft)
        );
    }
}
