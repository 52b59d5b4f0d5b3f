//! Deciding a single 3x3 board of marks.

use super::lines::line_owner;
use crate::position::Position;
use crate::types::{Board, Outcome};
use strum::IntoEnumIterator;

/// Computes the outcome of one board of marks.
///
/// Three equal marks on a line win it for their owner; a full board
/// with no such line is drawn; anything else is still undecided. Pure
/// and idempotent: recomputing on an unchanged board yields the same
/// outcome.
pub fn board_outcome(board: &Board) -> Outcome {
    let mut claims = [None; 9];
    for pos in Position::iter() {
        claims[pos.to_index()] = board.get(pos).owner();
    }

    if let Some(winner) = line_owner(&claims) {
        return Outcome::Won(winner);
    }

    if board.is_full() {
        Outcome::Drawn
    } else {
        Outcome::Undecided
    }
}
