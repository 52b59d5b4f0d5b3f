//! Outcome invariant: cached outcomes agree with recomputation.

use super::Invariant;
use crate::position::Position;
use crate::rules;
use crate::session::Session;
use strum::IntoEnumIterator;

/// Invariant: every cached outcome is honest.
///
/// Each sub-board's cached outcome equals what the rules compute from
/// its squares, and the session's match outcome equals what the meta
/// rules compute from the sub-board outcomes.
pub struct OutcomeConsistentInvariant;

impl Invariant<Session> for OutcomeConsistentInvariant {
    fn holds(session: &Session) -> bool {
        for at in Position::iter() {
            let grid = session.board().grid(at);
            if grid.outcome() != rules::board_outcome(grid.board()) {
                return false;
            }
        }

        session.outcome() == rules::meta_outcome(&session.board().outcomes())
    }

    fn description() -> &'static str {
        "Cached sub-board and match outcomes match recomputation"
    }
}
