//! History invariant: the move log and the boards agree.

use super::Invariant;
use crate::position::Position;
use crate::session::Session;
use crate::types::Square;
use strum::IntoEnumIterator;

/// Invariant: the history accounts for every mark on every board.
///
/// The number of occupied squares across all sub-boards equals the
/// history length, and each recorded move finds its own mark at the
/// cell it played.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let filled: usize = Position::iter()
            .map(|at| session.board().grid(at).board().mark_count())
            .sum();
        if filled != session.history().len() {
            return false;
        }

        session.history().iter().all(|mov| {
            session.board().grid(mov.grid).board().get(mov.cell)
                == Square::Occupied(mov.player)
        })
    }

    fn description() -> &'static str {
        "Move history matches the marks on the boards"
    }
}
