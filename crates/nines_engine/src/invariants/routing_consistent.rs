//! Routing invariant: routing always reflects the last move played.

use super::Invariant;
use crate::engine::Routing;
use crate::session::Session;

/// Invariant: routing is derived from the last cell played.
///
/// With no moves yet, routing is open. Otherwise the opponent is
/// forced into the sub-board at the last move's cell index, unless
/// that sub-board is decided, in which case routing is open. Decided
/// status is sticky, so rechecking against the current boards is
/// equivalent to the check made when the move was applied.
pub struct RoutingConsistentInvariant;

impl Invariant<Session> for RoutingConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let expected = match session.history().last() {
            None => Routing::Open,
            Some(last) => {
                if session.board().grid(last.cell).is_decided() {
                    Routing::Open
                } else {
                    Routing::Forced(last.cell)
                }
            }
        };
        session.board().routing() == expected
    }

    fn description() -> &'static str {
        "Routing follows the cell index of the last move"
    }
}
