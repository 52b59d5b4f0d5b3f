//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::session::Session;
use crate::types::Player;

/// Invariant: players alternate turns.
///
/// The move history must show X, O, X, O, ... with X first, and the
/// player to move must agree with the history. The turn does not pass
/// on the concluding move, so a finished match leaves the last mover
/// on turn.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if session.is_over() {
            match history.last() {
                Some(last) => session.to_move() == last.player,
                None => true,
            }
        } else {
            let expected = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            session.to_move() == expected
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
