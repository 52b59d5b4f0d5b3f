//! Deciding the match from the nine sub-board outcomes.

use super::lines::line_owner;
use crate::types::Outcome;

/// Computes the match outcome from the sub-board outcomes.
///
/// The same 8-line scan as at the sub-board level, with a won
/// sub-board standing in for a claimed cell. A drawn sub-board never
/// claims a line for anyone, but it does count as decided: once all
/// nine sub-boards are decided without a winning line the match is
/// drawn.
pub fn meta_outcome(outcomes: &[Outcome; 9]) -> Outcome {
    let mut claims = [None; 9];
    for (slot, outcome) in claims.iter_mut().zip(outcomes) {
        *slot = outcome.winner();
    }

    if let Some(winner) = line_owner(&claims) {
        return Outcome::Won(winner);
    }

    if outcomes.iter().all(|o| o.is_decided()) {
        Outcome::Drawn
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_all_undecided() {
        assert_eq!(meta_outcome(&[Outcome::Undecided; 9]), Outcome::Undecided);
    }

    #[test]
    fn test_diagonal_of_won_grids() {
        let mut outcomes = [Outcome::Undecided; 9];
        outcomes[0] = Outcome::Won(Player::X);
        outcomes[4] = Outcome::Won(Player::X);
        outcomes[8] = Outcome::Won(Player::X);
        assert_eq!(meta_outcome(&outcomes), Outcome::Won(Player::X));
    }

    #[test]
    fn test_drawn_grid_does_not_claim_a_line() {
        let mut outcomes = [Outcome::Undecided; 9];
        outcomes[0] = Outcome::Won(Player::O);
        outcomes[1] = Outcome::Drawn;
        outcomes[2] = Outcome::Won(Player::O);
        assert_eq!(meta_outcome(&outcomes), Outcome::Undecided);
    }

    #[test]
    fn test_all_decided_without_line_is_drawn() {
        let mut outcomes = [Outcome::Drawn; 9];
        outcomes[0] = Outcome::Won(Player::X);
        outcomes[1] = Outcome::Won(Player::O);
        assert_eq!(meta_outcome(&outcomes), Outcome::Drawn);
    }

    #[test]
    fn test_all_drawn_is_drawn() {
        assert_eq!(meta_outcome(&[Outcome::Drawn; 9]), Outcome::Drawn);
    }

    #[test]
    fn test_one_undecided_grid_keeps_match_open() {
        let mut outcomes = [Outcome::Drawn; 9];
        outcomes[5] = Outcome::Undecided;
        assert_eq!(meta_outcome(&outcomes), Outcome::Undecided);
    }
}
