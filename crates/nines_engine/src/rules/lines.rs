//! The 8-line scan shared by both levels of the game.

use crate::position::Position;
use crate::types::Player;

/// The eight winning lines of a 3x3 board.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds a player owning three claims in a line, if any.
///
/// `claims` is a row-major board of nine slots; `Some(player)` marks a
/// slot claimed by that player. Used with square marks at the
/// sub-board level and with sub-board winners at the meta level.
pub fn line_owner(claims: &[Option<Player>; 9]) -> Option<Player> {
    for [a, b, c] in LINES {
        let first = claims[a.to_index()];
        if first.is_some()
            && first == claims[b.to_index()]
            && first == claims[c.to_index()]
        {
            return first;
        }
    }
    None
}
