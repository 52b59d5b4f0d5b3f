//! Text rendering of the meta-board.
//!
//! Each sub-board is drawn as a 3x3 block; the nine blocks are laid
//! out in their own 3x3 arrangement. Decided sub-boards collapse to
//! their owner's mark (or a draw marker), and empty cells of the
//! currently playable sub-boards show the 1-indexed number a player
//! would type to take them.

use nines_engine::{Outcome, Position, Routing, Session, Square};

const GRID_WIDTH: usize = 11;
const BOARD_WIDTH: usize = GRID_WIDTH * 3 + 4 * 2;

/// Renders the whole meta-board.
pub fn board(session: &Session) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(BOARD_WIDTH));
    out.push('\n');
    out.push_str(&format!("{:^width$}\n", "N I N E S", width = BOARD_WIDTH));
    out.push_str(&"=".repeat(BOARD_WIDTH));
    out.push('\n');

    if let Some(banner) = routing_banner(session) {
        out.push('\n');
        out.push_str(&banner);
        out.push('\n');
    }

    for grid_row in 0..3 {
        out.push('\n');
        out.push_str(&grid_labels(grid_row));
        out.push('\n');
        for line in 0..3 {
            for grid_col in 0..3 {
                let at = Position::from_index(grid_row * 3 + grid_col).unwrap();
                out.push_str(&grid_line(session, at, line));
                if grid_col < 2 {
                    out.push_str(" || ");
                }
            }
            out.push('\n');
        }
    }

    out
}

/// One line of text describing where the next move may go, if the
/// match is still running.
pub fn routing_banner(session: &Session) -> Option<String> {
    if session.is_over() {
        return None;
    }
    match session.board().routing() {
        Routing::Forced(grid) => Some(format!("Next move must be in grid {}", grid.to_number())),
        Routing::Open => Some(format!(
            "Player {} can choose any open grid",
            session.to_move()
        )),
    }
}

/// Final result announcement.
pub fn result_banner(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won(player) => {
            format!("Player {player} wins the match with three grids in a row!")
        }
        Outcome::Drawn => "All nine grids are decided: the match is a draw.".to_string(),
        Outcome::Undecided => "The match is still in progress.".to_string(),
    }
}

/// The rules, printed once at startup.
pub fn rules_summary() -> &'static str {
    "How to play:\n\
     - Nine grids (numbered 1-9) are arranged in a 3x3 layout, and\n\
       each grid holds nine cells (also numbered 1-9).\n\
     - The first player may open in any grid. After that, the cell\n\
       number just played names the grid the opponent must use.\n\
     - If that grid is already won or drawn, the opponent may pick\n\
       any open grid instead.\n\
     - Three in a row takes a grid; three grids in a row takes the\n\
       match. A full grid with no line is a draw and counts for\n\
       nobody.\n\
     - Enter the grid number first, then the cell number."
}

fn grid_labels(grid_row: usize) -> String {
    (0..3)
        .map(|grid_col| {
            format!(
                "{:^width$}",
                format!("Grid {}", grid_row * 3 + grid_col + 1),
                width = GRID_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("    ")
}

fn grid_line(session: &Session, at: Position, line: usize) -> String {
    let grid = session.board().grid(at);
    match grid.outcome() {
        Outcome::Won(player) => {
            if line == 1 {
                format!("{:^width$}", player.to_string(), width = GRID_WIDTH)
            } else {
                " ".repeat(GRID_WIDTH)
            }
        }
        Outcome::Drawn => {
            if line == 1 {
                format!("{:^width$}", "drawn", width = GRID_WIDTH)
            } else {
                " ".repeat(GRID_WIDTH)
            }
        }
        Outcome::Undecided => {
            let playable = session.available_grids().contains(&at);
            (0..3)
                .map(|col| {
                    let cell = Position::from_index(line * 3 + col).unwrap();
                    let text = match grid.board().get(cell) {
                        Square::Occupied(player) => player.to_string(),
                        Square::Empty if playable => cell.to_number().to_string(),
                        Square::Empty => " ".to_string(),
                    };
                    format!(" {text} ")
                })
                .collect::<Vec<_>>()
                .join("|")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board_numbers_every_cell() {
        let session = Session::new();
        let text = board(&session);
        assert!(text.contains("Grid 1"));
        assert!(text.contains("Grid 9"));
        assert!(text.contains(" 1 | 2 | 3 "));
        assert!(text.contains("can choose any open grid"));
    }

    #[test]
    fn test_forced_routing_banner() {
        let session = Session::replay(&[(Position::Center, Position::TopLeft)])
            .expect("legal opening");
        assert_eq!(
            routing_banner(&session),
            Some("Next move must be in grid 1".to_string())
        );
    }

    #[test]
    fn test_unplayable_grids_hide_cell_numbers() {
        // After the opening, only grid 1 is playable; the other grids
        // render their empty cells blank.
        let session = Session::replay(&[(Position::Center, Position::TopLeft)])
            .expect("legal opening");
        let text = board(&session);
        // Grid 1 shows numbers, the mark X shows in the center grid.
        assert!(text.contains(" 1 | 2 | 3 "));
        assert!(text.contains(" X "));
    }

    #[test]
    fn test_won_grid_collapses_to_its_owner() {
        let session = Session::replay(&[
            (Position::Center, Position::TopLeft),
            (Position::TopLeft, Position::Center),
            (Position::Center, Position::TopCenter),
            (Position::TopCenter, Position::Center),
            (Position::Center, Position::TopRight),
        ])
        .expect("legal sequence");
        let text = board(&session);
        assert!(text.contains(&format!("{:^11}", "X")));
    }

    #[test]
    fn test_result_banners() {
        assert!(result_banner(Outcome::Won(nines_engine::Player::O)).contains("Player O wins"));
        assert!(result_banner(Outcome::Drawn).contains("draw"));
    }
}
