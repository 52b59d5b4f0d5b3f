//! The interactive game loop.
//!
//! Collects and validates raw input, relays moves to the session, and
//! retries on any rejection. Parsing failures never reach the engine;
//! illegal moves come back as [`MoveError`](nines_engine::MoveError)
//! values and turn into retry prompts.

use crate::cli::Cli;
use crate::render;
use anyhow::{Result, bail};
use nines_engine::{Player, Position, Routing, Session};
use std::io::Write;
use tracing::{debug, info};

/// Runs matches until the players decline another round.
pub fn run(cli: &Cli) -> Result<()> {
    println!("Welcome to Nines!");
    if !cli.no_rules {
        println!();
        println!("{}", render::rules_summary());
    }

    let mut session = Session::new();
    info!("Session started");

    loop {
        while !session.is_over() {
            println!("\n{}", render::board(&session));

            let Some(grid) = choose_grid(&session)? else {
                continue;
            };
            let Some(cell) = choose_cell(session.to_move())? else {
                continue;
            };

            if let Err(error) = session.submit(grid, cell) {
                debug!(%error, "Submission rejected");
                println!("Illegal move: {error}. Try again.");
            }
        }

        println!("\n{}", render::board(&session));
        println!("{}", render::result_banner(session.outcome()));

        if !play_again()? {
            break;
        }
        session.reset();
        println!("\nStarting a new match...");
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Resolves which grid the move goes into.
///
/// Forced routing answers by itself; open routing asks the player to
/// pick among the undecided grids. Returns `None` when the input was
/// unusable and the whole prompt should repeat.
fn choose_grid(session: &Session) -> Result<Option<Position>> {
    match session.board().routing() {
        Routing::Forced(grid) => {
            println!(
                "Player {}, you must play in grid {}.",
                session.to_move(),
                grid.to_number()
            );
            Ok(Some(grid))
        }
        Routing::Open => {
            let available = session.available_grids();
            let numbers: Vec<usize> = available.iter().map(|g| g.to_number()).collect();
            println!("Open grids: {numbers:?}");

            let prompt = format!("Player {}, choose a grid (1-9): ", session.to_move());
            let Some(number) = prompt_number(&prompt)? else {
                return Ok(None);
            };
            match Position::from_number(number) {
                Some(grid) if available.contains(&grid) => Ok(Some(grid)),
                Some(grid) => {
                    println!("Grid {} is already decided. Pick another.", grid.to_number());
                    Ok(None)
                }
                None => {
                    println!("Enter a grid number between 1 and 9.");
                    Ok(None)
                }
            }
        }
    }
}

/// Asks for the cell within the chosen grid.
fn choose_cell(player: Player) -> Result<Option<Position>> {
    let prompt = format!("Player {player}, choose a cell (1-9): ");
    let Some(number) = prompt_number(&prompt)? else {
        return Ok(None);
    };
    match Position::from_number(number) {
        Some(cell) => Ok(Some(cell)),
        None => {
            println!("Enter a cell number between 1 and 9.");
            Ok(None)
        }
    }
}

fn play_again() -> Result<bool> {
    loop {
        let answer = read_trimmed("\nPlay another match? (y/n): ")?.to_lowercase();
        match answer.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer 'y' or 'n'."),
        }
    }
}

fn prompt_number(prompt: &str) -> Result<Option<usize>> {
    let line = read_trimmed(prompt)?;
    match line.parse::<usize>() {
        Ok(number) => Ok(Some(number)),
        Err(_) => {
            println!("'{line}' is not a number.");
            Ok(None)
        }
    }
}

fn read_trimmed(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let bytes = std::io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}
