//! Nines - meta tic-tac-toe for the console.
//!
//! All game rules live in `nines_engine`; this binary renders the
//! board, collects moves, and relays them to the session.

#![warn(missing_docs)]

mod app;
mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr, keeping stdout clean for the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    app::run(&cli)
}
