//! Command-line interface for the nines console game.

use clap::Parser;

/// Nines - two-player meta tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "nines")]
#[command(about = "Two-player meta tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip the rules summary printed at startup.
    #[arg(long)]
    pub no_rules: bool,
}
