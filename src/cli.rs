//! Command-line interface for ttt_match.

use clap::{Parser, Subcommand};

use ttt_match::Position;

/// Tic-tac-toe for two players at one terminal, with scores kept
/// between sessions.
#[derive(Parser, Debug)]
#[command(name = "ttt_match")]
#[command(about = "Two-player tic-tac-toe with persisted scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the score tally file (created on first finished match)
    #[arg(long, default_value = "ttt_scores.json")]
    pub score_file: std::path::PathBuf,

    /// Subcommand to run (defaults to playing a match)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play matches interactively
    Play {
        /// Keep scores in memory only; the tally file is not touched
        #[arg(long)]
        ephemeral: bool,
    },

    /// Print the persisted score tally
    Scores,

    /// Zero the persisted score tally
    ResetScores {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Parses user input for a cell: the 1-9 number shown on the board,
/// or a position label like "center".
pub fn parse_cell(input: &str) -> Option<usize> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        return (1..=9).contains(&n).then(|| n - 1);
    }
    Position::from_label_or_number(trimmed).map(Position::to_index)
}
