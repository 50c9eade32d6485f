//! Terminal front end for the tic-tac-toe match engine.
//!
//! All game logic lives in the library; this binary only renders
//! [`MatchView`] snapshots and turns keyboard input into engine
//! commands.

#![warn(missing_docs)]

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_match::{
    JsonScoreStore, MatchEngine, MatchResult, MatchState, MatchView, MemoryScoreStore,
    MoveOutcome, Position, RejectReason, ScoreStore, ScoreTally, Square,
};

fn main() -> Result<()> {
    // Default to warnings only so log lines don't interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let store = JsonScoreStore::new(&cli.score_file);

    match cli.command {
        None | Some(Command::Play { ephemeral: false }) => {
            run_play(MatchEngine::new(store))
        }
        Some(Command::Play { ephemeral: true }) => {
            run_play(MatchEngine::new(MemoryScoreStore::new()))
        }
        Some(Command::Scores) => run_scores(&store),
        Some(Command::ResetScores { yes }) => run_reset_scores(store, yes),
    }
}

/// Interactive play loop: render, read a command, drive the engine.
fn run_play<S: ScoreStore>(mut engine: MatchEngine<S>) -> Result<()> {
    info!("Starting interactive match");
    println!("Tic-tac-toe for two players.");
    println!("Enter a cell (1-9 or a label like 'center'), 'restart', 'new', 'scores', 'quit'.");

    let stdin = io::stdin();
    loop {
        let view = engine.view();
        match view.state {
            MatchState::Active => {
                println!("\n{}", view.board.display());
                print!("Turn: {} > ", view.current_player);
                io::stdout().flush()?;
                let Some(line) = read_line(&stdin)? else { break };
                let input = line.trim();
                match input {
                    "" => {}
                    "quit" | "q" => break,
                    // Quick restart: same player keeps the turn.
                    "restart" => engine.reset(true),
                    "new" => engine.reset(false),
                    "scores" => println!("{}", engine.scores()),
                    _ => handle_cell_input(&mut engine, input)?,
                }
            }
            MatchState::Won | MatchState::Draw => {
                print!("Enter for the next match, 'new' to give X the first turn, 'quit': ");
                io::stdout().flush()?;
                let Some(line) = read_line(&stdin)? else { break };
                match line.trim() {
                    "quit" | "q" => break,
                    "new" => engine.reset(false),
                    _ => engine.reset(true),
                }
            }
        }
    }

    println!("\nFinal scores - {}", engine.scores());
    Ok(())
}

/// Applies one cell selection to the engine and prints the reaction.
fn handle_cell_input<S: ScoreStore>(engine: &mut MatchEngine<S>, input: &str) -> Result<()> {
    let Some(index) = cli::parse_cell(input) else {
        println!("Unrecognized input: {input}");
        return Ok(());
    };

    match engine.attempt_move(index)? {
        MoveOutcome::Placed => {}
        MoveOutcome::Ended(result) => show_result(engine, result),
        MoveOutcome::Rejected(RejectReason::CellOccupied) => {
            println!("That square is already taken.");
        }
        MoveOutcome::Rejected(RejectReason::MatchNotActive) => {}
    }
    Ok(())
}

/// Prints the final board (winning line highlighted), the result
/// message, and the running scores.
fn show_result<S: ScoreStore>(engine: &MatchEngine<S>, result: MatchResult) {
    let view = engine.view();
    println!("\n{}", render_final_board(&view));
    match result {
        MatchResult::Won { winner, line } => {
            let labels: Vec<&str> = line.iter().map(|p| p.label()).collect();
            println!("Player {} wins! ({})", winner, labels.join(", "));
        }
        MatchResult::Draw => println!("It's a draw!"),
    }
    println!("Scores - {}", engine.scores());
}

/// Renders the board with the winning line's squares starred.
fn render_final_board(view: &MatchView) -> String {
    let highlighted: &[Position] = match &view.result {
        Some(MatchResult::Won { line, .. }) => line,
        _ => &[],
    };

    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let symbol = match view.board.get(pos) {
                Square::Empty => (pos.to_index() + 1).to_string(),
                Square::Occupied(player) => player.to_string(),
            };
            if highlighted.contains(&pos) {
                out.push_str(&format!("*{symbol}*"));
            } else {
                out.push_str(&format!(" {symbol} "));
            }
            if col < 2 {
                out.push('|');
            }
        }
        if row < 2 {
            out.push_str("\n---+---+---\n");
        }
    }
    out
}

/// Prints the persisted tally.
fn run_scores(store: &JsonScoreStore) -> Result<()> {
    println!("{}", store.load());
    Ok(())
}

/// Zeroes the tally, prompting first unless `--yes` was passed.
fn run_reset_scores(mut store: JsonScoreStore, yes: bool) -> Result<()> {
    if !yes {
        print!("Reset all scores? [y/N] ");
        io::stdout().flush()?;
        let stdin = io::stdin();
        let confirmed = matches!(
            read_line(&stdin)?.as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes")
        );
        if !confirmed {
            println!("Scores left unchanged.");
            return Ok(());
        }
    }

    store.reset()?;
    println!("Scores have been reset. {}", ScoreTally::default());
    Ok(())
}

/// Reads one line from stdin; `None` on end of input.
fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    let mut buf = String::new();
    let n = stdin.lock().read_line(&mut buf)?;
    if n == 0 { Ok(None) } else { Ok(Some(buf)) }
}
