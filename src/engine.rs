//! The match engine: board ownership, move validation, terminal
//! detection, and score reporting.
//!
//! The engine owns all mutable match state. Front ends drive it
//! through [`MatchEngine::attempt_move`] and [`MatchEngine::reset`]
//! and render from [`MatchEngine::view`] snapshots; they never touch
//! the board directly.

use crate::position::Position;
use crate::rules;
use crate::store::{Outcome, ScoreStore, ScoreTally};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Match is ongoing; moves are accepted.
    Active,
    /// Match ended with a winner. Terminal until reset.
    Won,
    /// Match ended in a draw. Terminal until reset.
    Draw,
}

/// Result of a finished match, produced once per terminal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line, in fixed evaluation order.
        line: [Position; 3],
    },
    /// Board filled with no line.
    Draw,
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Won { winner, .. } => write!(f, "Player {} wins", winner),
            MatchResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Why a structurally valid move was not applied.
///
/// These are normal no-op signals, not errors: the board is unchanged
/// and the front end can simply do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The match is already over; reset before moving again.
    MatchNotActive,
    /// The target square already holds a mark.
    CellOccupied,
}

/// Outcome of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed; the match continues with the other player.
    Placed,
    /// Mark placed and it ended the match.
    Ended(MatchResult),
    /// Move ignored; nothing changed.
    Rejected(RejectReason),
}

/// Move index outside the board. This is a caller contract violation,
/// not a game situation, so it is a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move index {} is out of range (expected 0-8)", index)]
pub struct InvalidIndex {
    /// The offending index.
    pub index: usize,
}

/// Read-only snapshot of match state for rendering.
///
/// An owned copy: mutating it never affects the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    /// The board.
    pub board: Board,
    /// Player to move (meaningful while the match is active; frozen
    /// at its pre-terminal value once the match ends).
    pub current_player: Player,
    /// Lifecycle state.
    pub state: MatchState,
    /// Result of the last terminal transition, if any.
    pub result: Option<MatchResult>,
}

/// Tic-tac-toe match engine with a score store collaborator.
///
/// Owns the board, the current player, and the match state. Reports
/// each terminal transition to the store exactly once; store failures
/// are logged and never interrupt play.
#[derive(Debug)]
pub struct MatchEngine<S: ScoreStore> {
    board: Board,
    current: Player,
    state: MatchState,
    result: Option<MatchResult>,
    store: S,
}

impl<S: ScoreStore> MatchEngine<S> {
    /// Creates a new engine with an empty board, X to move.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        info!("Creating match engine");
        Self {
            board: Board::new(),
            current: Player::X,
            state: MatchState::Active,
            result: None,
            store,
        }
    }

    /// Attempts to place the current player's mark at the given index.
    ///
    /// Rejections (terminal state, occupied square) are reported in
    /// the `Ok` value and leave the engine untouched. On a terminal
    /// transition the score store is incremented once and the current
    /// player is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIndex`] if `index` is not in `0..9`.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveOutcome, InvalidIndex> {
        let pos = Position::from_index(index).ok_or(InvalidIndex { index })?;

        if self.state != MatchState::Active {
            debug!(state = ?self.state, "Move rejected: match not active");
            return Ok(MoveOutcome::Rejected(RejectReason::MatchNotActive));
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "Move rejected: square occupied");
            return Ok(MoveOutcome::Rejected(RejectReason::CellOccupied));
        }

        self.board.set(pos, Square::Occupied(self.current));
        debug!(%pos, "Mark placed");

        if let Some(line) = rules::winning_line(&self.board) {
            let result = MatchResult::Won {
                winner: line.player,
                line: line.positions,
            };
            self.state = MatchState::Won;
            self.result = Some(result);
            info!(winner = %line.player, "Match won");
            self.record_outcome(Outcome::from(line.player));
            return Ok(MoveOutcome::Ended(result));
        }

        if rules::is_full(&self.board) {
            self.state = MatchState::Draw;
            self.result = Some(MatchResult::Draw);
            info!("Match drawn");
            self.record_outcome(Outcome::Draw);
            return Ok(MoveOutcome::Ended(MatchResult::Draw));
        }

        self.current = self.current.opponent();
        Ok(MoveOutcome::Placed)
    }

    /// Resets the match to a clean active state.
    ///
    /// With `keep_current_player` the turn is preserved (quick
    /// restart); otherwise X moves first. Safe to call repeatedly.
    #[instrument(skip(self))]
    pub fn reset(&mut self, keep_current_player: bool) {
        info!(keep_current_player, "Resetting match");
        self.board = Board::new();
        self.state = MatchState::Active;
        self.result = None;
        if !keep_current_player {
            self.current = Player::X;
        }
    }

    /// Returns a read-only snapshot of the match.
    pub fn view(&self) -> MatchView {
        MatchView {
            board: self.board.clone(),
            current_player: self.current,
            state: self.state,
            result: self.result,
        }
    }

    /// Returns the persisted score tally.
    pub fn scores(&self) -> ScoreTally {
        self.store.load()
    }

    /// Zeroes the persisted score tally. Confirmation is the caller's
    /// responsibility.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("Resetting score tally");
        if let Err(e) = self.store.reset() {
            warn!(error = %e, "Score reset failed; continuing");
        }
    }

    /// Reports a terminal outcome to the store, once. Failures are
    /// logged only; scores are auxiliary state.
    fn record_outcome(&mut self, outcome: Outcome) {
        if let Err(e) = self.store.increment(outcome) {
            warn!(error = %e, %outcome, "Score update failed; continuing");
        }
    }
}
