//! Tic-tac-toe match engine with persisted score tallies.
//!
//! # Architecture
//!
//! - **Engine**: owns the board, validates moves, detects terminal
//!   states, and reports outcomes ([`MatchEngine`])
//! - **Rules**: stateless win/draw detection ([`rules`])
//! - **Store**: durable score tallies behind the [`ScoreStore`] trait
//! - **Front end**: any caller driving the engine through
//!   `attempt_move`/`reset` and rendering [`MatchView`] snapshots;
//!   the engine has no rendering dependency
//!
//! # Example
//!
//! ```
//! use ttt_match::{MatchEngine, MemoryScoreStore, MoveOutcome};
//!
//! let mut engine = MatchEngine::new(MemoryScoreStore::new());
//! // X opens in the center.
//! assert_eq!(engine.attempt_move(4), Ok(MoveOutcome::Placed));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod position;
pub mod rules;
mod store;
mod types;

// Crate-level exports - engine
pub use engine::{
    InvalidIndex, MatchEngine, MatchResult, MatchState, MatchView, MoveOutcome, RejectReason,
};

// Crate-level exports - score store
pub use store::{JsonScoreStore, MemoryScoreStore, Outcome, ScoreStore, ScoreTally, StoreError};

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, Player, Square};
