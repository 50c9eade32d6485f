//! In-memory score store for tests and ephemeral play.

use tracing::instrument;

use crate::store::{Outcome, ScoreStore, ScoreTally, StoreError};

/// Score store holding the tally in memory only. Counts vanish when
/// the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    tally: ScoreTally,
}

impl MemoryScoreStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> ScoreTally {
        self.tally
    }

    #[instrument(skip(self))]
    fn increment(&mut self, outcome: Outcome) -> Result<(), StoreError> {
        self.tally.bump(outcome);
        Ok(())
    }

    #[instrument(skip(self))]
    fn reset(&mut self) -> Result<(), StoreError> {
        self.tally = ScoreTally::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.load(), ScoreTally::default());
        store.increment(Outcome::O).expect("increment");
        assert_eq!(store.load().o, 1);
        store.reset().expect("reset");
        assert_eq!(store.load(), ScoreTally::default());
    }
}
