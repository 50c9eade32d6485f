//! File-backed score store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::store::{Outcome, ScoreStore, ScoreTally, StoreError};

/// Score store persisting the tally as a single JSON document.
///
/// Reads are forgiving: a missing or unparseable file loads as all
/// zeros. Writes go through the full tally, so a lost write costs at
/// most one count.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Creates a store backed by the file at `path`. The file is not
    /// created until the first write.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Creating JSON score store");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, tally: &ScoreTally) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(tally)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "Tally persisted");
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ScoreTally {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                debug!(error = %e, "No readable tally file; starting from zero");
                return ScoreTally::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(tally) => tally,
            Err(e) => {
                warn!(error = %e, "Tally file unparseable; treating as zero");
                ScoreTally::default()
            }
        }
    }

    #[instrument(skip(self))]
    fn increment(&mut self, outcome: Outcome) -> Result<(), StoreError> {
        let mut tally = self.load();
        tally.bump(outcome);
        self.persist(&tally)?;
        info!(%outcome, %tally, "Score recorded");
        Ok(())
    }

    #[instrument(skip(self))]
    fn reset(&mut self) -> Result<(), StoreError> {
        self.persist(&ScoreTally::default())?;
        info!("Scores zeroed");
        Ok(())
    }
}
