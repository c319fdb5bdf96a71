//! Shared, lockable handle for hosting one match in a multi-threaded process.
//!
//! The whole match is a single critical section: each call takes the lock
//! once, runs the engine operation to completion, and releases it.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::MatchConfig;
use crate::domain::engine::{Applied, ProgressionEngine, Undone};
use crate::domain::modes::GameMode;
use crate::domain::scoring::ScoreDelta;
use crate::domain::selection::RawSelection;
use crate::domain::snapshot::MatchSnapshot;
use crate::domain::transition::MatchTransition;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Default)]
pub struct SharedMatch {
    inner: Arc<Mutex<ProgressionEngine>>,
}

impl SharedMatch {
    pub fn new(config: MatchConfig) -> Self {
        Self::from_engine(ProgressionEngine::new(config))
    }

    pub fn from_engine(engine: ProgressionEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` against the engine under the match lock.
    pub fn with_engine<R>(&self, f: impl FnOnce(&ProgressionEngine) -> R) -> R {
        let guard = self.inner.lock();
        f(&guard)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.with_engine(ProgressionEngine::snapshot)
    }

    pub fn select_mode(&self, mode: GameMode) -> Result<Vec<MatchTransition>, DomainError> {
        self.inner.lock().select_mode(mode)
    }

    pub fn apply_score(&self, mode: GameMode, delta: ScoreDelta) -> Result<Applied, DomainError> {
        self.inner.lock().apply_score(mode, delta)
    }

    pub fn score_selection(
        &self,
        mode: GameMode,
        selection: &RawSelection,
    ) -> Result<Applied, DomainError> {
        self.inner.lock().score_selection(mode, selection)
    }

    pub fn undo_last(&self) -> Result<Undone, DomainError> {
        self.inner.lock().undo_last()
    }

    pub fn complete_kingdom(&self) -> Result<Vec<MatchTransition>, DomainError> {
        self.inner.lock().complete_kingdom()
    }

    pub fn reset(&self) -> Vec<MatchTransition> {
        self.inner.lock().reset()
    }

    /// Score a selection and return the snapshot it produced, atomically.
    pub fn score_and_snapshot(
        &self,
        mode: GameMode,
        selection: &RawSelection,
    ) -> Result<(Applied, MatchSnapshot), DomainError> {
        let mut engine = self.inner.lock();
        let applied = engine.score_selection(mode, selection)?;
        debug!(
            kingdom = engine.kingdom_index(),
            mode = %mode,
            "Scored under shared lock"
        );
        Ok((applied, engine.snapshot()))
    }
}
