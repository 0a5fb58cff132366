use std::sync::{Arc, RwLock};

use super::{DEFAULT_PATTERN_SOURCES, PatternSet};

/// Holds the active [`PatternSet`] and swaps it wholesale on reconfiguration.
///
/// Readers take an `Arc` snapshot once and keep using it, so a cleaning pass
/// never observes a half-updated set.
#[derive(Debug)]
pub struct PatternStore {
    current: RwLock<Arc<PatternSet>>,
}

impl PatternStore {
    pub fn new(set: PatternSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self::default();
        store.replace(sources);
        store
    }

    pub fn current(&self) -> Arc<PatternSet> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Compiles `sources` and installs the result. Rejected sources are logged and skipped.
    pub fn replace<I, S>(&self, sources: I) -> Arc<PatternSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (set, rejected) = PatternSet::compile_reporting(sources);
        for why in &rejected {
            tracing::warn!("Invalid bot pattern skipped: {why}");
        }
        self.install(set)
    }

    pub fn reset(&self) -> Arc<PatternSet> {
        self.replace(DEFAULT_PATTERN_SOURCES)
    }

    fn install(&self, set: PatternSet) -> Arc<PatternSet> {
        let set = Arc::new(set);
        tracing::debug!("Installing bot patterns: {:?}", set.sources().collect::<Vec<_>>());
        match self.current.write() {
            Ok(mut guard) => *guard = Arc::clone(&set),
            Err(poisoned) => *poisoned.into_inner() = Arc::clone(&set),
        }
        set
    }
}

impl Default for PatternStore {
    fn default() -> Self {
        Self::new(PatternSet::default())
    }
}
