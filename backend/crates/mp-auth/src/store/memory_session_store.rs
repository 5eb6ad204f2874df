use crate::store::{LoadResult, SessionStore, SessionStoreResult};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use mp_core::Identity;

/// In-process store. Used for throwaway sessions and as a test double: it
/// counts every call so callers can assert that no I/O happened.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<String>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    clears: AtomicUsize,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw record, well-formed or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
            ..Self::default()
        }
    }

    pub fn with_identity(identity: &Identity) -> SessionStoreResult<Self> {
        Ok(Self::with_raw(serde_json::to_string(identity)?))
    }

    /// Current raw record, without counting as a load.
    pub fn raw(&self) -> Option<String> {
        self.record().clone()
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    /// Total number of store operations performed.
    pub fn operations(&self) -> usize {
        self.loads() + self.saves() + self.clears()
    }

    fn record(&self) -> MutexGuard<'_, Option<String>> {
        // A panic while holding the lock cannot leave a half-written String.
        self.record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> SessionStoreResult<LoadResult> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .record()
            .as_deref()
            .map(LoadResult::parse)
            .unwrap_or_default())
    }

    fn save(&self, identity: &Identity) -> SessionStoreResult<()> {
        let json = serde_json::to_string(identity)?;
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.record() = Some(json);
        Ok(())
    }

    fn clear(&self) -> SessionStoreResult<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.record() = None;
        Ok(())
    }
}
