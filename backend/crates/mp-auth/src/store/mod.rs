mod error;
mod file_session_store;
mod load_result;
mod memory_session_store;

pub use error::{Result as SessionStoreResult, SessionStoreError};
pub use file_session_store::FileSessionStore;
pub use load_result::LoadResult;
pub use memory_session_store::MemorySessionStore;

use mp_core::Identity;

/// Holder of the single persisted identity.
///
/// Each call reads or writes the whole record at once.
pub trait SessionStore: Send + Sync {
    /// Reads the record. A missing record and a corrupted one are both
    /// `Ok`; see [`LoadResult`].
    fn load(&self) -> SessionStoreResult<LoadResult>;

    /// Replaces whatever is stored with `identity`.
    fn save(&self, identity: &Identity) -> SessionStoreResult<()>;

    /// Removes the record. Clearing an empty store is not an error.
    fn clear(&self) -> SessionStoreResult<()>;

    /// Gets rid of a record that failed to parse.
    fn discard_corrupted(&self) -> SessionStoreResult<()> {
        self.clear()
    }
}
