use crate::store::{LoadResult, SessionStore, SessionStoreError, SessionStoreResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use mp_core::Identity;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Credential record kept as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session.json"))
    }
}

impl SessionStore for FileSessionStore {
    /// Returns:
    /// - `identity: Some(..)` - loaded successfully
    /// - both `None` - no file (never signed in, or signed out)
    /// - `corruption_error: Some(..)` - file exists but is not a valid identity
    fn load(&self) -> SessionStoreResult<LoadResult> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No session file at {:?}", self.path);
                return Ok(LoadResult::empty());
            }
            Err(e) => return Err(SessionStoreError::file_read(self.path.clone(), e)),
        };

        let result = LoadResult::parse_bytes(&bytes);
        match (&result.identity, &result.corruption_error) {
            (Some(identity), _) => info!(
                "Loaded session for {} ({})",
                identity.email, identity.role
            ),
            (None, Some(e)) => warn!("Session file corrupted at {:?}: {e}", self.path),
            (None, None) => {}
        }

        Ok(result)
    }

    /// Atomic write: temp file, fsync, rename over the final path.
    fn save(&self, identity: &Identity) -> SessionStoreResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir).map_err(|e| SessionStoreError::dir_creation(dir.clone(), e))?;

        let temp_path = dir.join(format!("{}.tmp.{}", self.file_name(), std::process::id()));

        let json = serde_json::to_string_pretty(identity)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionStoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionStoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionStoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionStoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Saved session for {} ({})", identity.email, identity.role);
        Ok(())
    }

    fn clear(&self) -> SessionStoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared session file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::file_remove(self.path.clone(), e)),
        }
    }

    /// Renames the file to `<name>.corrupted.<timestamp>` so it can be
    /// inspected later. The store is empty afterwards.
    fn discard_corrupted(&self) -> SessionStoreResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .parent_dir()
            .join(format!("{}.corrupted.{timestamp}", self.file_name()));

        fs::rename(&self.path, &backup_path).map_err(SessionStoreError::backup_failed)?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(())
    }
}
