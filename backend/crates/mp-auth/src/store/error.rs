use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while reading or writing the credential record.
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read session file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write session file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to remove session file at {path}: {source} {location}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize identity: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to backup corrupted session file: {source} {location}")]
    BackupFailed {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl SessionStoreError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::FileRemove { .. }
                | Self::AtomicRename { .. }
        )
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::DirCreation { .. } | Self::FileWrite { .. } => {
                "Unable to write to the configuration directory. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read the session file. \
                   The file may be locked by another process."
            }
            Self::FileRemove { .. } => {
                "Unable to remove the session file. \
                   Check file permissions, or delete it by hand to sign out."
            }
            Self::Serialization { .. } => {
                "Internal error preparing session data. \
                   Please report this issue."
            }
            Self::AtomicRename { .. } => {
                "Unable to save the session file safely. \
                   Check disk space and try again."
            }
            Self::BackupFailed { .. } => {
                "Unable to backup the corrupted session file. \
                   Check file permissions in the configuration directory."
            }
        }
    }

    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileRead error at caller location.
    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileWrite error at caller location.
    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileRemove error at caller location.
    #[track_caller]
    pub fn file_remove(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRemove {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates BackupFailed error at caller location.
    #[track_caller]
    pub fn backup_failed(source: std::io::Error) -> Self {
        Self::BackupFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionStoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionStoreError>;
