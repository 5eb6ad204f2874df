use mp_core::Identity;

use serde::Serialize;

/// Result of loading the credential record - distinguishes "not found" from
/// "corrupted".
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a record exists but is not a well-formed identity
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a raw record. Invalid JSON and a missing or unknown role both
    /// count as corruption.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Identity>(raw) {
            Ok(identity) => Self {
                identity: Some(identity),
                corruption_error: None,
            },
            Err(e) => Self::corrupted(e.to_string()),
        }
    }

    /// Like [`LoadResult::parse`], with non-UTF-8 content counted as
    /// corruption.
    pub fn parse_bytes(raw: &[u8]) -> Self {
        match std::str::from_utf8(raw) {
            Ok(text) => Self::parse(text),
            Err(e) => Self::corrupted(e.to_string()),
        }
    }

    fn corrupted(reason: String) -> Self {
        Self {
            identity: None,
            corruption_error: Some(reason),
        }
    }

    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
