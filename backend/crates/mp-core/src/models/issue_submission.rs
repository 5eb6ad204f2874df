use crate::validation::is_blank;
use crate::{CoreError, CoreResult, NewUser};

use std::path::PathBuf;

/// Everything the issue submission view collects before sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSubmission {
    pub reporter: NewUser,
    pub description: String,
    pub image: Option<PathBuf>,
}

impl IssueSubmission {
    /// Checks run in form order: contact details, then description, then
    /// the email format.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let reporter = &self.reporter;
        if is_blank(&reporter.name) || is_blank(&reporter.email) || is_blank(&reporter.phone) {
            return self.reporter.validate();
        }

        if is_blank(&self.description) {
            return Err(CoreError::validation(
                "description",
                "Missing Description: please describe the issue",
            ));
        }

        self.reporter.validate()
    }
}
