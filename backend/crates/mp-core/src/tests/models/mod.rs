mod identity;
mod issue_status;
mod issue_submission;
mod role;
