pub mod identity;
pub mod issue;
pub mod issue_receipt;
pub mod issue_status;
pub mod issue_submission;
pub mod new_user;
pub mod portal_user;
pub mod role;
pub mod technician;
pub mod technician_status;
pub mod view;
