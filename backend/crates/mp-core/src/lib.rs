pub mod dashboard;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use dashboard::admin_overview::{AdminOverview, SystemStats};
pub use dashboard::technician_dashboard::{TechnicianDashboard, TechnicianTask};
pub use error::{CoreError, Result as CoreResult};
pub use models::identity::Identity;
pub use models::issue::Issue;
pub use models::issue_receipt::IssueReceipt;
pub use models::issue_status::{IssueAction, IssueStatus};
pub use models::issue_submission::IssueSubmission;
pub use models::new_user::NewUser;
pub use models::portal_user::PortalUser;
pub use models::role::Role;
pub use models::technician::Technician;
pub use models::technician_status::TechnicianStatus;
pub use models::view::View;
pub use validation::is_valid_email;
