use crate::{Role, View};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Technician.as_str(), "technician");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert_eq!(Role::from_str("technician").unwrap(), Role::Technician);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("Admin").is_err());
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn test_role_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Role::Technician).unwrap(), "\"technician\"");
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn test_each_role_maps_to_its_own_view() {
    assert_eq!(View::for_role(Role::User), View::IssueSubmission);
    assert_eq!(View::for_role(Role::Technician), View::TechnicianTasks);
    assert_eq!(View::for_role(Role::Admin), View::AdminOverview);
}

#[test]
fn test_unknown_role_name_falls_back_to_issue_submission() {
    assert_eq!(View::from_role_name("janitor"), View::IssueSubmission);
    assert_eq!(View::from_role_name(""), View::IssueSubmission);
    assert_eq!(View::from_role_name("admin"), View::AdminOverview);
}
