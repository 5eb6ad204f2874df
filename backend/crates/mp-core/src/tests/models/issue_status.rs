use crate::{CoreError, IssueAction, IssueStatus};

use std::str::FromStr;

#[test]
fn test_issue_status_from_str() {
    assert_eq!(IssueStatus::from_str("pending").unwrap(), IssueStatus::Pending);
    assert_eq!(
        IssueStatus::from_str("in_progress").unwrap(),
        IssueStatus::InProgress
    );
    assert!(IssueStatus::from_str("in progress").is_err());
}

#[test]
fn test_issue_status_display_name() {
    assert_eq!(IssueStatus::InProgress.display_name(), "in progress");
    assert_eq!(IssueStatus::Resolved.display_name(), "resolved");
}

#[test]
fn test_next_action_only_for_assigned_and_in_progress() {
    assert_eq!(IssueStatus::Pending.next_action(), None);
    assert_eq!(
        IssueStatus::Assigned.next_action(),
        Some(IssueAction::StartWork)
    );
    assert_eq!(
        IssueStatus::InProgress.next_action(),
        Some(IssueAction::MarkResolved)
    );
    assert_eq!(IssueStatus::Resolved.next_action(), None);
}

#[test]
fn test_transition_follows_task_workflow() {
    assert_eq!(
        IssueStatus::Assigned
            .transition_to(IssueStatus::InProgress)
            .unwrap(),
        IssueStatus::InProgress
    );
    assert_eq!(
        IssueStatus::InProgress
            .transition_to(IssueStatus::Resolved)
            .unwrap(),
        IssueStatus::Resolved
    );
}

#[test]
fn test_transition_rejects_skipping_steps() {
    let err = IssueStatus::Assigned
        .transition_to(IssueStatus::Resolved)
        .unwrap_err();

    match err {
        CoreError::InvalidTransition { from, to, .. } => {
            assert_eq!(from, "assigned");
            assert_eq!(to, "resolved");
        }
        other => panic!("Expected InvalidTransition, got {other:?}"),
    }

    assert!(
        IssueStatus::Pending
            .transition_to(IssueStatus::InProgress)
            .is_err()
    );
    assert!(
        IssueStatus::Resolved
            .transition_to(IssueStatus::InProgress)
            .is_err()
    );
}
