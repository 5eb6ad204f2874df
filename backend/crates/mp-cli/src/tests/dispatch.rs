use crate::Cli;
use crate::commands::Commands;
use crate::issue_commands::IssueCommands;
use crate::technician_commands::TechnicianCommands;

use std::path::PathBuf;

use clap::Parser;
use mp_core::{IssueStatus, Role};

#[test]
fn test_parse_login_with_global_flags() {
    let cli = Cli::try_parse_from([
        "mp",
        "login",
        "--email",
        "user@demo.com",
        "--password",
        "123456",
        "--pretty",
        "--server",
        "http://backend:9000",
    ])
    .unwrap();

    assert!(cli.pretty);
    assert_eq!(cli.server.as_deref(), Some("http://backend:9000"));
    match cli.command {
        Commands::Login { email, password } => {
            assert_eq!(email, "user@demo.com");
            assert_eq!(password, "123456");
        }
        _ => panic!("expected login"),
    }
}

#[test]
fn test_parse_register_defaults_to_user_role() {
    let cli = Cli::try_parse_from([
        "mp", "register", "--name", "Ann", "--email", "ann@x.io", "--password", "pw",
    ])
    .unwrap();

    match cli.command {
        Commands::Register { role, phone, .. } => {
            assert_eq!(role, Role::User);
            assert!(phone.is_none());
        }
        _ => panic!("expected register"),
    }
}

#[test]
fn test_parse_portal_view_role() {
    let cli = Cli::try_parse_from(["mp", "portal", "--view", "admin"]).unwrap();
    match cli.command {
        Commands::Portal { view } => assert_eq!(view, Some(Role::Admin)),
        _ => panic!("expected portal"),
    }
}

#[test]
fn test_parse_rejects_unknown_role() {
    assert!(Cli::try_parse_from(["mp", "portal", "--view", "superuser"]).is_err());
}

#[test]
fn test_parse_technician_update_status() {
    let cli = Cli::try_parse_from([
        "mp",
        "technician",
        "update",
        "issue-7",
        "--status",
        "in_progress",
    ])
    .unwrap();

    match cli.command {
        Commands::Technician {
            action: TechnicianCommands::Update { id, status },
        } => {
            assert_eq!(id, "issue-7");
            assert_eq!(status, IssueStatus::InProgress);
        }
        _ => panic!("expected technician update"),
    }
}

#[test]
fn test_parse_issue_submit_with_image() {
    let cli = Cli::try_parse_from([
        "mp",
        "issue",
        "submit",
        "--name",
        "Ann",
        "--email",
        "ann@x.io",
        "--phone",
        "555",
        "--description",
        "Sink leaking",
        "--image",
        "photos/sink.png",
    ])
    .unwrap();

    match cli.command {
        Commands::Issue {
            action: IssueCommands::Submit { image, .. },
        } => assert_eq!(image, Some(PathBuf::from("photos/sink.png"))),
        _ => panic!("expected issue submit"),
    }
}
