use crate::{IssueSubmission, NewUser};

fn submission(name: &str, email: &str, phone: &str, description: &str) -> IssueSubmission {
    IssueSubmission {
        reporter: NewUser::new(name, email, phone),
        description: description.to_string(),
        image: None,
    }
}

#[test]
fn given_complete_form_when_validate_then_ok() {
    let form = submission("Ada", "ada@example.com", "555-0100", "Leaking tap");
    assert!(form.validate().is_ok());
}

#[test]
fn given_missing_phone_when_validate_then_reports_phone() {
    let form = submission("Ada", "ada@example.com", "  ", "Leaking tap");

    let err = form.validate().unwrap_err();

    assert_eq!(err.field(), Some("phone"));
    assert!(err.to_string().contains("Missing Information"));
}

#[test]
fn given_missing_description_when_validate_then_reports_description() {
    let form = submission("Ada", "ada@example.com", "555-0100", "");

    let err = form.validate().unwrap_err();

    assert_eq!(err.field(), Some("description"));
}

#[test]
fn given_missing_description_and_bad_email_when_validate_then_description_first() {
    let form = submission("Ada", "not-an-email", "555-0100", "");

    let err = form.validate().unwrap_err();

    assert_eq!(err.field(), Some("description"));
}

#[test]
fn given_malformed_email_when_validate_then_reports_email() {
    for email in ["ada", "ada@example", "ada @example.com", "@example.com"] {
        let form = submission("Ada", email, "555-0100", "Leaking tap");
        let err = form.validate().unwrap_err();
        assert_eq!(err.field(), Some("email"), "email {email:?}");
        assert!(err.to_string().contains("Invalid Email"));
    }
}
