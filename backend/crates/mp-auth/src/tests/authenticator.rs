use crate::tests::{authenticator_with, instant_config, stored_identity};
use crate::{AuthError, Authenticator, MemorySessionStore, Registration, SessionStore};

use std::sync::Arc;

use mp_config::DemoCredential;
use mp_core::Role;

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn given_empty_email_when_login_then_validation_error_and_no_store_access() {
    let store = Arc::new(MemorySessionStore::new());
    let auth = authenticator_with(&store);

    let err = auth.login("", "123456").await.unwrap_err();

    assert!(matches!(err, AuthError::Validation { field: "email", .. }));
    assert_eq!(store.saves(), 0);
    assert_eq!(store.operations(), 0);
}

#[tokio::test]
async fn given_whitespace_password_when_login_then_validation_error_and_no_write() {
    let store = Arc::new(MemorySessionStore::new());
    let auth = authenticator_with(&store);

    let err = auth.login("admin@demo.com", "   ").await.unwrap_err();

    assert!(matches!(
        err,
        AuthError::Validation {
            field: "password",
            ..
        }
    ));
    assert_eq!(store.saves(), 0);
    assert!(store.raw().is_none());
}

// =============================================================================
// Demo table
// =============================================================================

#[tokio::test]
async fn given_admin_demo_credentials_when_login_then_admin_identity_persisted() {
    let store = Arc::new(MemorySessionStore::new());
    let auth = authenticator_with(&store);

    let identity = auth.login("admin@demo.com", "123456").await.unwrap();

    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.name, "Demo Admin");
    assert_eq!(identity.phone.as_deref(), Some("123-456-7890"));
    assert!(!identity.id.is_empty());
    assert_eq!(store.saves(), 1);

    let persisted = store.load().unwrap().identity.unwrap();
    assert_eq!(persisted, identity);
}

#[tokio::test]
async fn given_each_demo_account_when_login_then_resolves_its_role() {
    for (email, role) in [
        ("user@demo.com", Role::User),
        ("tech@demo.com", Role::Technician),
        ("admin@demo.com", Role::Admin),
    ] {
        let store = Arc::new(MemorySessionStore::new());
        let identity = authenticator_with(&store)
            .login(email, "123456")
            .await
            .unwrap();
        assert_eq!(identity.role, role, "{email}");
    }
}

#[tokio::test]
async fn given_unknown_credentials_when_login_then_authentication_error_and_no_write() {
    let store = Arc::new(MemorySessionStore::new());
    let auth = authenticator_with(&store);

    let err = auth.login("admin@demo.com", "wrong").await.unwrap_err();

    assert!(matches!(err, AuthError::Authentication { .. }));
    assert!(err.to_string().contains("invalid email or password"));
    assert_eq!(store.saves(), 0);
    assert!(store.raw().is_none());
}

#[tokio::test]
async fn given_unknown_credentials_and_stored_identity_when_login_then_store_untouched() {
    let existing = stored_identity(Role::Technician);
    let store = Arc::new(MemorySessionStore::with_identity(&existing).unwrap());
    let before = store.raw();
    let auth = authenticator_with(&store);

    let result = auth.login("stored@example.com", "nope").await;

    assert!(matches!(result, Err(AuthError::Authentication { .. })));
    assert_eq!(store.saves(), 0);
    assert_eq!(store.raw(), before);
}

#[tokio::test]
async fn given_configured_table_when_login_then_only_configured_accounts_work() {
    let store = Arc::new(MemorySessionStore::new());
    let mut config = instant_config();
    config.demo_credentials = vec![DemoCredential::new(
        "ops@acme.test",
        "pw",
        Role::Technician,
        "Ops",
    )];
    let auth = Authenticator::new(store.clone(), &config);

    assert!(auth.login("admin@demo.com", "123456").await.is_err());
    let identity = auth.login("ops@acme.test", "pw").await.unwrap();

    assert_eq!(identity.role, Role::Technician);
}

// =============================================================================
// Persisted identity
// =============================================================================

#[tokio::test]
async fn given_stored_identity_when_login_with_its_credentials_then_returns_it() {
    let existing = stored_identity(Role::Technician);
    let store = Arc::new(MemorySessionStore::with_identity(&existing).unwrap());
    let auth = authenticator_with(&store);

    let identity = auth
        .login("stored@example.com", "stored-pass")
        .await
        .unwrap();

    assert_eq!(identity, existing);
    assert_eq!(identity.role, Role::Technician);
}

#[tokio::test]
async fn given_corrupted_store_when_login_with_demo_credentials_then_succeeds() {
    let store = Arc::new(MemorySessionStore::with_raw("{not json"));
    let auth = authenticator_with(&store);

    let identity = auth.login("user@demo.com", "123456").await.unwrap();

    assert_eq!(identity.role, Role::User);
    assert!(store.load().unwrap().identity.is_some());
}

#[tokio::test]
async fn given_demo_login_over_stored_identity_then_replaces_it() {
    let existing = stored_identity(Role::Admin);
    let store = Arc::new(MemorySessionStore::with_identity(&existing).unwrap());
    let auth = authenticator_with(&store);

    let identity = auth.login("user@demo.com", "123456").await.unwrap();

    let persisted = store.load().unwrap().identity.unwrap();
    assert_eq!(persisted.email, "user@demo.com");
    assert_eq!(persisted.id, identity.id);
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn given_valid_registration_when_register_then_identity_persisted() {
    let store = Arc::new(MemorySessionStore::new());
    let auth = authenticator_with(&store);
    let form = Registration::new("Grace", "grace@example.com", "s3cret")
        .with_phone("555-0199")
        .with_role(Role::Technician);

    let identity = auth.register(form).await.unwrap();

    assert_eq!(identity.role, Role::Technician);
    assert_eq!(identity.phone.as_deref(), Some("555-0199"));
    assert_eq!(store.load().unwrap().identity.unwrap(), identity);
}

#[tokio::test]
async fn given_registered_identity_when_login_then_matches_stored_record() {
    let store = Arc::new(MemorySessionStore::new());
    let auth = authenticator_with(&store);
    auth.register(Registration::new("Grace", "grace@example.com", "s3cret"))
        .await
        .unwrap();

    let identity = auth.login("grace@example.com", "s3cret").await.unwrap();

    assert_eq!(identity.name, "Grace");
    assert_eq!(identity.role, Role::User);
}

#[tokio::test]
async fn given_invalid_email_when_register_then_validation_error_and_no_write() {
    let store = Arc::new(MemorySessionStore::new());
    let auth = authenticator_with(&store);

    let err = auth
        .register(Registration::new("Grace", "grace-at-example", "s3cret"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation { field: "email", .. }));
    assert_eq!(store.saves(), 0);
}

#[tokio::test]
async fn given_blank_name_when_register_then_validation_error() {
    let store = Arc::new(MemorySessionStore::new());
    let auth = authenticator_with(&store);

    let err = auth
        .register(Registration::new(" ", "grace@example.com", "s3cret"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation { field: "name", .. }));
}
