use crate::{Identity, Role};

#[test]
fn given_new_identity_when_serialize_then_uses_credential_record_layout() {
    let identity = Identity::new(
        "Demo Admin",
        "admin@demo.com",
        Role::Admin,
        Some("123456".into()),
        Some("123-456-7890".into()),
    );

    let json: serde_json::Value = serde_json::to_value(&identity).unwrap();

    assert_eq!(json["role"], "admin");
    assert_eq!(json["email"], "admin@demo.com");
    assert_eq!(json["phone"], "123-456-7890");
    assert!(json["createdAt"].is_string());
    assert!(json.get("created_at").is_none());
}

#[test]
fn given_missing_optional_fields_when_serialize_then_omits_them() {
    let identity = Identity::new("Alice", "alice@example.com", Role::User, None, None);

    let json = serde_json::to_string(&identity).unwrap();

    assert!(!json.contains("password"));
    assert!(!json.contains("phone"));
}

#[test]
fn given_only_role_when_deserialize_then_other_fields_default() {
    let identity: Identity = serde_json::from_str(r#"{"role":"technician"}"#).unwrap();

    assert_eq!(identity.role, Role::Technician);
    assert!(identity.email.is_empty());
    assert!(identity.password.is_none());
}

#[test]
fn given_missing_role_when_deserialize_then_fails() {
    let result = serde_json::from_str::<Identity>(r#"{"email":"a@b.co","name":"A"}"#);
    assert!(result.is_err());
}

#[test]
fn given_unknown_role_when_deserialize_then_fails() {
    let result = serde_json::from_str::<Identity>(r#"{"role":"root"}"#);
    assert!(result.is_err());
}

#[test]
fn given_identity_without_password_when_matches_then_never_matches() {
    let identity = Identity::new("Alice", "alice@example.com", Role::User, None, None);
    assert!(!identity.matches("alice@example.com", ""));
}

#[test]
fn given_identity_with_password_when_matches_then_requires_both_fields() {
    let identity = Identity::new(
        "Alice",
        "alice@example.com",
        Role::User,
        Some("secret".into()),
        None,
    );

    assert!(identity.matches("alice@example.com", "secret"));
    assert!(!identity.matches("alice@example.com", "wrong"));
    assert!(!identity.matches("bob@example.com", "secret"));
}
