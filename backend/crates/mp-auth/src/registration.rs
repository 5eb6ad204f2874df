use crate::{AuthError, AuthResult};

use mp_core::{Role, is_valid_email};

/// Sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone: None,
            role: Role::User,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[track_caller]
    pub fn validate(&self) -> AuthResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(AuthError::validation(
                    field,
                    "Please fill in name, email and password",
                ));
            }
        }

        if !is_valid_email(&self.email) {
            return Err(AuthError::validation(
                "email",
                "Please enter a valid email address",
            ));
        }

        Ok(())
    }
}
