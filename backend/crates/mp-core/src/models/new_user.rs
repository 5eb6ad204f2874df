use crate::validation::is_blank;
use crate::{CoreError, CoreResult, is_valid_email};

use serde::Serialize;

/// Body of `POST /api/users/new`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// All contact fields are required and the email must look like one.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if is_blank(value) {
                return Err(CoreError::validation(
                    field,
                    "Missing Information: please fill in all user details",
                ));
            }
        }

        if !is_valid_email(&self.email) {
            return Err(CoreError::validation(
                "email",
                "Invalid Email: please enter a valid email address",
            ));
        }

        Ok(())
    }
}
