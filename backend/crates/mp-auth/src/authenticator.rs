use crate::{AuthError, AuthResult, Registration, SessionStore};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use mp_config::{AuthConfig, DemoCredential};
use mp_core::Identity;

/// Demo-grade credential check. Passwords are compared in plain text and
/// there is no rate limiting or expiry.
pub struct Authenticator {
    store: Arc<dyn SessionStore>,
    demo_credentials: Vec<DemoCredential>,
    login_delay: Duration,
    placeholder_phone: String,
}

impl Authenticator {
    pub fn new(store: Arc<dyn SessionStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            demo_credentials: config.demo_credentials.clone(),
            login_delay: config.login_delay(),
            placeholder_phone: config.placeholder_phone.clone(),
        }
    }

    /// Signs in and persists the resulting identity.
    ///
    /// Match order:
    /// 1. the identity already in the store, if email and password match
    /// 2. the demo credential table, which mints a fresh identity
    ///
    /// Nothing is written on failure.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Identity> {
        if email.trim().is_empty() {
            return Err(AuthError::validation(
                "email",
                "Please enter both email and password",
            ));
        }
        if password.trim().is_empty() {
            return Err(AuthError::validation(
                "password",
                "Please enter both email and password",
            ));
        }

        self.simulate_round_trip().await;

        let loaded = self.store.load()?;
        if let Some(stored) = loaded.identity
            && stored.matches(email, password)
        {
            self.store.save(&stored)?;
            info!("Welcome back, {} ({})", stored.name, stored.role);
            return Ok(stored);
        }

        let Some(credential) = self
            .demo_credentials
            .iter()
            .find(|c| c.matches(email, password))
        else {
            warn!("Login failed for {email}");
            return Err(AuthError::invalid_credentials());
        };

        let identity = Identity::new(
            credential.name.clone(),
            credential.email.clone(),
            credential.role,
            Some(credential.password.clone()),
            Some(self.placeholder_phone.clone()),
        );
        self.store.save(&identity)?;

        info!("Welcome, {} ({})", identity.name, identity.role);
        Ok(identity)
    }

    /// Creates an account and signs it in, replacing any stored identity.
    pub async fn register(&self, registration: Registration) -> AuthResult<Identity> {
        registration.validate()?;

        self.simulate_round_trip().await;

        let identity = Identity::new(
            registration.name,
            registration.email,
            registration.role,
            Some(registration.password),
            registration.phone,
        );
        self.store.save(&identity)?;

        info!("Registered {} as {}", identity.email, identity.role);
        Ok(identity)
    }

    async fn simulate_round_trip(&self) {
        if !self.login_delay.is_zero() {
            debug!("Simulating {}ms round trip", self.login_delay.as_millis());
            tokio::time::sleep(self.login_delay).await;
        }
    }
}
