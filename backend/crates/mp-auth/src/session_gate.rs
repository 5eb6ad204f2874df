use crate::{AuthError, AuthResult, AuthorizedShell, SessionState, SessionStore};

use std::sync::Arc;

use log::{info, warn};
use mp_core::{Identity, Role};

/// Start-up state machine.
///
/// ```text
/// Loading --start()--> Unauthenticated | Authenticated(role)
/// Unauthenticated --complete_login()--> Authenticated(role)
/// Authenticated(r1) --switch_role()--> Authenticated(r2)
/// any --logout()--> Unauthenticated
/// ```
pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    state: SessionState,
    identity: Option<Identity>,
}

impl SessionGate {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            state: SessionState::Loading,
            identity: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Identity restored from the store or produced by the last login.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Reads the store once and leaves `Loading`. A corrupted record is
    /// discarded and treated as signed out.
    pub fn start(&mut self) -> AuthResult<SessionState> {
        if self.state != SessionState::Loading {
            return Err(AuthError::invalid_transition(self.state, "start"));
        }

        let loaded = self.store.load()?;

        self.state = match loaded.identity {
            Some(identity) => {
                info!("Restored session: {} ({})", identity.email, identity.role);
                let role = identity.role;
                self.identity = Some(identity);
                SessionState::Authenticated(role)
            }
            None => {
                if let Some(reason) = loaded.corruption_error {
                    warn!("Discarding malformed session record: {reason}");
                    self.store.discard_corrupted()?;
                }
                SessionState::Unauthenticated
            }
        };

        Ok(self.state)
    }

    /// Hands control to the shell after the authenticator succeeded.
    /// Signing in again while authenticated replaces the identity.
    pub fn complete_login(&mut self, identity: Identity) -> AuthResult<SessionState> {
        if self.state == SessionState::Loading {
            return Err(AuthError::invalid_transition(self.state, "complete login"));
        }

        self.state = SessionState::Authenticated(identity.role);
        self.identity = Some(identity);
        Ok(self.state)
    }

    /// Sidebar navigation. Touches neither the store nor the network.
    pub fn switch_role(&mut self, role: Role) -> AuthResult<SessionState> {
        if !self.state.is_authenticated() {
            return Err(AuthError::invalid_transition(self.state, "switch role"));
        }

        self.state = SessionState::Authenticated(role);
        Ok(self.state)
    }

    /// Clears the store from any state.
    pub fn logout(&mut self) -> AuthResult<SessionState> {
        self.store.clear()?;

        if let Some(identity) = self.identity.take() {
            info!("Signed out {}", identity.email);
        }
        self.state = SessionState::Unauthenticated;
        Ok(self.state)
    }

    /// The shell, when there is someone to show it to.
    pub fn shell(&mut self) -> Option<AuthorizedShell<'_>> {
        match self.state {
            SessionState::Authenticated(_) => Some(AuthorizedShell::new(self)),
            SessionState::Loading | SessionState::Unauthenticated => None,
        }
    }
}
