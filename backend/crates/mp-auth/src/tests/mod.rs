mod authenticator;

use crate::{Authenticator, MemorySessionStore};

use std::sync::Arc;

use mp_config::AuthConfig;
use mp_core::{Identity, Role};

/// Demo table with no simulated delay.
pub(crate) fn instant_config() -> AuthConfig {
    AuthConfig {
        login_delay_ms: 0,
        ..Default::default()
    }
}

pub(crate) fn authenticator_with(store: &Arc<MemorySessionStore>) -> Authenticator {
    Authenticator::new(store.clone(), &instant_config())
}

pub(crate) fn stored_identity(role: Role) -> Identity {
    Identity::new(
        "Stored Person",
        "stored@example.com",
        role,
        Some("stored-pass".into()),
        Some("555-0100".into()),
    )
}
