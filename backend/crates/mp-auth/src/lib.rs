//! Session and role authorization for the maintenance portal.
//!
//! The pieces, leaves first:
//! - [`SessionStore`]: holds at most one signed-in [`Identity`](mp_core::Identity)
//! - [`Authenticator`]: checks credentials and writes the store on success
//! - [`SessionGate`]: decides at start-up whether to show login or the shell
//! - [`AuthorizedShell`]: role-to-view dispatch, sidebar switching, logout

pub mod authenticator;
pub mod authorized_shell;
pub mod error;
pub mod registration;
pub mod session_gate;
pub mod session_state;
pub mod store;

#[cfg(test)]
mod tests;

pub use authenticator::Authenticator;
pub use authorized_shell::{AuthorizedShell, NavEntry};
pub use error::{AuthError, Result as AuthResult};
pub use registration::Registration;
pub use session_gate::SessionGate;
pub use session_state::SessionState;
pub use store::{
    FileSessionStore, LoadResult, MemorySessionStore, SessionStore, SessionStoreError,
    SessionStoreResult,
};
