//! Error types for the `stockpile-session` crate.

use stockpile_types::SessionId;

/// Errors that can occur when resolving a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No session with the given id is open; its inventory is unavailable.
    #[error("inventory unavailable: no open session {0}")]
    SessionNotFound(SessionId),
}
