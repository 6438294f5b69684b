//! Error types for the demo runner.
//!
//! Uses `thiserror` for the two failures that abort the demo outright:
//! bad environment configuration and session lookups. Inventory operations
//! the store merely rejects are logged and the demo moves on.

/// Errors that can occur while driving the inventory demo.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// A session lookup or close failed.
    #[error("session error: {0}")]
    Session(#[from] stockpile_session::SessionError),
}
