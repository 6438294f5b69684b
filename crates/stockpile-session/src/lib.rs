//! Session-scoped inventory access for the Stockpile inventory engine.
//!
//! A session is the lifetime boundary for one inventory: UI panels,
//! controllers, and scripts resolve the store through a [`SessionRegistry`]
//! and a [`SessionId`] handle instead of reaching for a global. Resolution
//! fails with a typed error when the session is not open, which is the
//! "inventory unavailable" answer integration code is expected to handle.
//!
//! # Modules
//!
//! - [`error`] -- [`SessionError`]
//! - [`registry`] -- [`SessionRegistry`]: open, resolve, close
//!
//! [`SessionError`]: error::SessionError
//! [`SessionRegistry`]: registry::SessionRegistry
//! [`SessionId`]: stockpile_types::SessionId

pub mod error;
pub mod registry;

pub use error::SessionError;
pub use registry::SessionRegistry;
