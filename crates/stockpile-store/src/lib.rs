//! Inventory storage and stacking for the Stockpile inventory engine.
//!
//! This crate owns the slot-based store: admission validation, automatic
//! stack merging, removal, queries, capacity management, and observer
//! notification. It sits between `stockpile-types` (which defines the item
//! data) and integration layers such as `stockpile-session`.
//!
//! The engine is single-threaded and synchronous: every operation, and
//! every observer notification it triggers, completes before the call
//! returns. Mutating the store from inside an observer hook is not
//! expressible; hooks only receive data snapshots.
//!
//! # Modules
//!
//! - [`config`] -- [`StoreConfig`]: capacity and auto-stack settings
//! - [`error`] -- [`StoreError`]: typed failures for all operations
//! - [`store`] -- [`InventoryStore`]: the ordered, capacity-limited store
//!
//! [`StoreConfig`]: config::StoreConfig
//! [`StoreError`]: error::StoreError
//! [`InventoryStore`]: store::InventoryStore

pub mod config;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use store::InventoryStore;
