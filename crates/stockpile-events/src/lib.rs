//! Change notification for the Stockpile inventory engine.
//!
//! Inventories broadcast four kinds of change: a coarse "something
//! changed" signal, entry added, entry removed, and entry stack size
//! changed. This crate defines the observer surface and the registry that
//! owns subscriptions and fans notifications out.
//!
//! # Dispatch contract
//!
//! - Notifications fire synchronously, on the mutating caller's stack,
//!   after the state change has committed.
//! - The entry-level notification (added / removed / stack changed) fires
//!   before the coarse `inventory_changed` signal, and `inventory_changed`
//!   fires exactly once per mutating operation.
//! - Every change is delivered individually; nothing is batched or
//!   coalesced.
//! - Failed operations notify nobody.
//!
//! # Modules
//!
//! - [`observer`] -- The [`InventoryObserver`] trait and [`NoOpObserver`]
//! - [`registry`] -- [`ObserverRegistry`]: subscriptions and fan-out
//!
//! [`InventoryObserver`]: observer::InventoryObserver
//! [`NoOpObserver`]: observer::NoOpObserver
//! [`ObserverRegistry`]: registry::ObserverRegistry

pub mod observer;
pub mod registry;

pub use observer::{InventoryObserver, NoOpObserver};
pub use registry::ObserverRegistry;
