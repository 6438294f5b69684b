//! Shared type definitions for the Stockpile inventory engine.
//!
//! This crate is the single source of truth for the data types used across
//! the Stockpile workspace: identifiers, classification enums, and the item
//! instance with its stack-level operations.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for item, observer, and session IDs
//! - [`enums`] -- Classification enums (category, rarity)
//! - [`item`] -- [`ItemInstance`] with stack operations and factories
//!
//! [`ItemInstance`]: item::ItemInstance

pub mod enums;
pub mod ids;
pub mod item;

// Re-export all public types at crate root for convenience.
pub use enums::{ItemCategory, ItemRarity};
pub use ids::{ItemId, ObserverId, SessionId};
pub use item::{CombatStats, ItemError, ItemInstance, ItemParams, StackAdd};
