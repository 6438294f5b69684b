//! Error types for the `stockpile-store` crate.
//!
//! All fallible store operations return [`StoreError`] through the standard
//! [`Result`] type alias. A failed operation never partially mutates the
//! store and never notifies observers.

use stockpile_types::ItemId;

/// Errors that can occur during inventory store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The item failed admission validation.
    #[error("invalid item: {reason}")]
    InvalidItem {
        /// What the validation found wrong with the item.
        reason: String,
    },

    /// Every slot is occupied and stacking could not fully absorb the item.
    #[error("inventory is full ({capacity} slots)")]
    InventoryFull {
        /// Slot capacity at the time of the attempt.
        capacity: u32,
    },

    /// No entry with the given id exists in the store.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// A quantity of zero was requested; quantity operations move at
    /// least one unit.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}
