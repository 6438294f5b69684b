//! The observer trait inventories notify about changes.

use stockpile_types::{ItemId, ItemInstance};

/// Callback surface invoked synchronously after an inventory mutation
/// commits.
///
/// Implementations receive data snapshots (ids, sizes, a borrowed item),
/// never a handle back to the store, so an observer cannot re-enter the
/// inventory mid-notification. All hooks have empty default bodies; an
/// implementation overrides only the notifications it cares about.
///
/// Hooks run on the caller's stack, one observer at a time, in
/// subscription order. No `Send` or `Sync` bound: the engine is
/// single-threaded.
pub trait InventoryObserver {
    /// Called once per mutating operation, after any entry-level hook.
    fn on_inventory_changed(&mut self) {}

    /// Called when a new entry was appended to the inventory.
    fn on_item_added(&mut self, _item: &ItemInstance) {}

    /// Called when an entry left the inventory entirely.
    fn on_item_removed(&mut self, _id: ItemId) {}

    /// Called when an existing entry's stack size changed.
    fn on_item_stack_changed(&mut self, _id: ItemId, _new_size: u32) {}
}

/// An observer that ignores every notification.
pub struct NoOpObserver;

impl InventoryObserver for NoOpObserver {}
