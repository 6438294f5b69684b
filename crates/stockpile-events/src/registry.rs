//! Subscription bookkeeping and notification fan-out.

use core::fmt;

use stockpile_types::{ItemId, ItemInstance, ObserverId};
use tracing::debug;

use crate::observer::InventoryObserver;

/// Ordered collection of subscribed observers.
///
/// Subscription hands back an [`ObserverId`]; holding that id is the
/// capability to unsubscribe later. Observers are notified in subscription
/// order, synchronously, on the notifying caller's stack.
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn InventoryObserver>)>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer and return the token that identifies it.
    pub fn subscribe(&mut self, observer: Box<dyn InventoryObserver>) -> ObserverId {
        let id = ObserverId::new();
        self.observers.push((id, observer));
        debug!(observer = %id, total = self.observers.len(), "Observer subscribed");
        id
    }

    /// Remove a previously subscribed observer.
    ///
    /// Returns `false` when the token does not match any current
    /// subscription (already unsubscribed, or from another registry).
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let Some(position) = self.observers.iter().position(|(oid, _)| *oid == id) else {
            debug!(observer = %id, "Unsubscribe ignored, unknown observer");
            return false;
        };
        let _ = self.observers.remove(position);
        debug!(observer = %id, total = self.observers.len(), "Observer unsubscribed");
        true
    }

    /// Number of current subscriptions.
    pub const fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is subscribed.
    pub const fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    // ----- Notification fan-out -----

    /// Notify every observer that the inventory changed.
    pub fn notify_inventory_changed(&mut self) {
        for (_, observer) in &mut self.observers {
            observer.on_inventory_changed();
        }
    }

    /// Notify every observer of a newly appended entry.
    pub fn notify_item_added(&mut self, item: &ItemInstance) {
        for (_, observer) in &mut self.observers {
            observer.on_item_added(item);
        }
    }

    /// Notify every observer of a removed entry.
    pub fn notify_item_removed(&mut self, id: ItemId) {
        for (_, observer) in &mut self.observers {
            observer.on_item_removed(id);
        }
    }

    /// Notify every observer of an entry whose stack size changed.
    pub fn notify_item_stack_changed(&mut self, id: ItemId, new_size: u32) {
        for (_, observer) in &mut self.observers {
            observer.on_item_stack_changed(id, new_size);
        }
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observer_count", &self.observers.len())
            .finish()
    }
}
