//! The slot-based inventory store.
//!
//! An [`InventoryStore`] holds item entries in insertion order, enforces a
//! slot capacity, merges stackable arrivals into existing stacks, and
//! notifies subscribed observers after each committed change.
//!
//! # Design Principles
//!
//! - Failed operations are invisible: no partial mutation, no events. The
//!   stacking pass is planned against a read-only view and applied only
//!   once the whole add is known to succeed.
//! - Events fire on the caller's stack after state is committed: first the
//!   entry-level notification, then exactly one `inventory_changed`.
//! - Queries never mutate and never notify.

use rust_decimal::Decimal;
use stockpile_events::{InventoryObserver, ObserverRegistry};
use stockpile_types::{ItemCategory, ItemId, ItemInstance, ItemRarity, ObserverId};

use crate::config::StoreConfig;
use crate::error::StoreError;

/// An ordered, capacity-limited collection of item entries.
///
/// Entries keep their insertion order; merging into an existing stack does
/// not reorder anything, and removal closes the gap without disturbing the
/// relative order of the rest.
#[derive(Debug)]
pub struct InventoryStore {
    /// Entries in insertion order. One entry occupies one slot.
    entries: Vec<ItemInstance>,

    /// Slot capacity. Always at least 1. May be lowered below the current
    /// entry count; the store then stays over capacity until entries leave.
    max_slots: u32,

    /// Whether adds merge into existing stacks before taking a new slot.
    auto_stack: bool,

    /// Subscribed observers, notified after each committed change.
    observers: ObserverRegistry,
}

impl InventoryStore {
    /// Create an empty store from a configuration.
    ///
    /// A `max_slots` of 0 is raised to 1.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            entries: Vec::new(),
            max_slots: config.max_slots.max(1),
            auto_stack: config.auto_stack,
            observers: ObserverRegistry::new(),
        }
    }

    // ----- Observer subscriptions -----

    /// Subscribe an observer to this store's change notifications.
    ///
    /// The returned token is the capability to unsubscribe later.
    pub fn subscribe(&mut self, observer: Box<dyn InventoryObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Remove a previously subscribed observer.
    ///
    /// Returns `false` for tokens that no longer match a subscription.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of currently subscribed observers.
    pub const fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ----- Add operations -----

    /// Add an item to the inventory.
    ///
    /// When auto-stacking applies, the incoming quantity is first spread
    /// across matching stacks (same name, same category, stackable, not
    /// full), earliest entry first. A fully absorbed item takes no slot and
    /// its instance is discarded; any remainder is appended as a new entry.
    ///
    /// Events on success: one `item_stack_changed` per merged-into entry in
    /// entry order, then `item_added` if a new entry was appended, then one
    /// `inventory_changed`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidItem`] for an empty display name or a zero
    ///   stack.
    /// - [`StoreError::InventoryFull`] when no slot is free and stacking
    ///   cannot fully absorb the quantity. The store is left untouched:
    ///   even the part that could have merged is rolled into the rejection.
    pub fn add_item(&mut self, mut item: ItemInstance) -> Result<(), StoreError> {
        Self::validate(&item)?;

        if !self.has_room_for_item() && !item.is_stackable() {
            return Err(StoreError::InventoryFull {
                capacity: self.max_slots,
            });
        }

        // Plan the merge without touching any entry.
        let merge_plan = if self.auto_stack && item.is_stackable() {
            self.plan_merge(&item)
        } else {
            Vec::new()
        };
        let planned: u32 = merge_plan
            .iter()
            .fold(0, |acc, (_, take)| acc.saturating_add(*take));
        let remaining = item.current_stack_size().saturating_sub(planned);

        if remaining > 0 && !self.has_room_for_item() {
            // Nothing has been applied yet, so rejecting here leaves the
            // store byte-for-byte unchanged and silent.
            return Err(StoreError::InventoryFull {
                capacity: self.max_slots,
            });
        }

        // Commit the planned merges.
        let mut stack_events: Vec<(ItemId, u32)> = Vec::with_capacity(merge_plan.len());
        for (index, take) in merge_plan {
            if let Some(entry) = self.entries.get_mut(index) {
                entry.set_stack_size(entry.current_stack_size().saturating_add(take));
                stack_events.push((entry.id(), entry.current_stack_size()));
            }
        }

        let appended = remaining > 0;
        tracing::debug!(
            item = %item.id(),
            name = item.name(),
            merged_into = stack_events.len(),
            appended,
            "Item added"
        );
        if appended {
            item.set_stack_size(remaining);
            self.entries.push(item);
        }

        for (id, new_size) in stack_events {
            self.observers.notify_item_stack_changed(id, new_size);
        }
        if appended {
            if let Some(entry) = self.entries.last() {
                self.observers.notify_item_added(entry);
            }
        }
        self.observers.notify_inventory_changed();
        Ok(())
    }

    /// Compute how an incoming stack would spread across existing entries.
    ///
    /// Returns `(entry index, units taken)` pairs, earliest entry first,
    /// stopping once the incoming quantity is exhausted.
    fn plan_merge(&self, incoming: &ItemInstance) -> Vec<(usize, u32)> {
        let mut remaining = incoming.current_stack_size();
        let mut plan = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            if !entry.can_stack_with(incoming) {
                continue;
            }
            let take = remaining.min(entry.free_space());
            if take > 0 {
                plan.push((index, take));
                remaining = remaining.saturating_sub(take);
            }
        }
        plan
    }

    /// Admission rules for incoming items.
    fn validate(item: &ItemInstance) -> Result<(), StoreError> {
        if item.name().trim().is_empty() {
            return Err(StoreError::InvalidItem {
                reason: "display name is empty".to_owned(),
            });
        }
        if item.current_stack_size() == 0 {
            return Err(StoreError::InvalidItem {
                reason: "stack size is zero".to_owned(),
            });
        }
        Ok(())
    }

    // ----- Remove operations -----

    /// Remove an entire entry regardless of its stack size.
    ///
    /// Events on success: `item_removed`, then one `inventory_changed`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ItemNotFound`] if no entry carries the id.
    pub fn remove_item(&mut self, id: ItemId) -> Result<(), StoreError> {
        let Some(position) = self.entries.iter().position(|entry| entry.id() == id) else {
            return Err(StoreError::ItemNotFound(id));
        };
        let removed = self.entries.remove(position);
        tracing::debug!(item = %id, name = removed.name(), "Item removed");

        self.observers.notify_item_removed(id);
        self.observers.notify_inventory_changed();
        Ok(())
    }

    /// Remove a quantity of units from an entry.
    ///
    /// Asking for at least the entry's full stack removes the whole entry
    /// (same events as [`remove_item`]); otherwise the stack shrinks and
    /// the events are `item_stack_changed` then one `inventory_changed`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ZeroQuantity`] for `quantity == 0`.
    /// - [`StoreError::ItemNotFound`] if no entry carries the id.
    ///
    /// [`remove_item`]: InventoryStore::remove_item
    pub fn remove_item_quantity(
        &mut self,
        id: ItemId,
        quantity: u32,
    ) -> Result<(), StoreError> {
        if quantity == 0 {
            return Err(StoreError::ZeroQuantity);
        }

        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id() == id) else {
            return Err(StoreError::ItemNotFound(id));
        };

        let current = entry.current_stack_size();
        if quantity >= current {
            return self.remove_item(id);
        }

        // quantity < current, so the entry keeps at least one unit.
        let new_size = current.saturating_sub(quantity);
        entry.set_stack_size(new_size);
        tracing::debug!(item = %id, removed = quantity, new_size, "Stack reduced");

        self.observers.notify_item_stack_changed(id, new_size);
        self.observers.notify_inventory_changed();
        Ok(())
    }

    /// Drop every entry.
    ///
    /// Broadcasts a single `inventory_changed`, also when the store was
    /// already empty.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::debug!(entries = dropped, "Inventory cleared");

        self.observers.notify_inventory_changed();
    }

    // ----- Capacity -----

    /// Change the slot capacity. Values below 1 are raised to 1.
    ///
    /// Lowering the capacity below the current entry count evicts nothing;
    /// the store stays over capacity and further adds fail until entries
    /// leave. No event fires.
    pub fn set_max_slots(&mut self, max_slots: u32) {
        self.max_slots = max_slots.max(1);
    }

    /// Turn automatic stack merging on or off for future adds.
    pub const fn set_auto_stack(&mut self, auto_stack: bool) {
        self.auto_stack = auto_stack;
    }

    /// Slot capacity.
    pub const fn max_slots(&self) -> u32 {
        self.max_slots
    }

    /// Whether adds merge into existing stacks first.
    pub const fn auto_stack(&self) -> bool {
        self.auto_stack
    }

    // ----- Queries -----

    /// All entries in insertion order.
    pub fn all_items(&self) -> &[ItemInstance] {
        &self.entries
    }

    /// The entry carrying the given id, if present.
    pub fn item(&self, id: ItemId) -> Option<&ItemInstance> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Entries of one category, in insertion order.
    pub fn items_by_category(&self, category: ItemCategory) -> Vec<&ItemInstance> {
        self.entries
            .iter()
            .filter(|entry| entry.category() == category)
            .collect()
    }

    /// Entries of one rarity grade, in insertion order.
    pub fn items_by_rarity(&self, rarity: ItemRarity) -> Vec<&ItemInstance> {
        self.entries
            .iter()
            .filter(|entry| entry.rarity() == rarity)
            .collect()
    }

    /// Entries whose name contains the query, case-insensitively.
    ///
    /// An empty query matches every entry.
    pub fn search_by_name(&self, query: &str) -> Vec<&ItemInstance> {
        self.entries
            .iter()
            .filter(|entry| entry.matches_name(query))
            .collect()
    }

    /// Number of occupied slots.
    pub const fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all stack sizes across entries.
    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().fold(0_u64, |acc, entry| {
            acc.saturating_add(u64::from(entry.current_stack_size()))
        })
    }

    /// Whether at least one slot is free for a new entry.
    ///
    /// Merging into an existing stack does not need a free slot, so
    /// `add_item` can still succeed for stackable items when this is false.
    pub fn has_room_for_item(&self) -> bool {
        self.occupied_slots() < self.max_slots
    }

    /// Fraction of capacity occupied (0 to 1).
    pub fn fill_percentage(&self) -> Decimal {
        let occupied = Decimal::from(self.entries.len());
        let capacity = Decimal::from(self.max_slots);
        occupied.checked_div(capacity).unwrap_or(Decimal::ZERO)
    }

    /// Whether no slot is occupied.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every slot is occupied (or the store is over capacity).
    pub fn is_full(&self) -> bool {
        self.occupied_slots() >= self.max_slots
    }

    /// Entry count as a `u32` for capacity comparisons.
    fn occupied_slots(&self) -> u32 {
        u32::try_from(self.entries.len()).unwrap_or(u32::MAX)
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
