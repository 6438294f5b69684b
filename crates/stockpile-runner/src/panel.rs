//! Console-facing inventory panel.
//!
//! [`ConsolePanel`] plays the role a HUD widget would in a game client: it
//! subscribes to store notifications, logs each one as it arrives, and keeps
//! counters in a shared handle so the demo can report what the UI layer saw
//! after the panel itself has been boxed away into the store.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::{debug, info};

use stockpile_events::InventoryObserver;
use stockpile_store::InventoryStore;
use stockpile_types::{ItemId, ItemInstance, ObserverId};

/// Counters shared between the panel and the demo loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelStats {
    /// Entries the panel saw appear.
    pub added: u64,
    /// Entries the panel saw leave.
    pub removed: u64,
    /// Stack size updates the panel saw.
    pub stack_changes: u64,
    /// Refreshes triggered by the coarse change signal.
    pub refreshes: u64,
}

/// An [`InventoryObserver`] that renders notifications as log lines.
#[derive(Debug)]
pub struct ConsolePanel {
    auto_refresh: bool,
    stats: Rc<RefCell<PanelStats>>,
}

impl ConsolePanel {
    /// Subscribe a new panel to `store`.
    ///
    /// Returns the subscription token and a shared handle to the panel's
    /// counters. Passing the token to [`InventoryStore::unsubscribe`]
    /// detaches the panel again.
    pub fn attach(
        store: &mut InventoryStore,
        auto_refresh: bool,
    ) -> (ObserverId, Rc<RefCell<PanelStats>>) {
        let stats = Rc::new(RefCell::new(PanelStats::default()));
        let panel = Self {
            auto_refresh,
            stats: Rc::clone(&stats),
        };
        let token = store.subscribe(Box::new(panel));
        (token, stats)
    }

    /// Re-render the panel from its running counters.
    ///
    /// A real widget would re-query the store here; the console panel
    /// renders what it has seen instead, since notifications carry
    /// snapshots rather than store access.
    fn refresh(&mut self) {
        let mut stats = self.stats.borrow_mut();
        stats.refreshes = stats.refreshes.saturating_add(1);
        debug!(
            refreshes = stats.refreshes,
            added = stats.added,
            removed = stats.removed,
            stack_changes = stats.stack_changes,
            "panel refreshed"
        );
    }
}

impl InventoryObserver for ConsolePanel {
    fn on_inventory_changed(&mut self) {
        if self.auto_refresh {
            self.refresh();
        }
    }

    fn on_item_added(&mut self, item: &ItemInstance) {
        info!(
            name = item.name(),
            stack = item.current_stack_size(),
            rarity = ?item.rarity(),
            "panel: item added"
        );
        let mut stats = self.stats.borrow_mut();
        stats.added = stats.added.saturating_add(1);
    }

    fn on_item_removed(&mut self, id: ItemId) {
        info!(item = %id, "panel: item removed");
        let mut stats = self.stats.borrow_mut();
        stats.removed = stats.removed.saturating_add(1);
    }

    fn on_item_stack_changed(&mut self, id: ItemId, new_size: u32) {
        info!(item = %id, new_size, "panel: stack changed");
        let mut stats = self.stats.borrow_mut();
        stats.stack_changes = stats.stack_changes.saturating_add(1);
    }
}

/// Log a full snapshot of `store`, one line per occupied slot.
pub fn print_inventory(store: &InventoryStore) {
    // The store reports a 0..1 fraction; scale it for display.
    let fill_percent = store.fill_percentage().saturating_mul(Decimal::ONE_HUNDRED);
    info!(
        slots_used = store.item_count(),
        max_slots = store.max_slots(),
        total_quantity = store.total_quantity(),
        fill_percent = %fill_percent,
        "inventory summary"
    );
    for (slot, item) in store.all_items().iter().enumerate() {
        info!(
            slot,
            name = item.name(),
            stack = item.current_stack_size(),
            max_stack = item.max_stack_size(),
            category = ?item.category(),
            rarity = ?item.rarity(),
            "inventory slot"
        );
    }
}
