//! Integration tests for the store's notification contract.
//!
//! Tests subscribe a recording observer and assert on the exact event
//! sequence each operation produces: entry-level events first, exactly one
//! `inventory_changed` per committed mutation, and silence on failure.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;
use stockpile_events::InventoryObserver;
use stockpile_store::{InventoryStore, StoreConfig, StoreError};
use stockpile_types::{ItemId, ItemInstance, ItemRarity};

/// Flat record of every notification, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Note {
    Changed,
    Added { id: ItemId },
    Removed { id: ItemId },
    StackChanged { id: ItemId, new_size: u32 },
}

struct Recorder {
    notes: Rc<RefCell<Vec<Note>>>,
}

impl InventoryObserver for Recorder {
    fn on_inventory_changed(&mut self) {
        self.notes.borrow_mut().push(Note::Changed);
    }

    fn on_item_added(&mut self, item: &ItemInstance) {
        self.notes.borrow_mut().push(Note::Added { id: item.id() });
    }

    fn on_item_removed(&mut self, id: ItemId) {
        self.notes.borrow_mut().push(Note::Removed { id });
    }

    fn on_item_stack_changed(&mut self, id: ItemId, new_size: u32) {
        self.notes
            .borrow_mut()
            .push(Note::StackChanged { id, new_size });
    }
}

fn recording_store(max_slots: u32) -> (InventoryStore, Rc<RefCell<Vec<Note>>>) {
    let mut store = InventoryStore::new(StoreConfig {
        max_slots,
        auto_stack: true,
    });
    let notes = Rc::new(RefCell::new(Vec::new()));
    let _ = store.subscribe(Box::new(Recorder {
        notes: Rc::clone(&notes),
    }));
    (store, notes)
}

fn ore(stack: u32) -> ItemInstance {
    ItemInstance::material("Iron Ore", stack, 10)
}

fn take_notes(notes: &Rc<RefCell<Vec<Note>>>) -> Vec<Note> {
    notes.borrow_mut().drain(..).collect()
}

#[test]
fn plain_add_emits_added_then_changed() {
    let (mut store, notes) = recording_store(10);
    let item = ore(5);
    let id = item.id();

    store.add_item(item).unwrap();

    assert_eq!(notes.borrow().as_slice(), &[Note::Added { id }, Note::Changed]);
}

#[test]
fn full_absorption_emits_stack_changes_then_one_changed() {
    let (mut store, notes) = recording_store(10);
    let first = ore(5);
    let first_id = first.id();
    store.add_item(first).unwrap();
    store.set_auto_stack(false);
    let second = ore(3);
    let second_id = second.id();
    store.add_item(second).unwrap();
    store.set_auto_stack(true);
    let _ = take_notes(&notes);

    // 5/10 and 3/10 absorb 6: the first stack fills, the second takes one.
    store.add_item(ore(6)).unwrap();

    assert_eq!(
        take_notes(&notes),
        vec![
            Note::StackChanged {
                id: first_id,
                new_size: 10,
            },
            Note::StackChanged {
                id: second_id,
                new_size: 4,
            },
            Note::Changed,
        ]
    );
    assert_eq!(store.item_count(), 2);
}

#[test]
fn partial_absorption_emits_stack_change_added_changed() {
    let (mut store, notes) = recording_store(12);
    let existing = ItemInstance::material("Wood", 2, 10);
    let existing_id = existing.id();
    store.add_item(existing).unwrap();
    let _ = take_notes(&notes);

    let incoming = ItemInstance::material("Wood", 20, 99);
    let incoming_id = incoming.id();
    store.add_item(incoming).unwrap();

    assert_eq!(
        take_notes(&notes),
        vec![
            Note::StackChanged {
                id: existing_id,
                new_size: 10,
            },
            Note::Added { id: incoming_id },
            Note::Changed,
        ]
    );
    assert_eq!(store.total_quantity(), 22);
}

#[test]
fn failed_add_emits_nothing() {
    let (mut store, notes) = recording_store(1);
    store
        .add_item(ItemInstance::weapon(
            "Iron Sword",
            5,
            12,
            Decimal::ONE,
            ItemRarity::Common,
        ))
        .unwrap();
    let _ = take_notes(&notes);

    let result = store.add_item(ItemInstance::weapon(
        "Dagger",
        2,
        6,
        Decimal::ONE,
        ItemRarity::Common,
    ));

    assert!(matches!(result, Err(StoreError::InventoryFull { .. })));
    assert!(notes.borrow().is_empty());
}

#[test]
fn rejected_partial_merge_emits_nothing_and_mutates_nothing() {
    let (mut store, notes) = recording_store(1);
    store.add_item(ore(8)).unwrap();
    let _ = take_notes(&notes);

    let result = store.add_item(ore(6));

    assert!(matches!(result, Err(StoreError::InventoryFull { .. })));
    assert!(notes.borrow().is_empty());
    let first = store.all_items().first().unwrap();
    assert_eq!(first.current_stack_size(), 8);
}

#[test]
fn remove_item_emits_removed_then_changed() {
    let (mut store, notes) = recording_store(10);
    let item = ore(5);
    let id = item.id();
    store.add_item(item).unwrap();
    let _ = take_notes(&notes);

    store.remove_item(id).unwrap();

    assert_eq!(
        take_notes(&notes),
        vec![Note::Removed { id }, Note::Changed]
    );
}

#[test]
fn remove_quantity_partial_emits_stack_changed_then_changed() {
    let (mut store, notes) = recording_store(10);
    let item = ore(5);
    let id = item.id();
    store.add_item(item).unwrap();
    let _ = take_notes(&notes);

    store.remove_item_quantity(id, 2).unwrap();

    assert_eq!(
        take_notes(&notes),
        vec![
            Note::StackChanged { id, new_size: 3 },
            Note::Changed,
        ]
    );
}

#[test]
fn remove_quantity_over_stack_emits_removal_events() {
    let (mut store, notes) = recording_store(10);
    let item = ore(5);
    let id = item.id();
    store.add_item(item).unwrap();
    let _ = take_notes(&notes);

    store.remove_item_quantity(id, 99).unwrap();

    assert_eq!(
        take_notes(&notes),
        vec![Note::Removed { id }, Note::Changed]
    );
    assert!(store.is_empty());
}

#[test]
fn failed_removals_emit_nothing() {
    let (mut store, notes) = recording_store(10);
    let item = ore(5);
    let id = item.id();
    store.add_item(item).unwrap();
    let _ = take_notes(&notes);

    let stray = ore(1);
    assert!(store.remove_item(stray.id()).is_err());
    assert!(store.remove_item_quantity(stray.id(), 1).is_err());
    assert!(store.remove_item_quantity(id, 0).is_err());

    assert!(notes.borrow().is_empty());
}

#[test]
fn clear_emits_exactly_one_changed() {
    let (mut store, notes) = recording_store(10);
    store.add_item(ore(5)).unwrap();
    store.add_item(ore(7)).unwrap();
    let _ = take_notes(&notes);

    store.clear();
    assert_eq!(take_notes(&notes), vec![Note::Changed]);

    // Clearing an already empty store still broadcasts.
    store.clear();
    assert_eq!(take_notes(&notes), vec![Note::Changed]);
}

#[test]
fn unsubscribed_observer_stops_receiving() {
    let mut store = InventoryStore::new(StoreConfig::default());
    let notes = Rc::new(RefCell::new(Vec::new()));
    let token = store.subscribe(Box::new(Recorder {
        notes: Rc::clone(&notes),
    }));

    store.add_item(ore(5)).unwrap();
    assert_eq!(notes.borrow().len(), 2);

    assert!(store.unsubscribe(token));
    store.add_item(ore(2)).unwrap();
    assert_eq!(notes.borrow().len(), 2);
}
