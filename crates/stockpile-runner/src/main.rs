//! Console demo for the Stockpile inventory engine.
//!
//! Opens a session-scoped inventory, attaches a console panel observer,
//! seeds randomized demo items, then walks through the main inventory
//! operations: lookups, quantity removal, capacity changes, and clearing.
//!
//! Everything runs synchronously on one thread; observer notifications
//! land between the log lines of the operations that caused them.

mod config;
mod error;
mod panel;
mod seed;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stockpile_session::SessionRegistry;
use stockpile_store::StoreConfig;
use stockpile_types::{ItemCategory, ItemInstance, ItemRarity};

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::panel::{ConsolePanel, print_inventory};
use crate::seed::{SeedCounts, seed_inventory};

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// opens an inventory session, and runs the demo script against it.
///
/// # Errors
///
/// Returns an error if configuration is invalid or a session lookup fails.
/// Inventory operations the store rejects are logged, not raised.
fn main() -> Result<(), RunnerError> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("stockpile-runner starting");

    let config = RunnerConfig::from_env()?;
    info!(
        max_slots = config.max_slots,
        auto_stack = config.auto_stack,
        "configuration loaded"
    );

    let mut sessions = SessionRegistry::new();
    let session = sessions.open_session(StoreConfig {
        max_slots: config.max_slots,
        auto_stack: config.auto_stack,
    });

    let (panel_token, panel_stats) = ConsolePanel::attach(sessions.store_mut(session)?, true);
    info!(session = %session, "panel attached");

    let mut rng = config
        .rng_seed
        .map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);
    let report = seed_inventory(
        sessions.store_mut(session)?,
        &mut rng,
        SeedCounts {
            materials: config.seed_materials,
            weapons: config.seed_weapons,
            consumables: config.seed_consumables,
        },
    );
    info!(
        added = report.added,
        rejected = report.rejected,
        "demo items seeded"
    );
    print_inventory(sessions.store(session)?);

    // Lookups
    {
        let store = sessions.store(session)?;
        let hits = store.search_by_name("ore");
        info!(query = "ore", matches = hits.len(), "substring search");
        let weapons = store.items_by_category(ItemCategory::Weapon);
        info!(count = weapons.len(), "weapons in inventory");
    }

    // Shave one unit off the first stackable entry.
    let stackable = sessions
        .store(session)?
        .all_items()
        .iter()
        .find(|item| item.is_stackable())
        .map(|item| (item.id(), item.current_stack_size()));
    if let Some((id, before)) = stackable {
        match sessions.store_mut(session)?.remove_item_quantity(id, 1) {
            Ok(()) => info!(item = %id, before, "removed one unit"),
            Err(error) => warn!(item = %id, %error, "quantity removal rejected"),
        }
    }

    // Drop the first weapon outright.
    let doomed = sessions
        .store(session)?
        .items_by_category(ItemCategory::Weapon)
        .first()
        .map(|item| item.id());
    if let Some(id) = doomed {
        match sessions.store_mut(session)?.remove_item(id) {
            Ok(()) => info!(item = %id, "weapon removed"),
            Err(error) => warn!(item = %id, %error, "weapon removal rejected"),
        }
    }

    // Tighten capacity to current usage. The store never evicts on a
    // shrink, it only refuses new entries.
    {
        let store = sessions.store_mut(session)?;
        let used = u32::try_from(store.item_count()).unwrap_or(u32::MAX);
        store.set_max_slots(used);
        info!(
            max_slots = store.max_slots(),
            is_full = store.is_full(),
            "capacity tightened"
        );

        let latecomer =
            ItemInstance::weapon("Rusty Dagger", 3, 9, Decimal::ONE, ItemRarity::Common);
        match store.add_item(latecomer) {
            Ok(()) => info!("latecomer accepted"),
            Err(error) => warn!(%error, "latecomer turned away"),
        }
    }

    print_inventory(sessions.store(session)?);

    // Tear down
    sessions.store_mut(session)?.clear();
    let detached = sessions.store_mut(session)?.unsubscribe(panel_token);

    let stats = *panel_stats.borrow();
    info!(
        added = stats.added,
        removed = stats.removed,
        stack_changes = stats.stack_changes,
        refreshes = stats.refreshes,
        detached,
        "panel summary"
    );

    let closed = sessions.close_session(session)?;
    info!(remaining = closed.item_count(), "session closed");

    info!("stockpile-runner finished");
    Ok(())
}
