//! Randomized demo item generation.
//!
//! Small hand-tuned loot tables produce plausible materials, weapons, and
//! consumables so the demo inventory has something worth looking at. Every
//! roll goes through the normal [`InventoryStore::add_item`] path; rejections
//! are counted, not hidden.

use rand::Rng;
use rust_decimal::Decimal;
use tracing::warn;

use stockpile_store::{InventoryStore, StoreError};
use stockpile_types::{ItemInstance, ItemRarity};

/// Names drawn from when rolling materials.
const MATERIAL_NAMES: [&str; 8] = [
    "Iron Ore",
    "Wood",
    "Stone",
    "Gold Nugget",
    "Crystal Shard",
    "Leather",
    "Cloth",
    "Bone Fragment",
];

/// Names drawn from when rolling weapons.
const WEAPON_NAMES: [&str; 6] = [
    "Iron Sword",
    "Steel Axe",
    "Magic Staff",
    "Longbow",
    "Dagger",
    "War Hammer",
];

/// Names drawn from when rolling consumables.
const CONSUMABLE_NAMES: [&str; 6] = [
    "Health Potion",
    "Mana Potion",
    "Stamina Elixir",
    "Antidote",
    "Bread",
    "Cooked Meat",
];

/// Weapons may roll any rarity.
const WEAPON_RARITIES: [ItemRarity; 5] = [
    ItemRarity::Common,
    ItemRarity::Uncommon,
    ItemRarity::Rare,
    ItemRarity::Epic,
    ItemRarity::Legendary,
];

/// Consumables stay in the low rarity band.
const CONSUMABLE_RARITIES: [ItemRarity; 3] =
    [ItemRarity::Common, ItemRarity::Uncommon, ItemRarity::Rare];

/// How many items of each category a seeding pass rolls.
#[derive(Debug, Clone, Copy)]
pub struct SeedCounts {
    /// Material stacks to roll (stack 1..=50, cap 99).
    pub materials: u32,
    /// Weapons to roll (one slot each).
    pub weapons: u32,
    /// Consumables to roll (stack 1..=15, cap 20).
    pub consumables: u32,
}

/// Outcome totals for a completed seeding pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedReport {
    /// Rolls the store accepted.
    pub added: u32,
    /// Rolls the store rejected, usually for lack of slots.
    pub rejected: u32,
}

/// Roll `counts` random items into `store`.
///
/// Materials are always common and stackable. Weapons roll damage in
/// 5..=20 with a spread of 5..=30 on top, attack speed between 0.8 and
/// 1.5, and any rarity. Consumables roll common through rare.
pub fn seed_inventory(
    store: &mut InventoryStore,
    rng: &mut impl Rng,
    counts: SeedCounts,
) -> SeedReport {
    let mut report = SeedReport::default();

    for _ in 0..counts.materials {
        let name = pick(&MATERIAL_NAMES, rng).unwrap_or("Iron Ore");
        let stack_size = rng.random_range(1..=50);
        track(&store.add_item(ItemInstance::material(name, stack_size, 99)), &mut report);
    }

    for _ in 0..counts.weapons {
        let name = pick(&WEAPON_NAMES, rng).unwrap_or("Iron Sword");
        let min_damage: u32 = rng.random_range(5..=20);
        let max_damage = min_damage.saturating_add(rng.random_range(5..=30));
        let attack_speed = Decimal::new(rng.random_range(8_i64..=15), 1);
        let rarity = pick(&WEAPON_RARITIES, rng).unwrap_or(ItemRarity::Common);
        track(
            &store.add_item(ItemInstance::weapon(
                name,
                min_damage,
                max_damage,
                attack_speed,
                rarity,
            )),
            &mut report,
        );
    }

    for _ in 0..counts.consumables {
        let name = pick(&CONSUMABLE_NAMES, rng).unwrap_or("Bread");
        let stack_size = rng.random_range(1..=15);
        let rarity = pick(&CONSUMABLE_RARITIES, rng).unwrap_or(ItemRarity::Common);
        track(
            &store.add_item(ItemInstance::consumable(name, stack_size, 20, rarity)),
            &mut report,
        );
    }

    report
}

/// Pick one element of `pool` uniformly at random.
fn pick<T: Copy>(pool: &[T], rng: &mut impl Rng) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..pool.len());
    pool.get(idx).copied()
}

/// Fold one add outcome into the running report.
fn track(outcome: &Result<(), StoreError>, report: &mut SeedReport) {
    match outcome {
        Ok(()) => report.added = report.added.saturating_add(1),
        Err(error) => {
            warn!(%error, "seeded item rejected by the store");
            report.rejected = report.rejected.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use stockpile_store::{InventoryStore, StoreConfig};
    use stockpile_types::{ItemCategory, ItemRarity};

    use super::{SeedCounts, seed_inventory};

    fn demo_store() -> InventoryStore {
        InventoryStore::new(StoreConfig::default())
    }

    #[test]
    fn accounts_for_every_roll() {
        let mut store = demo_store();
        let mut rng = SmallRng::seed_from_u64(42);
        let counts = SeedCounts {
            materials: 5,
            weapons: 3,
            consumables: 5,
        };

        let report = seed_inventory(&mut store, &mut rng, counts);

        assert_eq!(report.added.saturating_add(report.rejected), 13);
        // 100 slots comfortably hold 13 rolls.
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn weapons_occupy_one_slot_each() {
        let mut store = demo_store();
        let mut rng = SmallRng::seed_from_u64(7);
        let counts = SeedCounts {
            materials: 0,
            weapons: 6,
            consumables: 0,
        };

        let _report = seed_inventory(&mut store, &mut rng, counts);

        let weapons = store.items_by_category(ItemCategory::Weapon);
        assert_eq!(weapons.len(), 6);
        for weapon in weapons {
            assert!(!weapon.is_stackable());
            assert_eq!(weapon.current_stack_size(), 1);
            assert_eq!(weapon.max_stack_size(), 1);
        }
    }

    #[test]
    fn material_rolls_stay_in_bounds() {
        let mut store = demo_store();
        let mut rng = SmallRng::seed_from_u64(11);
        let counts = SeedCounts {
            materials: 20,
            weapons: 0,
            consumables: 0,
        };

        let _report = seed_inventory(&mut store, &mut rng, counts);

        assert!(!store.is_empty());
        for item in store.all_items() {
            assert_eq!(item.category(), ItemCategory::Material);
            assert_eq!(item.rarity(), ItemRarity::Common);
            assert_eq!(item.max_stack_size(), 99);
            assert!(item.current_stack_size() >= 1);
            assert!(item.current_stack_size() <= 99);
        }
    }

    #[test]
    fn consumable_rarity_caps_at_rare() {
        let mut store = demo_store();
        let mut rng = SmallRng::seed_from_u64(23);
        let counts = SeedCounts {
            materials: 0,
            weapons: 0,
            consumables: 30,
        };

        let _report = seed_inventory(&mut store, &mut rng, counts);

        assert!(!store.is_empty());
        for item in store.all_items() {
            assert_eq!(item.category(), ItemCategory::Consumable);
            assert!(item.rarity() <= ItemRarity::Rare);
            assert_eq!(item.max_stack_size(), 20);
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_same_inventory() {
        let counts = SeedCounts {
            materials: 4,
            weapons: 2,
            consumables: 3,
        };

        let mut first = demo_store();
        let mut rng = SmallRng::seed_from_u64(99);
        let _report = seed_inventory(&mut first, &mut rng, counts);

        let mut second = demo_store();
        let mut rng = SmallRng::seed_from_u64(99);
        let _report = seed_inventory(&mut second, &mut rng, counts);

        assert_eq!(first.item_count(), second.item_count());
        for (a, b) in first.all_items().iter().zip(second.all_items()) {
            assert_eq!(a.name(), b.name());
            assert_eq!(a.category(), b.category());
            assert_eq!(a.rarity(), b.rarity());
            assert_eq!(a.current_stack_size(), b.current_stack_size());
        }
    }

    #[test]
    fn rejected_rolls_are_counted() {
        let mut store = InventoryStore::new(StoreConfig {
            max_slots: 1,
            auto_stack: true,
        });
        let mut rng = SmallRng::seed_from_u64(5);
        let counts = SeedCounts {
            materials: 0,
            weapons: 5,
            consumables: 0,
        };

        let report = seed_inventory(&mut store, &mut rng, counts);

        assert_eq!(report.added, 1);
        assert_eq!(report.rejected, 4);
        assert_eq!(store.item_count(), 1);
    }
}
