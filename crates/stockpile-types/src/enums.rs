//! Enumeration types for item classification.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Broad classification of an item, used for filtering and display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Weapons: swords, axes, staves, bows.
    Weapon,
    /// Single-use items: potions, food, elixirs.
    Consumable,
    /// Crafting materials: ore, wood, cloth.
    Material,
    /// Wearable gear: armor, rings, trinkets.
    Equipment,
    /// Quest-bound items that exist for story progression.
    Quest,
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity grade of an item.
///
/// Variants are declared in ascending order, so the derived [`Ord`] gives
/// `Common < Uncommon < Rare < Epic < Legendary`. The ordering exists for
/// sorting and presentation; no engine rule branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemRarity {
    /// Baseline rarity for everyday items.
    Common,
    /// Slightly better than common.
    Uncommon,
    /// Hard to find.
    Rare,
    /// Very hard to find.
    Epic,
    /// The best grade an item can carry.
    Legendary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_orders_ascending() {
        assert!(ItemRarity::Common < ItemRarity::Uncommon);
        assert!(ItemRarity::Uncommon < ItemRarity::Rare);
        assert!(ItemRarity::Rare < ItemRarity::Epic);
        assert!(ItemRarity::Epic < ItemRarity::Legendary);
    }

    #[test]
    fn category_roundtrip_serde() {
        let json = serde_json::to_string(&ItemCategory::Quest).ok();
        assert_eq!(json.as_deref(), Some("\"Quest\""));
        let restored: Result<ItemCategory, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(matches!(restored, Ok(ItemCategory::Quest)));
    }

    #[test]
    fn rarity_roundtrip_serde() {
        let json = serde_json::to_string(&ItemRarity::Legendary).ok();
        assert_eq!(json.as_deref(), Some("\"Legendary\""));
        let restored: Result<ItemRarity, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(matches!(restored, Ok(ItemRarity::Legendary)));
    }
}
