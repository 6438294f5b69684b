//! Item instances and stack-level operations.
//!
//! An [`ItemInstance`] is the unit the inventory store manages: identity,
//! display data, classification, stacking state, and a block of inert combat
//! stats. Stack mutations live here; slot placement and merging across
//! entries belong to the store.
//!
//! # Design Principles
//!
//! - Stacking fields are private. Every mutation goes through methods that
//!   keep `1 <= current_stack_size <= max_stack_size` true.
//! - Combat stats are carried and displayed, never interpreted. No damage
//!   roll or durability loss happens in this engine.
//! - All stack arithmetic is checked or saturating (no silent overflow).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{ItemCategory, ItemRarity};
use crate::ids::ItemId;

// ---------------------------------------------------------------------------
// Errors and outcomes
// ---------------------------------------------------------------------------

/// Errors from stack-level operations on a single item.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    /// The item does not allow stacking at all.
    #[error("item is not stackable")]
    NotStackable,

    /// The requested amount was zero; stack operations move at least one unit.
    #[error("stack amount must be at least 1")]
    ZeroAmount,

    /// The stack holds fewer units than the removal asked for.
    #[error("cannot remove {requested} units from a stack of {available}")]
    InsufficientStack {
        /// Units the caller asked to remove.
        requested: u32,
        /// Units actually present in the stack.
        available: u32,
    },
}

/// Outcome of [`ItemInstance::add_to_stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAdd {
    /// Every requested unit fit in the stack.
    Complete,
    /// The stack hit its maximum and was clamped there.
    Clamped {
        /// Units that did not fit.
        overflow: u32,
    },
}

// ---------------------------------------------------------------------------
// Combat stats
// ---------------------------------------------------------------------------

/// Inert combat statistics attached to an item.
///
/// These values are opaque to the engine: they are stored, cloned, and
/// rendered, but no operation reads them to make a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Lower bound of the damage range.
    pub min_damage: u32,
    /// Upper bound of the damage range.
    pub max_damage: u32,
    /// Attacks per second.
    pub attack_speed: Decimal,
    /// Remaining durability.
    pub current_durability: u32,
    /// Durability when the item is pristine.
    pub max_durability: u32,
    /// Carry weight of a single unit.
    pub weight: Decimal,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            min_damage: 0,
            max_damage: 0,
            attack_speed: Decimal::ONE,
            current_durability: 100,
            max_durability: 100,
            weight: Decimal::ONE,
        }
    }
}

// ---------------------------------------------------------------------------
// Construction parameters
// ---------------------------------------------------------------------------

/// Parameters for creating an [`ItemInstance`].
///
/// Numeric fields are requests, not guarantees: construction clamps them
/// into the valid stacking range (see [`ItemInstance::new`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemParams {
    /// Display name shown in UI and logs.
    pub name: String,
    /// Flavor or tooltip text.
    pub description: String,
    /// Classification for filtering.
    pub category: ItemCategory,
    /// Rarity grade.
    pub rarity: ItemRarity,
    /// Whether multiple units may share one slot.
    pub stackable: bool,
    /// Requested stack capacity (ignored for non-stackable items).
    pub max_stack_size: u32,
    /// Requested starting stack size.
    pub initial_stack_size: u32,
    /// Inert combat statistics.
    pub stats: CombatStats,
}

impl Default for ItemParams {
    fn default() -> Self {
        Self {
            name: "New Item".to_owned(),
            description: "Item description".to_owned(),
            category: ItemCategory::Material,
            rarity: ItemRarity::Common,
            stackable: false,
            max_stack_size: 1,
            initial_stack_size: 1,
            stats: CombatStats::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Item instance
// ---------------------------------------------------------------------------

/// A single inventory item: one slot-occupying entry with a stack of
/// identical units.
///
/// Identity ([`ItemId`]) is assigned at construction and never changes.
/// The stacking invariant `1 <= current_stack_size <= max_stack_size`
/// holds after construction and after every mutating method; a stack can
/// only reach 0 through [`remove_from_stack`], which tells the caller the
/// entry is now empty and should be dropped from wherever it is held.
///
/// [`remove_from_stack`]: ItemInstance::remove_from_stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInstance {
    id: ItemId,
    name: String,
    description: String,
    category: ItemCategory,
    rarity: ItemRarity,
    stackable: bool,
    current_stack_size: u32,
    max_stack_size: u32,
    stats: CombatStats,
    created_at: DateTime<Utc>,
}

impl ItemInstance {
    /// Create an item from construction parameters.
    ///
    /// Clamping rules:
    /// - non-stackable items get `max_stack_size = 1` regardless of the
    ///   requested capacity; stackable items get at least 1
    /// - the starting stack is clamped into `[1, max_stack_size]`
    /// - items enter the world at full durability
    pub fn new(params: ItemParams) -> Self {
        let max_stack_size = if params.stackable {
            params.max_stack_size.max(1)
        } else {
            1
        };
        let current_stack_size = params.initial_stack_size.clamp(1, max_stack_size);
        let mut stats = params.stats;
        stats.current_durability = stats.max_durability;

        Self {
            id: ItemId::new(),
            name: params.name,
            description: params.description,
            category: params.category,
            rarity: params.rarity,
            stackable: params.stackable,
            current_stack_size,
            max_stack_size,
            stats,
            created_at: Utc::now(),
        }
    }

    /// Create a common crafting material (stackable).
    pub fn material(name: &str, stack_size: u32, max_stack_size: u32) -> Self {
        Self::new(ItemParams {
            name: name.to_owned(),
            description: format!("A crafting material: {name}"),
            category: ItemCategory::Material,
            rarity: ItemRarity::Common,
            stackable: true,
            max_stack_size,
            initial_stack_size: stack_size,
            ..ItemParams::default()
        })
    }

    /// Create a weapon (never stackable, occupies a full slot).
    pub fn weapon(
        name: &str,
        min_damage: u32,
        max_damage: u32,
        attack_speed: Decimal,
        rarity: ItemRarity,
    ) -> Self {
        Self::new(ItemParams {
            name: name.to_owned(),
            description: format!("Damage: {min_damage}-{max_damage}"),
            category: ItemCategory::Weapon,
            rarity,
            stackable: false,
            max_stack_size: 1,
            initial_stack_size: 1,
            stats: CombatStats {
                min_damage,
                max_damage,
                attack_speed,
                ..CombatStats::default()
            },
        })
    }

    /// Create a consumable (stackable).
    pub fn consumable(
        name: &str,
        stack_size: u32,
        max_stack_size: u32,
        rarity: ItemRarity,
    ) -> Self {
        Self::new(ItemParams {
            name: name.to_owned(),
            description: format!("Consumable item: {name}"),
            category: ItemCategory::Consumable,
            rarity,
            stackable: true,
            max_stack_size,
            initial_stack_size: stack_size,
            ..ItemParams::default()
        })
    }

    // ----- Accessors -----

    /// Unique identifier of this instance.
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Display name.
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Flavor or tooltip text.
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Classification for filtering.
    pub const fn category(&self) -> ItemCategory {
        self.category
    }

    /// Rarity grade.
    pub const fn rarity(&self) -> ItemRarity {
        self.rarity
    }

    /// Whether multiple units may share this entry.
    pub const fn is_stackable(&self) -> bool {
        self.stackable
    }

    /// Units currently in the stack.
    pub const fn current_stack_size(&self) -> u32 {
        self.current_stack_size
    }

    /// Maximum units one stack holds.
    pub const fn max_stack_size(&self) -> u32 {
        self.max_stack_size
    }

    /// Inert combat statistics.
    pub const fn stats(&self) -> &CombatStats {
        &self.stats
    }

    /// Creation timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // ----- Stack queries -----

    /// Whether the stack is at capacity.
    pub const fn is_stack_full(&self) -> bool {
        self.current_stack_size >= self.max_stack_size
    }

    /// Units this stack can still absorb.
    pub const fn free_space(&self) -> u32 {
        self.max_stack_size.saturating_sub(self.current_stack_size)
    }

    /// Whether `incoming` could merge into this entry: both sides stackable,
    /// same name, same category, and this stack not already full.
    pub fn can_stack_with(&self, incoming: &Self) -> bool {
        self.stackable
            && incoming.stackable
            && !self.is_stack_full()
            && self.name == incoming.name
            && self.category == incoming.category
    }

    /// Case-insensitive substring match against the display name.
    pub fn matches_name(&self, query: &str) -> bool {
        let lower_name = self.name.to_lowercase();
        let lower_query = query.to_lowercase();
        lower_name.contains(&lower_query)
    }

    // ----- Stack mutations -----

    /// Add units to the stack.
    ///
    /// On overflow the stack is clamped to its maximum and the unabsorbed
    /// remainder is reported via [`StackAdd::Clamped`]; the mutation still
    /// happens in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NotStackable`] for non-stackable items and
    /// [`ItemError::ZeroAmount`] for `amount == 0`. Neither error mutates
    /// the stack.
    pub fn add_to_stack(&mut self, amount: u32) -> Result<StackAdd, ItemError> {
        if !self.stackable {
            return Err(ItemError::NotStackable);
        }
        if amount == 0 {
            return Err(ItemError::ZeroAmount);
        }

        // current <= max always holds, so free space and overflow are exact
        // even when current + amount would not fit in a u32.
        let free = self.free_space();
        if amount > free {
            self.current_stack_size = self.max_stack_size;
            return Ok(StackAdd::Clamped {
                overflow: amount.saturating_sub(free),
            });
        }

        self.current_stack_size = self.current_stack_size.saturating_add(amount);
        Ok(StackAdd::Complete)
    }

    /// Remove units from the stack and return the new stack size.
    ///
    /// A returned 0 means the entry is now empty; the holder is expected to
    /// drop it. The instance itself stays usable until then.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::ZeroAmount`] for `amount == 0` and
    /// [`ItemError::InsufficientStack`] when the stack holds fewer units
    /// than requested. Neither error mutates the stack.
    pub fn remove_from_stack(&mut self, amount: u32) -> Result<u32, ItemError> {
        if amount == 0 {
            return Err(ItemError::ZeroAmount);
        }
        if amount > self.current_stack_size {
            return Err(ItemError::InsufficientStack {
                requested: amount,
                available: self.current_stack_size,
            });
        }

        self.current_stack_size = self.current_stack_size.saturating_sub(amount);
        Ok(self.current_stack_size)
    }

    /// Set the stack size directly, clamped into `[1, max_stack_size]`.
    pub fn set_stack_size(&mut self, new_size: u32) {
        self.current_stack_size = new_size.clamp(1, self.max_stack_size);
    }
}
