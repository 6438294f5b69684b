//! Configuration for the demo runner.
//!
//! All configuration is loaded from environment variables. The runner needs
//! the shape of the inventory it opens (capacity, stacking behavior) and how
//! many demo items of each category to roll into it.

use crate::error::RunnerError;

/// Complete runner configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Slot capacity of the demo inventory.
    pub max_slots: u32,
    /// Whether adds merge into existing stacks before taking a new slot.
    pub auto_stack: bool,
    /// How many random material stacks to seed.
    pub seed_materials: u32,
    /// How many random weapons to seed.
    pub seed_weapons: u32,
    /// How many random consumables to seed.
    pub seed_consumables: u32,
    /// Fixed RNG seed for reproducible runs. Unset means a fresh roll.
    pub rng_seed: Option<u64>,
}

impl RunnerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `STOCKPILE_MAX_SLOTS` -- inventory slot capacity (default 100)
    /// - `STOCKPILE_AUTO_STACK` -- merge adds into existing stacks (default `true`)
    /// - `STOCKPILE_SEED_MATERIALS` -- seeded material stacks (default 5)
    /// - `STOCKPILE_SEED_WEAPONS` -- seeded weapons (default 3)
    /// - `STOCKPILE_SEED_CONSUMABLES` -- seeded consumables (default 5)
    /// - `STOCKPILE_RNG_SEED` -- fix the item roll RNG (default unset)
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] when a variable is set but does not
    /// parse as its expected type.
    pub fn from_env() -> Result<Self, RunnerError> {
        let max_slots: u32 = std::env::var("STOCKPILE_MAX_SLOTS")
            .unwrap_or_else(|_| "100".to_owned())
            .parse()
            .map_err(|e| RunnerError::Config(format!("invalid STOCKPILE_MAX_SLOTS: {e}")))?;

        let auto_stack: bool = std::env::var("STOCKPILE_AUTO_STACK")
            .unwrap_or_else(|_| "true".to_owned())
            .parse()
            .map_err(|e| RunnerError::Config(format!("invalid STOCKPILE_AUTO_STACK: {e}")))?;

        let seed_materials: u32 = std::env::var("STOCKPILE_SEED_MATERIALS")
            .unwrap_or_else(|_| "5".to_owned())
            .parse()
            .map_err(|e| RunnerError::Config(format!("invalid STOCKPILE_SEED_MATERIALS: {e}")))?;

        let seed_weapons: u32 = std::env::var("STOCKPILE_SEED_WEAPONS")
            .unwrap_or_else(|_| "3".to_owned())
            .parse()
            .map_err(|e| RunnerError::Config(format!("invalid STOCKPILE_SEED_WEAPONS: {e}")))?;

        let seed_consumables: u32 = std::env::var("STOCKPILE_SEED_CONSUMABLES")
            .unwrap_or_else(|_| "5".to_owned())
            .parse()
            .map_err(|e| {
                RunnerError::Config(format!("invalid STOCKPILE_SEED_CONSUMABLES: {e}"))
            })?;

        let rng_seed: Option<u64> = std::env::var("STOCKPILE_RNG_SEED")
            .ok()
            .map(|raw| {
                raw.parse()
                    .map_err(|e| RunnerError::Config(format!("invalid STOCKPILE_RNG_SEED: {e}")))
            })
            .transpose()?;

        Ok(Self {
            max_slots,
            auto_stack,
            seed_materials,
            seed_weapons,
            seed_consumables,
            rng_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn runner_config_defaults() {
        // Verify default values used in from_env fallbacks
        let slots_default: u32 = "100".parse().unwrap_or(0);
        assert_eq!(slots_default, 100);

        let auto_stack_default: bool = "true".parse().unwrap_or(false);
        assert!(auto_stack_default);

        let materials_default: u32 = "5".parse().unwrap_or(0);
        assert_eq!(materials_default, 5);
    }
}
