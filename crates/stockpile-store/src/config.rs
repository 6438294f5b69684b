//! Configurable parameters for inventory stores.

/// Configuration for a newly created inventory store.
///
/// `max_slots` counts entries, not units: a stack of 99 arrows occupies one
/// slot. Values below 1 are raised to 1 at store construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Slot capacity (default: 100).
    pub max_slots: u32,

    /// Whether adds merge into existing stacks before taking a new slot
    /// (default: true).
    pub auto_stack: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_slots: 100,
            auto_stack: true,
        }
    }
}
